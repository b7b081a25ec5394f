use crate::config::Config;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, Debug)]
struct TimingData {
    strategy: String,
    bound: u64,
    prime_count: u64,
    largest_prime: Option<u64>,
    elapsed_ms: f64,
    matches_reference: Option<bool>,
}

/// Renders report.html from timings.csv: a chart.js bar chart of the
/// per-strategy timings plus a prime-count summary line.
pub fn generate_report(config: &Config) -> Result<(), Box<dyn Error>> {
    let output_dir = &config.output_dir;

    let timings_path = Path::new(output_dir).join("timings.csv");
    let mut reader = csv::Reader::from_path(timings_path)?;
    let mut timings: Vec<TimingData> = Vec::new();
    for result in reader.deserialize() {
        let record: TimingData = result?;
        timings.push(record);
    }
    let timings_json = serde_json::to_string(&timings)?;

    let bound = timings.first().map(|t| t.bound).unwrap_or_default();
    let prime_count = timings.first().map(|t| t.prime_count).unwrap_or_default();

    let html_content = format!(
        r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Prime Strategy Comparison</title>
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
    <style>
        body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; margin: 0; background-color: #f8f9fa; color: #212529; }}
        .container {{ max-width: 900px; margin: 2rem auto; padding: 2rem; background-color: #fff; border-radius: 8px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); }}
        h1, h2 {{ text-align: center; color: #343a40; }}
        .summary {{ text-align: center; margin-bottom: 2rem; color: #6c757d; }}
        .chart-container {{ margin-top: 2rem; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>Prime Strategy Comparison</h1>
        <div class="summary">
            <p><strong>Bound:</strong> {bound} | <strong>Primes found:</strong> {prime_count}</p>
        </div>

        <div class="chart-container">
            <h2>Elapsed Time per Strategy</h2>
            <canvas id="timingChart"></canvas>
        </div>
    </div>

    <script>
        const timings = {timings_json};

        new Chart(document.getElementById('timingChart'), {{
            type: 'bar',
            data: {{
                labels: timings.map(t => t.strategy),
                datasets: [{{
                    label: 'Elapsed (ms, best sample)',
                    data: timings.map(t => t.elapsed_ms),
                    backgroundColor: timings.map(t =>
                        t.matches_reference === false ? 'rgba(255, 99, 132, 0.6)' : 'rgba(54, 162, 235, 0.6)'),
                }}]
            }},
            options: {{
                plugins: {{
                    tooltip: {{
                        callbacks: {{
                            label: function(context) {{
                                const t = timings[context.dataIndex];
                                return `${{t.elapsed_ms.toFixed(3)}} ms | ${{t.prime_count}} primes | verified: ${{t.matches_reference}}`;
                            }}
                        }}
                    }}
                }},
                scales: {{
                    y: {{ beginAtZero: true, title: {{ display: true, text: 'Elapsed (ms)' }} }},
                    x: {{ title: {{ display: true, text: 'Strategy' }} }}
                }}
            }}
        }});
    </script>
</body>
</html>
"#,
        bound = bound,
        prime_count = prime_count,
        timings_json = timings_json,
    );

    let report_path = Path::new(output_dir).join("report.html");
    fs::write(report_path, html_content)?;

    Ok(())
}
