use crate::config::Config;
use crate::stats::RunRecord;
use csv::Writer;
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Writes timings.csv and summary.json into the output directory.
pub fn write_results(records: &[RunRecord], config: &Config) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&config.output_dir)?;

    write_timings(records, config)?;
    write_summary(records, config)?;

    Ok(())
}

fn write_timings(records: &[RunRecord], config: &Config) -> Result<(), Box<dyn Error>> {
    let path = Path::new(&config.output_dir).join("timings.csv");
    let mut wtr = Writer::from_path(path)?;

    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct Summary<'a> {
    bound: u64,
    runs: &'a [RunRecord],
}

fn write_summary(records: &[RunRecord], config: &Config) -> Result<(), Box<dyn Error>> {
    let path = Path::new(&config.output_dir).join("summary.json");
    let bound = records.first().map(|r| r.bound).unwrap_or_default();

    let summary = Summary {
        bound,
        runs: records,
    };
    fs::write(path, serde_json::to_string_pretty(&summary)?)?;
    Ok(())
}

/// Writes the generated primes to primes.csv, one per row.
pub fn write_primes(primes: &[u64], config: &Config) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&config.output_dir)?;

    let path = Path::new(&config.output_dir).join("primes.csv");
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["prime"])?;
    for prime in primes {
        wtr.write_record([prime.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
