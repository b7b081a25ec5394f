use clap::Parser;
use prime_strategies::{DEFAULT_CHUNK_THREADS, Strategy};

/// Runs and compares interchangeable prime-generation strategies.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Upper bound N (inclusive) for prime generation.
    #[arg(short = 'n', long)]
    pub bound: u64,

    /// Strategy to run.
    #[arg(short, long, value_enum, default_value_t = Strategy::Sequential)]
    pub strategy: Strategy,

    /// Worker threads for the chunked strategy.
    #[arg(long, default_value_t = DEFAULT_CHUNK_THREADS)]
    pub threads: usize,

    /// Run every strategy against the bound and compare timings.
    #[arg(long)]
    pub compare: bool,

    /// Timed samples per strategy in comparison mode; the best sample is
    /// reported.
    #[arg(long, default_value_t = 3)]
    pub samples: u32,

    /// Cross-check the result against the sequential reference.
    #[arg(long)]
    pub verify: bool,

    /// Directory for output files.
    #[arg(short, long, default_value = "results")]
    pub output_dir: String,

    /// Also write the generated primes to primes.csv.
    #[arg(long)]
    pub dump_primes: bool,

    /// Print the generated primes to stdout.
    #[arg(long)]
    pub print: bool,

    /// Generate a self-contained HTML report with a timing chart.
    #[arg(long)]
    pub web_report: bool,
}
