mod config;
mod output;
mod report;
mod stats;

use clap::Parser;
use indicatif::ProgressBar;
use prime_strategies::{SieveError, Strategy, chunked_threads, primes_upto, sequential};
use stats::RunRecord;
use std::error::Error;
use std::time::{Duration, Instant};

use crate::config::Config;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();

    // --- Config Validation ---
    if config.threads == 0 {
        eprintln!("Error: --threads must be at least 1.");
        std::process::exit(1);
    }
    if config.samples == 0 {
        eprintln!("Error: --samples must be at least 1.");
        std::process::exit(1);
    }
    if config.web_report && !config.compare {
        eprintln!("Error: --web-report requires --compare.");
        std::process::exit(1);
    }

    println!("Bound: {}", config.bound);
    println!("Output Dir: {}", config.output_dir);

    if config.compare {
        run_compare(&config)
    } else {
        run_single(&config)
    }
}

fn run_strategy(strategy: Strategy, config: &Config) -> Result<Vec<u64>, SieveError> {
    match strategy {
        Strategy::Chunked => chunked_threads(config.bound, config.threads),
        other => primes_upto(other, config.bound),
    }
}

fn run_single(config: &Config) -> Result<(), Box<dyn Error>> {
    println!("Strategy: {}", config.strategy);

    let started = Instant::now();
    let primes = run_strategy(config.strategy, config)?;
    let elapsed = started.elapsed();

    let mut record = RunRecord::capture(config.strategy, config.bound, &primes, elapsed);
    if config.verify {
        let reference = sequential(config.bound)?;
        record.matches_reference = Some(primes == reference);
    }

    println!(
        "Found {} primes (largest: {}) in {:.3} ms",
        record.prime_count,
        record
            .largest_prime
            .map_or_else(|| "none".to_string(), |p| p.to_string()),
        record.elapsed_ms
    );

    match record.matches_reference {
        Some(true) => println!("Verification: matches the sequential reference."),
        Some(false) => {
            eprintln!("Verification FAILED: output differs from the sequential reference.");
            std::process::exit(1);
        }
        None => {}
    }

    if config.print {
        for prime in &primes {
            println!("{prime}");
        }
    }

    output::write_results(std::slice::from_ref(&record), config)?;
    if config.dump_primes {
        output::write_primes(&primes, config)?;
    }
    println!("Results written to {}", config.output_dir);

    Ok(())
}

fn run_compare(config: &Config) -> Result<(), Box<dyn Error>> {
    let reference = sequential(config.bound)?;

    let runnable: Vec<Strategy> = Strategy::ALL
        .into_iter()
        .filter(|s| config.bound >= s.min_bound())
        .collect();
    for skipped in Strategy::ALL
        .into_iter()
        .filter(|s| config.bound < s.min_bound())
    {
        println!(
            "Skipping {skipped}: bound {} is below its minimum {}",
            config.bound,
            skipped.min_bound()
        );
    }

    let bar = ProgressBar::new(runnable.len() as u64 * config.samples as u64);
    bar.set_style(
        indicatif::ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>3}/{len:3} {msg}")?
            .progress_chars("#>-"),
    );

    let mut records = Vec::new();
    for &strategy in &runnable {
        bar.set_message(strategy.to_string());

        let mut best: Option<(Vec<u64>, Duration)> = None;
        for _ in 0..config.samples {
            let started = Instant::now();
            let primes = run_strategy(strategy, config)?;
            let elapsed = started.elapsed();
            if best.as_ref().is_none_or(|(_, fastest)| elapsed < *fastest) {
                best = Some((primes, elapsed));
            }
            bar.inc(1);
        }

        let (primes, elapsed) = best.expect("samples is validated to be at least 1");
        let mut record = RunRecord::capture(strategy, config.bound, &primes, elapsed);
        record.matches_reference = Some(primes == reference);
        records.push(record);
    }
    bar.finish_with_message("Comparison complete.");

    println!();
    println!(
        "{:<12} {:>12} {:>14} {:>12} {:>10}",
        "strategy", "primes", "largest", "elapsed ms", "verified"
    );
    for record in &records {
        println!(
            "{:<12} {:>12} {:>14} {:>12.3} {:>10}",
            record.strategy,
            record.prime_count,
            record
                .largest_prime
                .map_or_else(|| "-".to_string(), |p| p.to_string()),
            record.elapsed_ms,
            match record.matches_reference {
                Some(true) => "yes",
                Some(false) => "NO",
                None => "-",
            },
        );
    }

    if records
        .iter()
        .any(|r| r.matches_reference == Some(false))
    {
        eprintln!("Error: at least one strategy differs from the sequential reference.");
        std::process::exit(1);
    }

    output::write_results(&records, config)?;
    println!("Results written to {}", config.output_dir);

    if config.web_report {
        println!("Generating HTML report...");
        report::generate_report(config)?;
        println!("Report generated at {}/report.html", config.output_dir);
    }

    Ok(())
}
