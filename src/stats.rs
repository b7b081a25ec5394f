use serde::Serialize;
use std::time::Duration;

use prime_strategies::Strategy;

/// One timed strategy run, as written to the CSV/JSON outputs.
#[derive(Debug, Serialize)]
pub struct RunRecord {
    pub strategy: String,
    pub bound: u64,
    pub prime_count: usize,
    pub largest_prime: Option<u64>,
    pub elapsed_ms: f64,
    /// Set when the run was cross-checked against the sequential reference.
    pub matches_reference: Option<bool>,
}

impl RunRecord {
    pub fn capture(strategy: Strategy, bound: u64, primes: &[u64], elapsed: Duration) -> Self {
        Self {
            strategy: strategy.to_string(),
            bound,
            prime_count: primes.len(),
            largest_prime: primes.last().copied(),
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            matches_reference: None,
        }
    }
}
