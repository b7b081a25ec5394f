use std::fmt;

use clap::ValueEnum;

use crate::decomposition::{DEFAULT_CHUNK_THREADS, chunked_threads, partitioned_trial};
use crate::error::SieveError;
use crate::fanout::prime_fanout;
use crate::sieve::{segmented, sequential};

/// Selector for the interchangeable generation strategies. All of them
/// return the same ascending prime sequence for the same bound; they
/// differ only in how the work is decomposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Classic sequential sieve of Eratosthenes (the reference).
    Sequential,
    /// Sequential base sieve plus trial division above sqrt(N).
    Segmented,
    /// Shared bitmap split into disjoint per-thread chunks.
    Chunked,
    /// Fork-join trial division over range partitions.
    Partitioned,
    /// One pooled task per base prime, composites subtracted at the end.
    Fanout,
}

impl Strategy {
    /// Every strategy, in comparison order.
    pub const ALL: [Strategy; 5] = [
        Strategy::Sequential,
        Strategy::Segmented,
        Strategy::Chunked,
        Strategy::Partitioned,
        Strategy::Fanout,
    ];

    /// Smallest bound the strategy accepts; anything below fails with
    /// [`SieveError::InvalidBound`].
    pub fn min_bound(self) -> u64 {
        match self {
            Self::Sequential | Self::Segmented | Self::Chunked => 1,
            Self::Partitioned | Self::Fanout => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Segmented => "segmented",
            Self::Chunked => "chunked",
            Self::Partitioned => "partitioned",
            Self::Fanout => "fanout",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs the selected strategy and returns all primes up to `bound`,
/// ascending. The chunked strategy runs with its default thread count;
/// call [`chunked_threads`] directly to pick another.
pub fn primes_upto(strategy: Strategy, bound: u64) -> Result<Vec<u64>, SieveError> {
    match strategy {
        Strategy::Sequential => sequential(bound),
        Strategy::Segmented => segmented(bound),
        Strategy::Chunked => chunked_threads(bound, DEFAULT_CHUNK_THREADS),
        Strategy::Partitioned => partitioned_trial(bound),
        Strategy::Fanout => prime_fanout(bound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_cli_names() {
        let names: Vec<&str> = Strategy::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec!["sequential", "segmented", "chunked", "partitioned", "fanout"]
        );
    }

    #[test]
    fn dispatch_reaches_every_strategy() {
        let expected = sequential(50).unwrap();
        for strategy in Strategy::ALL {
            assert_eq!(primes_upto(strategy, 50).unwrap(), expected, "{strategy}");
        }
    }
}
