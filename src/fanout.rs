use std::sync::{Arc, Mutex};

use bitvec::prelude::*;
use crossbeam_utils::sync::WaitGroup;

use crate::error::SieveError;
use crate::sieve::base_primes;

/// Thread-pool fan-out: one pooled task per base prime.
///
/// Every task scans the whole upper range (split, bound] and records each
/// multiple of its prime into a shared append-only vector; the same
/// composite may be recorded by several tasks and is de-duplicated on
/// read. A wait-group clone moves into each task and drops on every exit
/// path, so the blocked caller is always released, even when a task
/// records a failure instead of finishing its scan.
///
/// Total work is O(base primes x range). The strategy exists as a
/// comparison baseline, not as a production sieve.
pub fn prime_fanout(bound: u64) -> Result<Vec<u64>, SieveError> {
    if bound < 2 {
        return Err(SieveError::invalid_bound(bound, 2));
    }

    let split = (bound as f64).sqrt() as u64;
    let base = base_primes(split);
    let start = split + 1;

    let composites = Arc::new(Mutex::new(Vec::new()));
    let failures: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

    let wg = WaitGroup::new();
    for &p in &base {
        let wg = wg.clone();
        let composites = Arc::clone(&composites);
        let failures = Arc::clone(&failures);
        rayon::spawn(move || {
            let mut marked = Vec::new();
            for value in start..=bound {
                if value % p == 0 {
                    marked.push(value);
                }
            }
            match composites.lock() {
                Ok(mut all) => all.append(&mut marked),
                Err(_) => {
                    if let Ok(mut log) = failures.lock() {
                        log.push(format!(
                            "composite list poisoned while recording multiples of {p}"
                        ));
                    }
                }
            }
            drop(wg);
        });
    }
    wg.wait();

    let failures = failures
        .lock()
        .map_err(|_| SieveError::poisoned("the failure log"))?;
    if !failures.is_empty() {
        return Err(SieveError::computation(failures.join("; ")));
    }

    let composites = composites
        .lock()
        .map_err(|_| SieveError::poisoned("the composite list"))?;

    let mut primes = base;
    primes.extend(collect_survivors(start, bound, &composites));
    Ok(primes)
}

/// Upper range minus the recorded composites, duplicates tolerated.
fn collect_survivors(start: u64, bound: u64, composites: &[u64]) -> Vec<u64> {
    let span = (bound + 1 - start) as usize;
    let mut composite = bitvec![u8, Lsb0; 0; span];
    for &value in composites {
        composite.set((value - start) as usize, true);
    }
    composite
        .iter_zeros()
        .map(|offset| start + offset as u64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sieve::sequential;

    #[test]
    fn rejects_bounds_below_two() {
        for bound in [0, 1] {
            assert_eq!(
                prime_fanout(bound),
                Err(SieveError::InvalidBound { bound, min: 2 })
            );
        }
    }

    #[test]
    fn smallest_bound_yields_two() {
        assert_eq!(prime_fanout(2).unwrap(), vec![2]);
    }

    #[test]
    fn matches_sequential() {
        for bound in [2, 3, 4, 18, 100, 10_000] {
            assert_eq!(
                prime_fanout(bound).unwrap(),
                sequential(bound).unwrap(),
                "bound {bound}"
            );
        }
    }

    #[test]
    fn duplicate_composites_do_not_affect_survivors() {
        let survivors = collect_survivors(4, 10, &[4, 4, 6, 6, 8, 9, 10, 10]);
        assert_eq!(survivors, vec![5, 7]);
    }

    #[test]
    fn empty_composites_keep_the_whole_range() {
        assert_eq!(collect_survivors(2, 3, &[]), vec![2, 3]);
    }
}
