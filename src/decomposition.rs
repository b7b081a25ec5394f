use std::mem;
use std::sync::Mutex;
use std::thread;

use bitvec::prelude::*;
use rayon::prelude::*;

use crate::error::SieveError;
use crate::partition::split_range;
use crate::sieve::base_primes;

/// Worker count used by [`chunked_threads`] when the caller does not pick one.
pub const DEFAULT_CHUNK_THREADS: usize = 10;

/// Sieve over a shared bitmap whose upper range is split into per-thread
/// chunks.
///
/// The base region [2, sqrt(bound)] is sieved sequentially first, so the
/// base-prime list is complete before any worker starts. Each worker then
/// receives exclusive ownership of one disjoint chunk of the bitmap tail
/// and clears every entry divisible by a base prime. The repeated
/// `split_at_mut` makes overlapping writes unrepresentable, so no locking
/// is needed on the bitmap.
pub fn chunked_threads(bound: u64, threads: usize) -> Result<Vec<u64>, SieveError> {
    if bound < 1 {
        return Err(SieveError::invalid_bound(bound, 1));
    }
    let threads = threads.max(1);
    let split = (bound as f64).sqrt() as u64;

    let mut is_prime = bitvec![u8, Lsb0; 1; (bound + 1) as usize];
    is_prime.set(0, false);
    is_prime.set(1, false);

    // Stage A: sieve [2, split] in place, advancing to the next entry still
    // marked prime and striking its multiples within the base region.
    let mut discovered: Vec<u64> = Vec::new();
    let mut current = 2u64;
    while current <= split {
        if is_prime[current as usize] {
            discovered.push(current);
            let mut multiple = current * current;
            while multiple <= split {
                is_prime.set(multiple as usize, false);
                multiple += current;
            }
        }
        current += 1;
    }

    // Stage B: one scoped thread per chunk of (split, bound].
    let chunks = split_range(split + 1, bound + 1, threads);
    let (_, mut tail) = is_prime.split_at_mut((split + 1) as usize);
    thread::scope(|scope| {
        for chunk_range in chunks {
            let len = (chunk_range.end - chunk_range.start) as usize;
            let (chunk, rest) = mem::take(&mut tail).split_at_mut(len);
            tail = rest;
            let base = &discovered;
            scope.spawn(move || {
                for (offset, value) in chunk_range.enumerate() {
                    if base.iter().any(|&p| value % p == 0) {
                        chunk.set(offset, false);
                    }
                }
            });
        }
    });

    Ok(is_prime.iter_ones().map(|i| i as u64).collect())
}

/// Fork-join trial division over contiguous partitions of the upper range.
///
/// Base primes are computed sequentially, the range above sqrt(bound) is
/// split into one partition per logical core, and every partition worker
/// trial-divides its candidates against the full base list, appending
/// survivors to a shared mutex-guarded vector. Any worker failure aborts
/// the whole call with a single aggregated error.
pub fn partitioned_trial(bound: u64) -> Result<Vec<u64>, SieveError> {
    if bound < 2 {
        return Err(SieveError::invalid_bound(bound, 2));
    }

    let split = (bound as f64).sqrt() as u64;
    let base = base_primes(split);
    let workers = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);

    let found = Mutex::new(Vec::new());
    split_range(split + 1, bound + 1, workers)
        .into_par_iter()
        .try_for_each(|range| -> Result<(), SieveError> {
            let mut local = Vec::new();
            for candidate in range {
                if checked_trial(candidate, &base)? {
                    local.push(candidate);
                }
            }
            found
                .lock()
                .map_err(|_| SieveError::poisoned("the survivor list"))?
                .append(&mut local);
            Ok(())
        })?;

    let mut primes = found
        .into_inner()
        .map_err(|_| SieveError::poisoned("the survivor list"))?;
    primes.extend_from_slice(&base);
    primes.sort_unstable();
    Ok(primes)
}

/// Trial division whose early-exit square is checked, so overflow surfaces
/// as a worker error instead of wrapping.
fn checked_trial(candidate: u64, base: &[u64]) -> Result<bool, SieveError> {
    for &p in base {
        let square = p.checked_mul(p).ok_or_else(|| {
            SieveError::computation(format!("square of base prime {p} overflowed"))
        })?;
        if square > candidate {
            break;
        }
        if candidate % p == 0 {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sieve::sequential;

    #[test]
    fn chunked_rejects_zero() {
        assert_eq!(
            chunked_threads(0, DEFAULT_CHUNK_THREADS),
            Err(SieveError::InvalidBound { bound: 0, min: 1 })
        );
    }

    #[test]
    fn chunked_matches_sequential() {
        for bound in [1, 2, 3, 4, 9, 18, 49, 100, 1_000] {
            let expected = sequential(bound).unwrap();
            for threads in [1, 3, DEFAULT_CHUNK_THREADS] {
                assert_eq!(
                    chunked_threads(bound, threads).unwrap(),
                    expected,
                    "bound {bound}, {threads} threads"
                );
            }
        }
    }

    #[test]
    fn chunked_keeps_square_bounds_composite() {
        // bound = p * p exercises the base-region upper edge.
        assert_eq!(chunked_threads(49, 4).unwrap(), sequential(49).unwrap());
        assert_eq!(chunked_threads(121, 4).unwrap(), sequential(121).unwrap());
    }

    #[test]
    fn partitioned_rejects_bounds_below_two() {
        for bound in [0, 1] {
            assert_eq!(
                partitioned_trial(bound),
                Err(SieveError::InvalidBound { bound, min: 2 })
            );
        }
    }

    #[test]
    fn partitioned_matches_sequential() {
        for bound in [2, 3, 18, 100, 10_000] {
            assert_eq!(
                partitioned_trial(bound).unwrap(),
                sequential(bound).unwrap(),
                "bound {bound}"
            );
        }
    }

    #[test]
    fn checked_trial_accepts_primes_and_rejects_composites() {
        let base = base_primes(100);
        assert!(checked_trial(10_007, &base).unwrap());
        assert!(!checked_trial(10_001, &base).unwrap()); // 73 * 137
    }
}
