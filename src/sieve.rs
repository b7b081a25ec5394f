use bitvec::prelude::*;

use crate::error::SieveError;

/// Sieves [0, limit] and returns the bitmap, `true` = prime.
fn sieve_bitmap(limit: u64) -> BitVec<u8, Lsb0> {
    let mut is_prime = bitvec![u8, Lsb0; 1; (limit + 1) as usize];
    is_prime.set(0, false);
    if limit >= 1 {
        is_prime.set(1, false);
    }

    for i in 2..=(limit as f64).sqrt() as u64 {
        if is_prime[i as usize] {
            for j in (i * i..=limit).step_by(i as usize) {
                is_prime.set(j as usize, false);
            }
        }
    }

    is_prime
}

/// Primes up to `limit` inclusive, used by every other strategy to seed
/// trial division. Tolerates limits below 2 (empty result).
pub(crate) fn base_primes(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }
    sieve_bitmap(limit).iter_ones().map(|i| i as u64).collect()
}

/// Trial division against an ascending prime list, early-exiting once
/// `p * p` passes the candidate.
pub(crate) fn survives_trial(candidate: u64, base: &[u64]) -> bool {
    for &p in base {
        if p.saturating_mul(p) > candidate {
            break;
        }
        if candidate % p == 0 {
            return false;
        }
    }
    true
}

/// Classic sequential sieve of Eratosthenes. This is the reference
/// implementation the concurrent strategies are validated against.
pub fn sequential(bound: u64) -> Result<Vec<u64>, SieveError> {
    if bound < 1 {
        return Err(SieveError::invalid_bound(bound, 1));
    }
    Ok(sieve_bitmap(bound).iter_ones().map(|i| i as u64).collect())
}

/// Two-stage sequential variant: sieve base primes up to sqrt(bound),
/// then trial-divide every candidate above it. No bitmap is kept for the
/// upper range.
pub fn segmented(bound: u64) -> Result<Vec<u64>, SieveError> {
    if bound < 1 {
        return Err(SieveError::invalid_bound(bound, 1));
    }

    let limit = (bound as f64).sqrt() as u64;
    let base = base_primes(limit);

    let mut primes = base.clone();
    for candidate in (limit + 1)..=bound {
        if survives_trial(candidate, &base) {
            primes.push(candidate);
        }
    }

    Ok(primes)
}
