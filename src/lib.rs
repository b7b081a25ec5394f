//! Interchangeable strategies for generating all primes up to a bound.
//!
//! Five strategies solve the same problem with different decompositions:
//! a classic sequential sieve, a segmented sequential variant, a shared
//! bitmap split into per-thread chunks, fork-join trial division over
//! range partitions, and a thread-pool fan-out with one task per base
//! prime. Every strategy returns the identical ascending sequence for
//! the same bound; [`primes_upto`] dispatches on [`Strategy`].

mod decomposition;
mod error;
mod fanout;
mod partition;
mod sieve;
mod strategy;

pub use decomposition::{DEFAULT_CHUNK_THREADS, chunked_threads, partitioned_trial};
pub use error::SieveError;
pub use fanout::prime_fanout;
pub use sieve::{segmented, sequential};
pub use strategy::{Strategy, primes_upto};
