//! Segmented Sieve of Eratosthenes for locating the N-th prime.
//!
//! The N-th prime (0-indexed, so index 0 is the value 2) is found by first
//! bounding it from above with [`estimate_limit`], then sieving `[0, limit)`
//! in fixed-size windows. Peak memory is one window of `max_chunk_size`
//! booleans plus the primes collected so far, instead of one boolean per
//! integer below the limit.
//!
//! ```
//! use fsieve_core::{SegmentedSieve, SieveConfig, nth_prime};
//!
//! assert_eq!(nth_prime(0).unwrap(), 2);
//! assert_eq!(nth_prime(99).unwrap(), 541);
//!
//! let small_windows = SegmentedSieve::new(SieveConfig::default().with_max_chunk_size(64)).unwrap();
//! assert_eq!(small_windows.nth_prime(99).unwrap(), 541);
//! ```

pub mod config;
pub mod engine;
pub mod estimate;
pub mod metrics;
mod segment;
pub mod telemetry;

pub use config::{DEFAULT_MAX_CHUNK_SIZE, MAX_CHUNK_CEILING, SieveConfig};
pub use engine::{PRIME_LIST_LOG_THRESHOLD, SegmentedSieve, nth_prime};
pub use estimate::{SMALL_INDEX_LIMIT, estimate_limit};
pub use fsieve_error::{Result, SieveError};
pub use metrics::{SieveMetricsSnapshot, reset_sieve_metrics, sieve_metrics_snapshot};
pub use telemetry::{
    NoOpSieveObserver, SieveTelemetryEvent, SieveTelemetryObserver, SieveTelemetryRingBuffer,
};
