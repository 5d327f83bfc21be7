//! Segmented sieve engine.
//!
//! `[0, limit)` is split into windows of `min(limit, max_chunk_size)` slots
//! and processed strictly in order. Every window needs the complete set of
//! primes found in the windows before it, so the accumulator is threaded
//! through by `&mut` and windows are never reordered.

use fsieve_error::{Result, SieveError};
use tracing::{debug, trace, warn};

use crate::config::SieveConfig;
use crate::estimate::estimate_limit;
use crate::metrics;
use crate::segment::sieve_segment;
use crate::telemetry::{NoOpSieveObserver, SieveTelemetryEvent, SieveTelemetryObserver};

/// Lookups below this index log the full list of collected primes at debug
/// level.
pub const PRIME_LIST_LOG_THRESHOLD: u64 = 100;

/// Result of sieving a prefix of `[0, limit)`.
#[derive(Debug)]
struct Sweep {
    primes: Vec<u64>,
    segments: u64,
}

/// N-th prime finder over fixed-size sieve windows.
///
/// Immutable once built; each call owns its own window and accumulator, so a
/// single instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct SegmentedSieve<O = NoOpSieveObserver> {
    config: SieveConfig,
    observer: O,
}

impl SegmentedSieve<NoOpSieveObserver> {
    /// Build an engine without telemetry.
    pub fn new(config: SieveConfig) -> Result<Self> {
        Self::with_observer(config, NoOpSieveObserver)
    }
}

impl Default for SegmentedSieve<NoOpSieveObserver> {
    fn default() -> Self {
        Self {
            config: SieveConfig::default(),
            observer: NoOpSieveObserver,
        }
    }
}

impl<O: SieveTelemetryObserver> SegmentedSieve<O> {
    /// Build an engine that reports progress to `observer`.
    pub fn with_observer(config: SieveConfig, observer: O) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, observer })
    }

    #[must_use]
    pub const fn config(&self) -> &SieveConfig {
        &self.config
    }

    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    /// The `n`-th prime, 0-indexed from 2.
    ///
    /// # Errors
    ///
    /// - [`SieveError::InvalidArgument`] if `n` is negative. No sieving is
    ///   done.
    /// - [`SieveError::IndexOutOfRange`] if fewer than `n + 1` primes lie
    ///   below the estimated limit. The bound is not re-estimated.
    pub fn nth_prime(&self, n: i64) -> Result<u64> {
        metrics::record_call();
        let Ok(index) = u64::try_from(n) else {
            metrics::record_failure();
            return Err(SieveError::InvalidArgument { index: n });
        };

        self.locate(index, estimate_limit(index))
    }

    /// Every prime strictly below `limit`, in increasing order.
    #[must_use]
    pub fn primes_below(&self, limit: u64) -> Vec<u64> {
        debug!(limit, "collecting primes");
        self.sweep(limit, None).primes
    }

    /// Sieve below `limit` until the `index`-th prime is known.
    fn locate(&self, index: u64, limit: u64) -> Result<u64> {
        let chunk_size = self.config.chunk_size_for(limit);
        debug!(index, limit, chunk_size, "calculating nth prime");
        self.observer.on_event(&SieveTelemetryEvent::SieveStarted {
            index,
            limit,
            chunk_size,
        });

        let wanted = usize::try_from(index).ok().and_then(|i| i.checked_add(1));
        let sweep = self.sweep(limit, wanted);

        if index < PRIME_LIST_LOG_THRESHOLD {
            debug!(primes = ?sweep.primes, "primes found");
        }

        let primes_total = sweep.primes.len() as u64;
        let found = usize::try_from(index)
            .ok()
            .and_then(|i| sweep.primes.get(i).copied());
        match found {
            Some(prime) => {
                debug!(index, prime, segments = sweep.segments, "nth prime found");
                self.observer.on_event(&SieveTelemetryEvent::SieveCompleted {
                    index,
                    prime,
                    segments: sweep.segments,
                    primes_total,
                });
                Ok(prime)
            }
            None => {
                warn!(
                    index,
                    limit,
                    available = sweep.primes.len(),
                    "estimated limit too small for requested prime"
                );
                self.observer.on_event(&SieveTelemetryEvent::SieveFailed {
                    index,
                    limit,
                    primes_total,
                });
                metrics::record_failure();
                Err(SieveError::IndexOutOfRange {
                    index,
                    available: sweep.primes.len(),
                    limit,
                })
            }
        }
    }

    /// Sieve `[0, limit)` window by window. With `stop_after = Some(k)` the
    /// sweep ends after the first window that brings the accumulator to `k`
    /// primes; later windows could only append larger values.
    fn sweep(&self, limit: u64, stop_after: Option<usize>) -> Sweep {
        let chunk_size = self.config.chunk_size_for(limit);
        let base_limit = limit.isqrt() + 1;
        let mut primes = Vec::new();
        let mut offset = 0_u64;
        let mut segments = 0_u64;

        while offset < limit {
            let len = chunk_size.min(limit - offset);
            let primes_found = sieve_segment(offset, len as usize, base_limit, &mut primes);
            trace!(
                segment = segments,
                offset,
                len,
                primes_found,
                primes_total = primes.len(),
                "segment sieved"
            );
            self.observer.on_event(&SieveTelemetryEvent::SegmentSieved {
                segment: segments,
                offset,
                len,
                primes_found: primes_found as u64,
                primes_total: primes.len() as u64,
            });
            metrics::record_segment(primes_found);

            segments += 1;
            offset += len;
            if stop_after.is_some_and(|wanted| primes.len() >= wanted) {
                break;
            }
        }

        Sweep { primes, segments }
    }
}

/// The `n`-th prime using the default configuration.
///
/// See [`SegmentedSieve::nth_prime`].
pub fn nth_prime(n: i64) -> Result<u64> {
    SegmentedSieve::<NoOpSieveObserver>::default().nth_prime(n)
}
