//! Process-local sieve counters.
//!
//! Relaxed atomics, updated by every [`crate::SegmentedSieve`] regardless of
//! which observer it carries.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Point-in-time copy of the sieve counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SieveMetricsSnapshot {
    /// `nth_prime` lookups started (including rejected ones).
    pub fsieve_calls_total: u64,
    /// Windows sieved across all calls.
    pub fsieve_segments_total: u64,
    /// Primes appended to accumulators across all calls.
    pub fsieve_primes_collected_total: u64,
    /// Lookups that returned an error.
    pub fsieve_failures_total: u64,
}

static CALLS_TOTAL: AtomicU64 = AtomicU64::new(0);
static SEGMENTS_TOTAL: AtomicU64 = AtomicU64::new(0);
static PRIMES_COLLECTED_TOTAL: AtomicU64 = AtomicU64::new(0);
static FAILURES_TOTAL: AtomicU64 = AtomicU64::new(0);

pub(crate) fn record_call() {
    CALLS_TOTAL.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn record_segment(primes_found: usize) {
    SEGMENTS_TOTAL.fetch_add(1, Ordering::Relaxed);
    let found = u64::try_from(primes_found).unwrap_or(u64::MAX);
    PRIMES_COLLECTED_TOTAL.fetch_add(found, Ordering::Relaxed);
}

pub(crate) fn record_failure() {
    FAILURES_TOTAL.fetch_add(1, Ordering::Relaxed);
}

/// Return a snapshot of the sieve counters.
#[must_use]
pub fn sieve_metrics_snapshot() -> SieveMetricsSnapshot {
    SieveMetricsSnapshot {
        fsieve_calls_total: CALLS_TOTAL.load(Ordering::Relaxed),
        fsieve_segments_total: SEGMENTS_TOTAL.load(Ordering::Relaxed),
        fsieve_primes_collected_total: PRIMES_COLLECTED_TOTAL.load(Ordering::Relaxed),
        fsieve_failures_total: FAILURES_TOTAL.load(Ordering::Relaxed),
    }
}

/// Reset all sieve counters to zero.
pub fn reset_sieve_metrics() {
    CALLS_TOTAL.store(0, Ordering::Relaxed);
    SEGMENTS_TOTAL.store(0, Ordering::Relaxed);
    PRIMES_COLLECTED_TOTAL.store(0, Ordering::Relaxed);
    FAILURES_TOTAL.store(0, Ordering::Relaxed);
}
