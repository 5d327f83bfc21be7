//! Kept in its own test binary: resetting the global counters would race
//! with any other test that reads them.

use fsieve_core::{
    SegmentedSieve, SieveConfig, SieveMetricsSnapshot, nth_prime, reset_sieve_metrics,
    sieve_metrics_snapshot,
};

#[test]
fn counters_track_calls_segments_and_failures() {
    reset_sieve_metrics();
    assert_eq!(sieve_metrics_snapshot(), SieveMetricsSnapshot::default());

    let sieve = SegmentedSieve::new(SieveConfig::default().with_max_chunk_size(10))
        .expect("config should be valid");
    // estimate_limit(4) = 13: windows [0,10) and [10,13).
    assert_eq!(sieve.nth_prime(4).expect("lookup should succeed"), 11);
    assert!(nth_prime(-3).is_err());

    let snapshot = sieve_metrics_snapshot();
    assert_eq!(snapshot.fsieve_calls_total, 2);
    assert_eq!(snapshot.fsieve_segments_total, 2);
    assert_eq!(snapshot.fsieve_primes_collected_total, 5);
    assert_eq!(snapshot.fsieve_failures_total, 1);

    reset_sieve_metrics();
    assert_eq!(sieve_metrics_snapshot().fsieve_calls_total, 0);
}
