//! Upper bound on the N-th prime.
//!
//! For the 1-indexed ordinal `m >= 6` the m-th prime satisfies
//! `p_m < m (ln m + ln ln m)` (Rosser's theorem). Below that the formula is
//! not valid, so a fixed bound covering 2, 3, 5, 7, 11 is used instead.

/// Bound returned for the first five primes (ordinals 1..=5).
pub const SMALL_INDEX_LIMIT: u64 = 13;

/// Smallest 1-indexed ordinal for which the asymptotic bound holds.
const ASYMPTOTIC_MIN_ORDINAL: u64 = 6;

/// Exclusive upper bound on the `n`-th prime (0-indexed).
///
/// The result is always strictly greater than the prime it bounds, for every
/// index the sieve engine is validated against.
#[must_use]
pub fn estimate_limit(n: u64) -> u64 {
    let ordinal = n.saturating_add(1);
    if ordinal < ASYMPTOTIC_MIN_ORDINAL {
        return SMALL_INDEX_LIMIT;
    }

    let m = ordinal as f64;
    let ln_m = m.ln();
    let bound = m * (ln_m + ln_m.ln());
    // Float-to-int `as` saturates, so absurd ordinals clamp at u64::MAX.
    (bound.floor() as u64).saturating_add(1)
}
