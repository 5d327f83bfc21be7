//! A single sieve window and the marking steps applied to it.
//!
//! Values are absolute; the window stores `value - offset` internally. Each
//! window is built, marked, drained into the prime accumulator and dropped.

/// Boolean window over `[offset, offset + len)`; `true` = not yet proven
/// composite.
#[derive(Debug)]
pub(crate) struct SegmentWindow {
    offset: u64,
    marks: Vec<bool>,
}

impl SegmentWindow {
    pub(crate) fn new(offset: u64, len: usize) -> Self {
        Self {
            offset,
            marks: vec![true; len],
        }
    }

    /// Exclusive absolute end of the window.
    pub(crate) fn end(&self) -> u64 {
        self.offset + self.marks.len() as u64
    }

    fn contains(&self, value: u64) -> bool {
        value >= self.offset && value < self.end()
    }

    /// 0 and 1 are never prime. Only the first window (or two, for a
    /// one-slot chunk) can hold them.
    pub(crate) fn exclude_units(&mut self) {
        for value in [0, 1] {
            if self.contains(value) {
                self.marks[(value - self.offset) as usize] = false;
            }
        }
    }

    /// Cross off multiples of primes collected from earlier windows.
    ///
    /// `known` is increasing. A prime `p` with `p * p >= end` cannot be the
    /// smallest factor of any composite in the window, so the scan stops
    /// there; every composite it would touch is already marked by a smaller
    /// prime. Returns how many primes were applied.
    pub(crate) fn cross_off_known(&mut self, known: &[u64]) -> usize {
        let end = self.end();
        let mut applied = 0;
        for &prime in known {
            let Some(square) = prime.checked_mul(prime) else {
                break;
            };
            if square >= end {
                break;
            }
            let first_multiple = self.offset.div_ceil(prime) * prime;
            self.cross_off_from(prime, first_multiple.max(square));
            applied += 1;
        }
        applied
    }

    /// Sieve with bases that live inside this window.
    ///
    /// Candidates run over `[max(offset, 2), min(base_limit, end))`. Anything
    /// still unmarked when reached is prime, since all of its possible
    /// factors are smaller and have already been applied.
    pub(crate) fn cross_off_local(&mut self, base_limit: u64) {
        let start = self.offset.max(2);
        let stop = base_limit.min(self.end());
        for candidate in start..stop {
            if !self.marks[(candidate - self.offset) as usize] {
                continue;
            }
            if let Some(square) = candidate.checked_mul(candidate) {
                self.cross_off_from(candidate, square);
            }
        }
    }

    fn cross_off_from(&mut self, step: u64, first: u64) {
        if first >= self.end() {
            return;
        }
        let start = (first - self.offset) as usize;
        for slot in self.marks[start..].iter_mut().step_by(step as usize) {
            *slot = false;
        }
    }

    /// Append surviving values to `primes` in increasing order.
    pub(crate) fn collect_into(&self, primes: &mut Vec<u64>) -> usize {
        let before = primes.len();
        primes.extend(
            self.marks
                .iter()
                .enumerate()
                .filter(|&(_, &possibly_prime)| possibly_prime)
                .map(|(idx, _)| self.offset + idx as u64),
        );
        primes.len() - before
    }
}

/// Run every marking step for `[offset, offset + len)` and append the primes
/// found to `primes`. Returns how many were appended.
pub(crate) fn sieve_segment(
    offset: u64,
    len: usize,
    base_limit: u64,
    primes: &mut Vec<u64>,
) -> usize {
    let mut window = SegmentWindow::new(offset, len);
    window.exclude_units();
    window.cross_off_known(primes);
    window.cross_off_local(base_limit);
    window.collect_into(primes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sieve_all(limit: u64, chunk: u64) -> Vec<u64> {
        let base_limit = limit.isqrt() + 1;
        let mut primes = Vec::new();
        let mut offset = 0;
        while offset < limit {
            let len = chunk.min(limit - offset) as usize;
            sieve_segment(offset, len, base_limit, &mut primes);
            offset += len as u64;
        }
        primes
    }

    #[test]
    fn first_window_excludes_zero_and_one() {
        let mut window = SegmentWindow::new(0, 4);
        window.exclude_units();
        let mut primes = Vec::new();
        window.collect_into(&mut primes);
        assert_eq!(primes, vec![2, 3]);
    }

    #[test]
    fn later_window_slot_zero_is_left_to_general_marking() {
        // Offset 11 is prime; nothing but the general rules may touch it.
        let mut window = SegmentWindow::new(11, 3);
        window.exclude_units();
        window.cross_off_known(&[2, 3, 5, 7]);
        let mut primes = Vec::new();
        window.collect_into(&mut primes);
        assert_eq!(primes, vec![11, 13]);
    }

    #[test]
    fn known_primes_cross_off_from_first_multiple_in_window() {
        let mut window = SegmentWindow::new(20, 10);
        // 7 * 7 = 49 lies past the window; 21 and 28 fall to 3 and 2.
        let applied = window.cross_off_known(&[2, 3, 5, 7]);
        assert_eq!(applied, 3);
        let mut primes = Vec::new();
        window.collect_into(&mut primes);
        assert_eq!(primes, vec![23, 29]);
    }

    #[test]
    fn known_prime_scan_stops_past_window_root() {
        let mut window = SegmentWindow::new(10, 10);
        // 5 * 5 = 25 >= 20, so only 2 and 3 are applied.
        assert_eq!(window.cross_off_known(&[2, 3, 5, 7]), 2);
    }

    #[test]
    fn local_bases_sieve_single_window() {
        assert_eq!(sieve_all(30, 30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn partial_final_window() {
        assert_eq!(sieve_all(30, 7), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn one_slot_windows() {
        assert_eq!(sieve_all(20, 1), vec![2, 3, 5, 7, 11, 13, 17, 19]);
    }

    #[test]
    fn empty_window_collects_nothing() {
        let mut primes = vec![2, 3];
        assert_eq!(sieve_segment(4, 0, 10, &mut primes), 0);
        assert_eq!(primes, vec![2, 3]);
    }
}
