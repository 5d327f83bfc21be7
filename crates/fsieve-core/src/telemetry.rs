//! Structured sieve telemetry.
//!
//! The engine reports progress to an injected [`SieveTelemetryObserver`]: once
//! when a lookup starts, once per sieved window, and once when the lookup
//! completes or fails. The default [`NoOpSieveObserver`] compiles away.
//!
//! Observers MUST NOT panic or block; they only see copies of engine state and
//! cannot change what the engine returns.

use std::sync::Arc;

use serde::Serialize;

/// Event emitted by [`crate::SegmentedSieve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SieveTelemetryEvent {
    /// Lookup of the `index`-th prime started.
    SieveStarted {
        /// Requested prime index (0-indexed).
        index: u64,
        /// Exclusive sieving bound from the estimator.
        limit: u64,
        /// Window size in effect for this lookup.
        chunk_size: u64,
    },

    /// One window was sieved and drained into the accumulator.
    SegmentSieved {
        /// Zero-based window ordinal.
        segment: u64,
        /// Absolute value of the window's first slot.
        offset: u64,
        /// Number of slots in the window.
        len: u64,
        /// Primes found in this window.
        primes_found: u64,
        /// Primes accumulated across all windows so far.
        primes_total: u64,
    },

    /// The requested prime was found.
    SieveCompleted {
        index: u64,
        prime: u64,
        /// Windows sieved before stopping.
        segments: u64,
        primes_total: u64,
    },

    /// The full range was sieved without reaching `index`.
    SieveFailed {
        index: u64,
        limit: u64,
        primes_total: u64,
    },
}

impl SieveTelemetryEvent {
    /// Short classification label for this event kind.
    #[must_use]
    pub fn kind_str(&self) -> &'static str {
        match self {
            Self::SieveStarted { .. } => "sieve_started",
            Self::SegmentSieved { .. } => "segment_sieved",
            Self::SieveCompleted { .. } => "sieve_completed",
            Self::SieveFailed { .. } => "sieve_failed",
        }
    }

    /// Whether this event ends a lookup.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::SieveCompleted { .. } | Self::SieveFailed { .. }
        )
    }
}

/// Receiver for [`SieveTelemetryEvent`]s.
pub trait SieveTelemetryObserver: Send + Sync {
    /// Called synchronously for every event.
    fn on_event(&self, event: &SieveTelemetryEvent);
}

/// Observer that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSieveObserver;

impl SieveTelemetryObserver for NoOpSieveObserver {
    #[inline]
    fn on_event(&self, _event: &SieveTelemetryEvent) {}
}

impl<T: SieveTelemetryObserver + ?Sized> SieveTelemetryObserver for &T {
    fn on_event(&self, event: &SieveTelemetryEvent) {
        (**self).on_event(event);
    }
}

impl<T: SieveTelemetryObserver + ?Sized> SieveTelemetryObserver for Arc<T> {
    fn on_event(&self, event: &SieveTelemetryEvent) {
        (**self).on_event(event);
    }
}

/// Ring-buffer observer that keeps the last N events.
pub struct SieveTelemetryRingBuffer {
    events: parking_lot::Mutex<RingBufferInner>,
}

struct RingBufferInner {
    buf: Vec<SieveTelemetryEvent>,
    capacity: usize,
    write_pos: usize,
    count: usize,
}

impl SieveTelemetryRingBuffer {
    /// Create a ring buffer holding at most `capacity` events. A zero
    /// capacity records nothing.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            events: parking_lot::Mutex::new(RingBufferInner {
                buf: Vec::with_capacity(capacity),
                capacity,
                write_pos: 0,
                count: 0,
            }),
        }
    }

    /// The most recent events (up to capacity) in chronological order.
    #[must_use]
    pub fn drain(&self) -> Vec<SieveTelemetryEvent> {
        let inner = self.events.lock();
        let n = inner.count.min(inner.capacity);
        if n == 0 {
            return Vec::new();
        }
        let start = if inner.count >= inner.capacity {
            inner.write_pos
        } else {
            0
        };
        (0..n)
            .map(|i| inner.buf[(start + i) % inner.capacity].clone())
            .collect()
    }

    /// Total events observed, including any overwritten ones.
    #[must_use]
    pub fn total_observed(&self) -> usize {
        self.events.lock().count
    }

    /// Number of events currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        let inner = self.events.lock();
        inner.count.min(inner.capacity)
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SieveTelemetryObserver for SieveTelemetryRingBuffer {
    fn on_event(&self, event: &SieveTelemetryEvent) {
        let mut inner = self.events.lock();
        inner.count += 1;
        if inner.capacity == 0 {
            return;
        }
        let pos = inner.write_pos;
        if inner.buf.len() < inner.capacity {
            inner.buf.push(event.clone());
        } else {
            inner.buf[pos] = event.clone();
        }
        inner.write_pos = (pos + 1) % inner.capacity;
    }
}
