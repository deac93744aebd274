//! Console metrics for observability
//!
//! Counters for monitoring console health: rendered message counts and
//! messages dropped after shutdown, while disabled, or on render failure.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for console observability
///
/// # Example
///
/// ```
/// use async_console_logger::ConsoleMetrics;
///
/// let metrics = ConsoleMetrics::new();
///
/// metrics.record_printed();
/// metrics.record_dropped();
///
/// assert_eq!(metrics.printed_count(), 1);
/// assert_eq!(metrics.dropped_count(), 1);
/// ```
#[derive(Debug)]
pub struct ConsoleMetrics {
    /// Number of entries rendered by the drain worker
    printed_count: AtomicU64,

    /// Number of messages dropped without rendering
    dropped_count: AtomicU64,
}

impl ConsoleMetrics {
    /// Create a new metrics instance with all counters at zero
    #[must_use]
    pub const fn new() -> Self {
        Self {
            printed_count: AtomicU64::new(0),
            dropped_count: AtomicU64::new(0),
        }
    }

    /// Get the number of rendered entries
    #[inline]
    pub fn printed_count(&self) -> u64 {
        self.printed_count.load(Ordering::Relaxed)
    }

    /// Get the number of dropped messages
    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    /// Record a rendered entry
    #[inline]
    pub fn record_printed(&self) -> u64 {
        self.printed_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a dropped message
    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Get drop rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if no messages have been processed.
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped_count() as f64;
        let total = self.printed_count() as f64 + dropped;
        if total == 0.0 {
            0.0
        } else {
            (dropped / total) * 100.0
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.printed_count.store(0, Ordering::Relaxed);
        self.dropped_count.store(0, Ordering::Relaxed);
    }
}

impl Default for ConsoleMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ConsoleMetrics {
    /// Create a snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            printed_count: AtomicU64::new(self.printed_count()),
            dropped_count: AtomicU64::new(self.dropped_count()),
        }
    }
}
