//! Registry metrics for observability
//!
//! Counts lines written and write failures across all handlers. Runtime
//! sink failures are surfaced here (and on stderr) instead of aborting the
//! host process.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct RegistryMetrics {
    lines_written: AtomicU64,
    write_failures: AtomicU64,
}

impl RegistryMetrics {
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let metrics = RegistryMetrics::new();
        assert_eq!(metrics.lines_written(), 0);
        assert_eq!(metrics.write_failures(), 0);

        metrics.record_written();
        metrics.record_written();
        metrics.record_failed();

        assert_eq!(metrics.lines_written(), 2);
        assert_eq!(metrics.write_failures(), 1);
    }
}
