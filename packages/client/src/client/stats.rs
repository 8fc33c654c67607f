//! Client statistics

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by every clone of one client
#[derive(Debug, Default)]
pub struct ClientStats {
    /// Total number of requests dispatched
    pub requests_total: AtomicU64,
    /// Requests that produced a response, whatever its status
    pub requests_successful: AtomicU64,
    /// Requests that failed in transport or timed out
    pub requests_failed: AtomicU64,
    /// Subset of failures caused by the deadline elapsing
    pub requests_timed_out: AtomicU64,
    /// Total request payload bytes sent
    pub bytes_sent: AtomicU64,
}

/// Point-in-time copy of [`ClientStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientStatsSnapshot {
    pub requests_total: u64,
    pub requests_successful: u64,
    pub requests_failed: u64,
    pub requests_timed_out: u64,
    pub bytes_sent: u64,
}

impl ClientStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&self, payload_bytes: u64) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.bytes_sent.fetch_add(payload_bytes, Ordering::Relaxed);
    }

    pub fn record_success(&self) {
        self.requests_successful.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.requests_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_timeout(&self) {
        self.requests_failed.fetch_add(1, Ordering::Relaxed);
        self.requests_timed_out.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn snapshot(&self) -> ClientStatsSnapshot {
        ClientStatsSnapshot {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            requests_successful: self.requests_successful.load(Ordering::Relaxed),
            requests_failed: self.requests_failed.load(Ordering::Relaxed),
            requests_timed_out: self.requests_timed_out.load(Ordering::Relaxed),
            bytes_sent: self.bytes_sent.load(Ordering::Relaxed),
        }
    }
}

impl ClientStatsSnapshot {
    /// Fraction of dispatched requests that produced a response (1.0 when idle)
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn success_rate(&self) -> f64 {
        let done = self.requests_successful + self.requests_failed;
        if done == 0 {
            1.0
        } else {
            self.requests_successful as f64 / done as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeouts_count_as_failures() {
        let stats = ClientStats::new();
        stats.record_request(10);
        stats.record_request(5);
        stats.record_success();
        stats.record_timeout();

        let snap = stats.snapshot();
        assert_eq!(snap.requests_total, 2);
        assert_eq!(snap.bytes_sent, 15);
        assert_eq!(snap.requests_failed, 1);
        assert_eq!(snap.requests_timed_out, 1);
        assert!((snap.success_rate() - 0.5).abs() < f64::EPSILON);
    }
}
