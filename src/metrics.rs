//! Query Metrics
//!
//! Query counters and latency tracking shared by the shell and the server.

use hashbrown::HashMap;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Outcome label for successful queries
pub const OUTCOME_OK: &str = "ok";

/// Metrics collector
#[derive(Debug)]
pub struct Metrics {
    /// Total queries count
    total_queries: AtomicU64,

    /// Queries that ended in an error
    failed_queries: AtomicU64,

    /// Queries per outcome label
    by_outcome: RwLock<HashMap<String, u64>>,

    latency_sum_us: AtomicU64,
    latency_count: AtomicU64,
    latency_min_us: AtomicU64,
    latency_max_us: AtomicU64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create new metrics collector
    pub fn new() -> Self {
        Self {
            total_queries: AtomicU64::new(0),
            failed_queries: AtomicU64::new(0),
            by_outcome: RwLock::new(HashMap::new()),
            latency_sum_us: AtomicU64::new(0),
            latency_count: AtomicU64::new(0),
            latency_min_us: AtomicU64::new(u64::MAX),
            latency_max_us: AtomicU64::new(0),
        }
    }

    /// Record a query with its outcome label (`"ok"` or an error kind)
    pub fn record_query(&self, outcome: &str, latency: Duration) {
        self.total_queries.fetch_add(1, Ordering::Relaxed);
        if outcome != OUTCOME_OK {
            self.failed_queries.fetch_add(1, Ordering::Relaxed);
        }

        {
            let mut counts = self.by_outcome.write();
            *counts.entry(outcome.to_string()).or_insert(0) += 1;
        }

        let latency_us = latency.as_micros().min(u64::MAX as u128) as u64;
        self.latency_sum_us.fetch_add(latency_us, Ordering::Relaxed);
        self.latency_count.fetch_add(1, Ordering::Relaxed);
        self.latency_min_us.fetch_min(latency_us, Ordering::Relaxed);
        self.latency_max_us.fetch_max(latency_us, Ordering::Relaxed);
    }

    /// Get total queries count
    pub fn total_queries(&self) -> u64 {
        self.total_queries.load(Ordering::Relaxed)
    }

    /// Get failed queries count
    pub fn failed_queries(&self) -> u64 {
        self.failed_queries.load(Ordering::Relaxed)
    }

    /// Get queries by outcome
    pub fn by_outcome(&self) -> HashMap<String, u64> {
        self.by_outcome.read().clone()
    }

    /// Get average latency in microseconds
    pub fn avg_latency_us(&self) -> f64 {
        let count = self.latency_count.load(Ordering::Relaxed);
        if count == 0 {
            return 0.0;
        }
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        sum as f64 / count as f64
    }

    /// Get min latency in microseconds
    pub fn min_latency_us(&self) -> u64 {
        let min = self.latency_min_us.load(Ordering::Relaxed);
        if min == u64::MAX {
            0
        } else {
            min
        }
    }

    /// Get max latency in microseconds
    pub fn max_latency_us(&self) -> u64 {
        self.latency_max_us.load(Ordering::Relaxed)
    }

    /// Get a summary of metrics
    pub fn summary(&self) -> String {
        format!(
            "Queries: {} (failed: {}) | Latency (µs): avg={:.1}, min={}, max={}",
            self.total_queries(),
            self.failed_queries(),
            self.avg_latency_us(),
            self.min_latency_us(),
            self.max_latency_us()
        )
    }
}
