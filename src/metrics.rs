//! Operation counters and query latency tracking for the store.

use serde::Serialize;
use std::time::Duration;

/// Collects runtime metrics for a document store.
#[derive(Debug, Default)]
pub struct MetricsCollector {
    query_latencies_us: Vec<f64>,
    total_queries: u64,
    total_inserts: u64,
    total_deletes: u64,
}

/// A point-in-time copy of the collected metrics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub total_queries: u64,
    pub total_inserts: u64,
    pub total_deletes: u64,
    pub avg_query_latency_us: f64,
    pub p95_query_latency_us: f64,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a search with its duration.
    pub fn record_query(&mut self, duration: Duration) {
        self.total_queries += 1;
        self.query_latencies_us.push(duration.as_micros() as f64);
    }

    /// Record an insert or upsert.
    pub fn record_insert(&mut self) {
        self.total_inserts += 1;
    }

    /// Record a delete.
    pub fn record_delete(&mut self) {
        self.total_deletes += 1;
    }

    /// Average query latency in microseconds.
    pub fn avg_query_latency_us(&self) -> f64 {
        if self.query_latencies_us.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.query_latencies_us.iter().sum();
        sum / self.query_latencies_us.len() as f64
    }

    /// Get a percentile of query latency (e.g., 50.0, 95.0, 99.0).
    pub fn percentile_query_latency_us(&self, percentile: f64) -> f64 {
        if self.query_latencies_us.is_empty() {
            return 0.0;
        }

        let mut sorted = self.query_latencies_us.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let index = ((percentile / 100.0) * (sorted.len() - 1) as f64).round() as usize;
        sorted[index.min(sorted.len() - 1)]
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            total_queries: self.total_queries,
            total_inserts: self.total_inserts,
            total_deletes: self.total_deletes,
            avg_query_latency_us: self.avg_query_latency_us(),
            p95_query_latency_us: self.percentile_query_latency_us(95.0),
        }
    }
}
