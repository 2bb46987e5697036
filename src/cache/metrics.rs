// ABOUTME: Recommendation cache performance counters
// ABOUTME: Tracks requests, hits, running mean latency, and exposes a serialisable snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Running counters for cache-mediated requests
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerformanceMetrics {
    /// Requests served through the cache
    pub total_requests: u64,
    /// Requests answered from a fresh entry
    pub cache_hits: u64,
    /// Running mean of request latency
    pub average_response_time_ms: f64,
    /// Latency of the most recent request
    pub last_request_time_ms: f64,
}

impl PerformanceMetrics {
    /// Fold one request into the counters
    pub fn record(&mut self, hit: bool, latency_ms: f64) {
        let latency_ms = if latency_ms.is_finite() {
            latency_ms.max(0.0)
        } else {
            0.0
        };
        self.total_requests += 1;
        if hit {
            self.cache_hits += 1;
        }
        let n = self.total_requests as f64;
        self.average_response_time_ms = self.average_response_time_ms.mul_add(n - 1.0, latency_ms) / n;
        self.last_request_time_ms = latency_ms;
    }

    /// Hit rate in percent, zero before the first request
    #[must_use]
    pub fn cache_hit_rate(&self) -> f64 {
        if self.total_requests == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.total_requests as f64 * 100.0
        }
    }

    /// Copy of the counters with the derived hit rate
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            total_requests: self.total_requests,
            cache_hits: self.cache_hits,
            average_response_time_ms: self.average_response_time_ms,
            last_request_time_ms: self.last_request_time_ms,
            cache_hit_rate: self.cache_hit_rate(),
        }
    }
}

/// Metrics as reported to callers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Requests served through the cache
    pub total_requests: u64,
    /// Requests answered from a fresh entry
    pub cache_hits: u64,
    /// Running mean of request latency
    pub average_response_time_ms: f64,
    /// Latency of the most recent request
    pub last_request_time_ms: f64,
    /// `cache_hits / total_requests` in percent
    pub cache_hit_rate: f64,
}
