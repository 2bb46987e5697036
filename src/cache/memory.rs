// ABOUTME: In-memory recommendation cache with LRU eviction and lazy TTL expiry
// ABOUTME: Wraps fetch-or-generate with hit and latency metrics behind tokio RwLocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::metrics::{MetricsSnapshot, PerformanceMetrics};
use super::{CacheConfig, Clock, RecommendationFingerprint, SystemClock};
use crate::errors::AppResult;
use chrono::{DateTime, Utc};
use lru::LruCache;
use molecular_core::models::RecommendationSet;
use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

/// Cached payload with its creation time
#[derive(Debug, Clone)]
struct CacheEntry {
    payload: RecommendationSet,
    created_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Fresh while `now - created_at <= ttl`; entries from the future count as fresh
    fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        (now - self.created_at)
            .to_std()
            .is_ok_and(|elapsed| elapsed > ttl)
    }
}

/// Recommendation cache with LRU eviction and lazy expiry
///
/// Uses `Arc<RwLock<LruCache>>` so clones share one store across tasks.
/// Entries are keyed by the fingerprint itself; the rendered string is only
/// used in logs. Metrics live behind their own lock so reading them never
/// contends with cache traffic. Expired entries are only dropped when looked up; there is
/// no background sweeper. Writes are last-writer-wins.
#[derive(Clone)]
pub struct RecommendationCache {
    store: Arc<RwLock<LruCache<RecommendationFingerprint, CacheEntry>>>,
    metrics: Arc<RwLock<PerformanceMetrics>>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl RecommendationCache {
    /// Default cache capacity when config specifies zero entries
    const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a cache on the system clock
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a cache on an injected clock
    #[must_use]
    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        // LruCache requires NonZeroUsize for capacity
        let capacity =
            NonZeroUsize::new(config.max_entries).unwrap_or(Self::DEFAULT_CACHE_CAPACITY);
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
            metrics: Arc::new(RwLock::new(PerformanceMetrics::default())),
            clock,
            ttl: config.ttl,
        }
    }

    /// Configured time-to-live
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fresh payload for `key`, dropping it if it has expired
    pub async fn get(&self, key: &RecommendationFingerprint) -> Option<RecommendationSet> {
        let now = self.clock.now();
        let mut store = self.store.write().await;

        // LruCache::get is mutable (updates access order for LRU)
        let Some(entry) = store.get(key) else {
            drop(store);
            debug!(key = %key, "Recommendation cache miss");
            return None;
        };

        if entry.is_expired(now, self.ttl) {
            store.pop(key);
            drop(store);
            debug!(key = %key, "Recommendation cache entry expired");
            return None;
        }

        let payload = entry.payload.clone();
        drop(store);
        debug!(key = %key, "Recommendation cache hit");
        Some(payload)
    }

    /// Store `payload` under `key`, replacing any previous entry
    pub async fn set(&self, key: &RecommendationFingerprint, payload: RecommendationSet) {
        let entry = CacheEntry {
            payload,
            created_at: self.clock.now(),
        };

        // LruCache handles eviction automatically on push
        let displaced = self.store.write().await.push(key.clone(), entry);
        if let Some((evicted, _)) = displaced.filter(|(old_key, _)| old_key != key) {
            debug!(key = %evicted, "Evicted least recently used recommendation payload");
        }
    }

    /// Fold one request into the metrics
    pub async fn record(&self, hit: bool, latency_ms: f64) {
        self.metrics.write().await.record(hit, latency_ms);
    }

    /// Serve `key` from the cache, or run `generate` and cache its result
    ///
    /// Exactly one request is recorded per call, whether it hits, misses, or
    /// the generator fails. Failed generations are not cached. Concurrent
    /// misses on one key each run their own generator.
    ///
    /// # Errors
    ///
    /// Returns the generator's error on a miss whose generation fails
    pub async fn fetch_or_generate<F, Fut>(
        &self,
        key: &RecommendationFingerprint,
        generate: F,
    ) -> AppResult<RecommendationSet>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = AppResult<RecommendationSet>> + Send,
    {
        let started = self.clock.now();

        if let Some(payload) = self.get(key).await {
            self.record(true, self.elapsed_ms(started)).await;
            return Ok(payload);
        }

        let generated = generate().await;
        if let Ok(payload) = &generated {
            self.set(key, payload.clone()).await;
        }
        self.record(false, self.elapsed_ms(started)).await;
        generated
    }

    /// Drop every entry; metrics are kept
    pub async fn clear(&self) {
        self.store.write().await.clear();
        debug!("Recommendation cache cleared");
    }

    /// Zero the metrics counters
    pub async fn reset_metrics(&self) {
        *self.metrics.write().await = PerformanceMetrics::default();
    }

    /// Current metrics with derived hit rate
    pub async fn metrics(&self) -> MetricsSnapshot {
        self.metrics.read().await.snapshot()
    }

    /// Number of stored entries, expired ones included until looked up
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Whether the store holds no entries
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    fn elapsed_ms(&self, started: DateTime<Utc>) -> f64 {
        (self.clock.now() - started)
            .num_microseconds()
            .map_or(0.0, |micros| micros as f64 / 1000.0)
    }
}
