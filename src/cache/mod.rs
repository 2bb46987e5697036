// ABOUTME: Recommendation cache layer with injectable clock and deficiency fingerprints
// ABOUTME: Defines Clock, CacheConfig, and RecommendationFingerprint shared by the in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recommendation Cache
//!
//! Recommendation payloads are expensive to produce, so they are memoised by
//! a fingerprint of what drives them: the user, their sorted deficiency list,
//! and their lifestyle. Entries expire lazily once older than the TTL and the
//! store is bounded with LRU eviction.
//!
//! ```rust,no_run
//! use molecular_balance::cache::{CacheConfig, RecommendationFingerprint};
//! use molecular_balance::cache::memory::RecommendationCache;
//! use molecular_balance::models::{Lifestyle, RecommendationSet};
//! # async fn example() {
//! let cache = RecommendationCache::new(CacheConfig::default());
//! let key = RecommendationFingerprint::new("user-1", ["Iron", "Zinc"], Lifestyle::Vegan);
//! cache.set(&key, RecommendationSet::default()).await;
//! assert!(cache.get(&key).await.is_some());
//! # }
//! ```

/// In-memory recommendation cache implementation
pub mod memory;
/// Hit-rate and latency metrics
pub mod metrics;

use chrono::{DateTime, Utc};
use molecular_core::constants::cache::{
    DEFAULT_CACHE_MAX_ENTRIES, DEFICIENCY_SEPARATOR, RECOMMENDATION_KEY_PREFIX,
    TTL_RECOMMENDATIONS_SECS,
};
use molecular_core::constants::nutrients;
use molecular_core::models::Lifestyle;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

pub use memory::RecommendationCache;
pub use metrics::{MetricsSnapshot, PerformanceMetrics};

/// Source of the current time for expiry and latency measurement
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to
///
/// Clones share the same instant, so a test can hold one handle while the
/// cache holds another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    millis: Arc<AtomicI64>,
}

impl ManualClock {
    /// Clock frozen at `start`
    #[must_use]
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(start.timestamp_millis())),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        let delta = i64::try_from(by.as_millis()).unwrap_or(i64::MAX);
        self.millis.fetch_add(delta, Ordering::SeqCst);
    }

    /// Jump to an absolute instant
    pub fn set(&self, at: DateTime<Utc>) {
        self.millis.store(at.timestamp_millis(), Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::default())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.millis.load(Ordering::SeqCst)).unwrap_or_default()
    }
}

/// Recommendation cache configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// How long a payload stays fresh
    pub ttl: Duration,
    /// Maximum number of cached payloads (zero falls back to the default)
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(TTL_RECOMMENDATIONS_SECS),
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
        }
    }
}

impl CacheConfig {
    /// Load cache configuration from environment
    ///
    /// Reads `RECOMMENDATION_CACHE_TTL_SECS` and
    /// `RECOMMENDATION_CACHE_MAX_ENTRIES`; unparseable values fall back to the
    /// defaults with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            ttl: Duration::from_secs(env_or(
                "RECOMMENDATION_CACHE_TTL_SECS",
                TTL_RECOMMENDATIONS_SECS,
            )),
            max_entries: env_or("RECOMMENDATION_CACHE_MAX_ENTRIES", DEFAULT_CACHE_MAX_ENTRIES),
        }
    }
}

fn env_or<T: FromStr + fmt::Display + Copy>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, %default, "Invalid cache setting, using default");
            default
        }),
        Err(_) => default,
    }
}

/// Cache key for one user's recommendation payload
///
/// Deficiencies are canonicalised, sorted, and de-duplicated, so two
/// requests listing the same nutrients in any order or spelling share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecommendationFingerprint {
    /// User the payload was generated for
    pub user_id: String,
    /// Sorted, de-duplicated canonical deficiency names
    pub deficiencies: Vec<String>,
    /// Dietary lifestyle
    pub lifestyle: Lifestyle,
}

impl RecommendationFingerprint {
    /// Build a fingerprint from raw deficiency names
    pub fn new<I, S>(user_id: impl Into<String>, deficiencies: I, lifestyle: Lifestyle) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = deficiencies
            .into_iter()
            .map(|name| nutrients::canonical_name(name.as_ref()))
            .filter(|name| !name.is_empty())
            .collect();
        names.sort_unstable();
        names.dedup();
        Self {
            user_id: user_id.into(),
            deficiencies: names,
            lifestyle,
        }
    }

    /// Rendered cache key
    #[must_use]
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RecommendationFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{RECOMMENDATION_KEY_PREFIX}:{}:{}:{}",
            self.user_id,
            self.deficiencies.join(DEFICIENCY_SEPARATOR),
            self.lifestyle
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_ignores_order_and_duplicates() {
        let a = RecommendationFingerprint::new("u1", ["Zinc", "Iron", "Zinc"], Lifestyle::Vegan);
        let b = RecommendationFingerprint::new("u1", ["Iron", "Zinc"], Lifestyle::Vegan);
        assert_eq!(a, b);
        assert_eq!(a.key(), "recommendations:u1:Iron_Zinc:vegan");
    }

    #[test]
    fn test_fingerprint_empty_deficiencies() {
        let key = RecommendationFingerprint::new("u1", Vec::<String>::new(), Lifestyle::Omnivore);
        assert_eq!(key.key(), "recommendations:u1::omnivore");
    }

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::default();
        let handle = clock.clone();
        handle.advance(Duration::from_secs(5));
        assert_eq!(clock.now().timestamp(), 5);
    }
}
