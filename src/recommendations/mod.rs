// ABOUTME: Recommendation provider abstraction and the caching recommendation service
// ABOUTME: Fingerprints each request, serves cache hits, and caches successful provider payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recommendations
//!
//! Personalised recommendations come from an external provider (typically a
//! language model) behind [`RecommendationProvider`]. [`RecommendationService`]
//! puts the recommendation cache in front of it. Provider failures surface as
//! errors and are never cached; choosing fallback content is up to the
//! caller, with [`fallback::fallback_recommendations`] as the stock option.

/// Static recommendations used when no provider payload is available
pub mod fallback;
/// Lenient parser for provider text payloads
pub mod parser;

pub use fallback::fallback_recommendations;
pub use parser::parse_recommendations;

use async_trait::async_trait;
use molecular_core::constants::service_names;
use molecular_core::models::{ClassifiedNutrient, NutrientTotals, RecommendationSet, UserProfile};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::cache::{MetricsSnapshot, RecommendationCache, RecommendationFingerprint};
use crate::errors::AppResult;

/// Everything a provider needs to personalise recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// User profile
    pub profile: UserProfile,
    /// Deficient nutrient names
    pub deficiencies: Vec<String>,
    /// Full status picture for richer prompts (not part of the cache key)
    #[serde(default)]
    pub statuses: Vec<ClassifiedNutrient>,
    /// Mean daily nutrition over the recent days (not part of the cache key)
    #[serde(default)]
    pub recent_nutrition: Option<NutrientTotals>,
}

impl RecommendationRequest {
    /// Request for a profile and its deficiencies
    #[must_use]
    pub const fn new(profile: UserProfile, deficiencies: Vec<String>) -> Self {
        Self {
            profile,
            deficiencies,
            statuses: Vec::new(),
            recent_nutrition: None,
        }
    }

    /// Attach the day's classified nutrients
    #[must_use]
    pub fn with_statuses(mut self, statuses: Vec<ClassifiedNutrient>) -> Self {
        self.statuses = statuses;
        self
    }

    /// Attach the mean daily nutrition the deficiencies were drawn from
    #[must_use]
    pub fn with_recent_nutrition(mut self, totals: NutrientTotals) -> Self {
        self.recent_nutrition = Some(totals);
        self
    }

    /// Cache key for this request
    ///
    /// Statuses and recent nutrition are context for the provider only, so
    /// days with the same deficiencies reuse one payload.
    #[must_use]
    pub fn fingerprint(&self) -> RecommendationFingerprint {
        RecommendationFingerprint::new(
            self.profile.id.clone(),
            &self.deficiencies,
            self.profile.lifestyle,
        )
    }
}

/// Source of personalised recommendations
#[async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// Produce recommendations for a request
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be reached or its reply is unusable
    async fn generate(&self, request: &RecommendationRequest) -> AppResult<RecommendationSet>;
}

/// Cache-fronted access to a recommendation provider
#[derive(Clone)]
pub struct RecommendationService {
    provider: Arc<dyn RecommendationProvider>,
    cache: RecommendationCache,
}

impl RecommendationService {
    /// Create a service over a provider and a cache instance
    #[must_use]
    pub fn new(provider: Arc<dyn RecommendationProvider>, cache: RecommendationCache) -> Self {
        info!("Recommendation service initialized");
        Self { provider, cache }
    }

    /// Recommendations for a request, from cache when fresh
    ///
    /// There is no in-flight de-duplication: concurrent misses on the same
    /// fingerprint each call the provider, and the last write wins.
    ///
    /// # Errors
    ///
    /// Returns the provider's error on a cache miss whose generation fails
    pub async fn recommend(&self, request: &RecommendationRequest) -> AppResult<RecommendationSet> {
        let key = request.fingerprint();
        let provider = Arc::clone(&self.provider);
        self.cache
            .fetch_or_generate(&key, || async move {
                provider.generate(request).await.inspect_err(|error| {
                    warn!(
                        provider = service_names::RECOMMENDATION_PROVIDER,
                        user_id = %request.profile.id,
                        error = %error,
                        "Recommendation provider failed"
                    );
                })
            })
            .await
    }

    /// The underlying cache
    #[must_use]
    pub const fn cache(&self) -> &RecommendationCache {
        &self.cache
    }

    /// Cache metrics
    pub async fn metrics(&self) -> MetricsSnapshot {
        self.cache.metrics().await
    }
}
