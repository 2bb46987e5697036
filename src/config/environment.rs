// ABOUTME: Environment-based configuration for the molecular balance engine
// ABOUTME: Loads intelligence overrides and cache settings and maps failures to AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use molecular_intelligence::IntelligenceConfig;
use tracing::info;

use crate::cache::CacheConfig;
use crate::errors::AppResult;

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineConfig {
    /// Scoring, status, target, and trend policy
    pub intelligence: IntelligenceConfig,
    /// Recommendation cache TTL and capacity
    pub cache: CacheConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// Intelligence overrides are validated after loading; cache settings
    /// fall back to their defaults when unparseable.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` with `ErrorCode::ConfigInvalid` when an
    /// intelligence override cannot be parsed or breaks validation
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        let config = Self {
            intelligence: IntelligenceConfig::load()?,
            cache: CacheConfig::from_env(),
        };
        info!(
            cache_ttl_secs = config.cache.ttl.as_secs(),
            cache_max_entries = config.cache.max_entries,
            "Configuration loaded"
        );
        Ok(config)
    }
}
