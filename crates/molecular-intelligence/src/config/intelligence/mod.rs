// ABOUTME: Intelligence policy configuration for nutrient grading, scoring, targets, and trends
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and environment loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Every tunable cut point used by the algorithms lives here, seeded from
//! `molecular_core::constants::policy`. Configuration is an owned value handed
//! to each component; there is no process-wide instance.
//!
//! # Module Structure
//!
//! - `status` - Ratio bands, target-range tiers, and per-nutrient directions
//! - `scoring` - Status weights, importance weights, and deficiency threshold
//! - `targets` - Energy equations, macro split, and micronutrient references
//! - `trends` - Direction and significance thresholds, streaks

/// Validation and parse errors for configuration
pub mod error;
/// Status weights, importance weights, and deficiency rules
pub mod scoring;
/// Per-nutrient status policies
pub mod status;
/// Energy equations and nutrient reference values
pub mod targets;
/// Trend thresholds and windows
pub mod trends;

pub use error::ConfigError;
pub use scoring::{DeficiencyConfig, ImportanceWeights, ScoringConfig, StatusWeights};
pub use status::{
    policy_key, PolicyDirection, RangeTolerances, StatusBands, StatusConfig, StatusPolicy,
};
pub use targets::{
    ActivityFactorsConfig, BmrConfig, EnergyAdjustments, HarrisBenedictCoefficients,
    MacroSplitConfig, MicronutrientAdjustments, MicronutrientReference, TargetConfig,
};
pub use trends::{TrendConfig, TrendThresholds};

use molecular_core::constants::policy::balance_score;
use serde::{Deserialize, Serialize};
use std::env;
use std::iter;
use std::str::FromStr;
use tracing::debug;

/// Main intelligence configuration container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct IntelligenceConfig {
    /// Status classification policy
    pub status: StatusConfig,
    /// Balance score weights
    pub scoring: ScoringConfig,
    /// Deficiency detection
    pub deficiency: DeficiencyConfig,
    /// Target resolution
    pub targets: TargetConfig,
    /// Trend analysis
    pub trends: TrendConfig,
}

impl IntelligenceConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!("Loaded intelligence configuration");
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_status()?;
        self.validate_scoring()?;
        self.validate_targets()?;
        self.validate_trends()
    }

    fn validate_status(&self) -> Result<(), ConfigError> {
        let policies =
            iter::once(&self.status.default_policy).chain(self.status.overrides.values());
        for policy in policies {
            let bands = &policy.bands;
            if !(bands.excellent_min_ratio > bands.good_min_ratio
                && bands.good_min_ratio > bands.warning_min_ratio
                && bands.warning_min_ratio > bands.poor_min_ratio
                && bands.poor_min_ratio > 0.0)
            {
                return Err(ConfigError::InvalidRange(
                    "Status bands must be strictly descending from excellent to poor and positive",
                ));
            }
            let tiers = &policy.tolerances;
            if !(tiers.excellent_max_deviation > 0.0
                && tiers.excellent_max_deviation < tiers.good_max_deviation
                && tiers.good_max_deviation < tiers.warning_max_deviation
                && tiers.warning_max_deviation < tiers.poor_max_deviation)
            {
                return Err(ConfigError::InvalidRange(
                    "Target-range tolerances must be positive and strictly ascending",
                ));
            }
        }
        Ok(())
    }

    fn validate_scoring(&self) -> Result<(), ConfigError> {
        let weights = &self.scoring.status_weights;
        let all_weights = [
            weights.excellent,
            weights.good,
            weights.warning,
            weights.poor,
            weights.critical,
        ];
        if all_weights
            .iter()
            .any(|w| !w.is_finite() || *w < 0.0 || *w > f64::from(balance_score::MAX))
        {
            return Err(ConfigError::InvalidWeights(
                "Status weights must lie between 0 and 100",
            ));
        }

        let importance = &self.scoring.importance;
        let base = [
            importance.macronutrient,
            importance.micronutrient,
            importance.trace_micronutrient,
        ];
        if base
            .iter()
            .chain(importance.overrides.values())
            .any(|w| !w.is_finite() || *w < 0.0)
        {
            return Err(ConfigError::InvalidWeights(
                "Importance weights must be non-negative",
            ));
        }

        if self.scoring.neutral_score > balance_score::MAX {
            return Err(ConfigError::ValueOutOfRange(
                "Neutral score must be between 0 and 100",
            ));
        }
        Ok(())
    }

    fn validate_targets(&self) -> Result<(), ConfigError> {
        let factors = &self.targets.activity_factors;
        if factors.sedentary < 1.0 || factors.extra_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.lightly_active
            || factors.lightly_active >= factors.moderately_active
            || factors.moderately_active >= factors.very_active
            || factors.very_active >= factors.extra_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let macros = &self.targets.macros;
        let share_sum = macros.carbohydrate_share + macros.fat_share;
        if (share_sum - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "Carbohydrate and fat shares must sum to 1.0",
            ));
        }
        if macros.protein_g_per_kg <= 0.0 || macros.fiber_g_per_kg < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Protein must be positive and fiber non-negative",
            ));
        }
        Ok(())
    }

    fn validate_trends(&self) -> Result<(), ConfigError> {
        for thresholds in [&self.trends.score, &self.trends.nutrient] {
            if !(thresholds.trend_percent > 0.0
                && thresholds.trend_percent <= thresholds.medium_percent
                && thresholds.medium_percent < thresholds.high_percent)
            {
                return Err(ConfigError::InvalidRange(
                    "Trend thresholds must be positive and ascending (trend <= medium < high)",
                ));
            }
        }
        if self.trends.overall_score_points < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Overall trend points must be non-negative",
            ));
        }
        if self.trends.default_window_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Default trend window must be at least one day",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    ///
    /// Status band overrides apply to the default policy and to every
    /// per-nutrient override, so one knob moves the whole table.
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let mut bands = self.status.default_policy.bands;
        Self::apply_env_var(
            "INTELLIGENCE_STATUS_EXCELLENT_RATIO",
            &mut bands.excellent_min_ratio,
        )?;
        Self::apply_env_var("INTELLIGENCE_STATUS_GOOD_RATIO", &mut bands.good_min_ratio)?;
        Self::apply_env_var(
            "INTELLIGENCE_STATUS_WARNING_RATIO",
            &mut bands.warning_min_ratio,
        )?;
        Self::apply_env_var("INTELLIGENCE_STATUS_POOR_RATIO", &mut bands.poor_min_ratio)?;
        self.status.default_policy.bands = bands;
        for policy in self.status.overrides.values_mut() {
            policy.bands = bands;
        }

        // Scoring overrides
        Self::apply_env_var(
            "INTELLIGENCE_SCORE_NEUTRAL",
            &mut self.scoring.neutral_score,
        )?;
        Self::apply_env_var(
            "INTELLIGENCE_SCORE_MACRO_IMPORTANCE",
            &mut self.scoring.importance.macronutrient,
        )?;

        // Trend overrides
        Self::apply_env_var(
            "INTELLIGENCE_TREND_SCORE_THRESHOLD",
            &mut self.trends.score.trend_percent,
        )?;
        Self::apply_env_var(
            "INTELLIGENCE_TREND_NUTRIENT_THRESHOLD",
            &mut self.trends.nutrient.trend_percent,
        )?;

        Ok(self)
    }
}
