// ABOUTME: Balance score and deficiency configuration
// ABOUTME: Status weights, per-nutrient importance, neutral score, and deficiency threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use molecular_core::constants::policy::{balance_score, importance, status_weights};
use molecular_core::models::NutrientStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Numeric weight of each status
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusWeights {
    /// Weight for excellent
    pub excellent: f64,
    /// Weight for good
    pub good: f64,
    /// Weight for warning
    pub warning: f64,
    /// Weight for poor
    pub poor: f64,
    /// Weight for critical
    pub critical: f64,
}

impl Default for StatusWeights {
    fn default() -> Self {
        Self {
            excellent: status_weights::EXCELLENT,
            good: status_weights::GOOD,
            warning: status_weights::WARNING,
            poor: status_weights::POOR,
            critical: status_weights::CRITICAL,
        }
    }
}

impl StatusWeights {
    /// Weight for one status
    #[must_use]
    pub const fn weight(&self, status: NutrientStatus) -> f64 {
        match status {
            NutrientStatus::Excellent => self.excellent,
            NutrientStatus::Good => self.good,
            NutrientStatus::Warning => self.warning,
            NutrientStatus::Poor => self.poor,
            NutrientStatus::Critical => self.critical,
        }
    }
}

/// Relative importance of nutrients in the composite score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportanceWeights {
    /// Macronutrient importance
    pub macronutrient: f64,
    /// Standard micronutrient importance
    pub micronutrient: f64,
    /// Trace micronutrient importance
    pub trace_micronutrient: f64,
    /// Per-nutrient importance keyed by canonical name
    pub overrides: BTreeMap<String, f64>,
}

impl Default for ImportanceWeights {
    fn default() -> Self {
        Self {
            macronutrient: importance::MACRONUTRIENT,
            micronutrient: importance::MICRONUTRIENT,
            trace_micronutrient: importance::TRACE_MICRONUTRIENT,
            overrides: BTreeMap::new(),
        }
    }
}

/// Balance score configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Status weights
    pub status_weights: StatusWeights,
    /// Nutrient importance
    pub importance: ImportanceWeights,
    /// Score reported when nothing can be weighed
    pub neutral_score: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            status_weights: StatusWeights::default(),
            importance: ImportanceWeights::default(),
            neutral_score: balance_score::NEUTRAL,
        }
    }
}

/// Deficiency detection configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeficiencyConfig {
    /// Statuses at or below this are deficiencies
    pub threshold: NutrientStatus,
    /// Whether macronutrients may be reported
    pub include_macronutrients: bool,
}

impl Default for DeficiencyConfig {
    fn default() -> Self {
        Self {
            threshold: NutrientStatus::Poor,
            include_macronutrients: true,
        }
    }
}
