// ABOUTME: Composite molecular balance score from classified nutrient statuses
// ABOUTME: Importance-weighted mean of status weights, clamped to 0-100 with a neutral fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use molecular_core::constants::nutrients;
use molecular_core::constants::policy::balance_score;
use molecular_core::models::{ClassifiedNutrient, NutrientCategory, NutrientStatus};
use tracing::trace;

use crate::config::intelligence::ScoringConfig;

/// Folds per-nutrient statuses into one 0-100 score
///
/// `score = sum(importance * status_weight) / sum(importance)`, rounded and
/// clamped. With no input, or when every importance is zero, the configured
/// neutral score is returned.
#[derive(Debug, Clone, Default)]
pub struct BalanceScorer {
    config: ScoringConfig,
}

impl BalanceScorer {
    /// Create a scorer with the given weights
    #[must_use]
    pub const fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Importance of a nutrient in the composite score
    #[must_use]
    pub fn importance(&self, name: &str, category: NutrientCategory) -> f64 {
        let weights = &self.config.importance;
        if let Some(weight) = weights.overrides.get(&nutrients::canonical_name(name)) {
            return *weight;
        }
        if category.is_macronutrient() {
            weights.macronutrient
        } else if nutrients::is_trace(name) {
            weights.trace_micronutrient
        } else {
            weights.micronutrient
        }
    }

    /// Numeric weight of a status
    #[must_use]
    pub const fn status_weight(&self, status: NutrientStatus) -> f64 {
        self.config.status_weights.weight(status)
    }

    /// Score a day's classified nutrients
    #[must_use]
    pub fn score(&self, statuses: &[ClassifiedNutrient]) -> u8 {
        let (weighted, total_importance) =
            statuses
                .iter()
                .fold((0.0_f64, 0.0_f64), |(weighted, total), nutrient| {
                    let importance = self.importance(&nutrient.name, nutrient.category);
                    (
                        importance.mul_add(self.status_weight(nutrient.status), weighted),
                        total + importance,
                    )
                });

        if statuses.is_empty() || total_importance <= 0.0 {
            return self.config.neutral_score;
        }

        let score = (weighted / total_importance)
            .round()
            .clamp(f64::from(balance_score::MIN), f64::from(balance_score::MAX));
        trace!(nutrients = statuses.len(), score, "Computed balance score");
        score as u8
    }
}
