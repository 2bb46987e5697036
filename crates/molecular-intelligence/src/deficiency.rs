// ABOUTME: Deficiency detection over classified nutrient statuses
// ABOUTME: Reports nutrients at or below a status threshold, preserving input order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use molecular_core::models::{ClassifiedNutrient, NutrientStatus};
use tracing::debug;

use crate::config::intelligence::DeficiencyConfig;

/// Filters nutrients whose status falls at or below a threshold
///
/// The result is always a subset of the input names, in input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeficiencyDetector {
    config: DeficiencyConfig,
}

impl DeficiencyDetector {
    /// Create a detector with the given threshold settings
    #[must_use]
    pub const fn new(config: DeficiencyConfig) -> Self {
        Self { config }
    }

    /// Names of deficient nutrients using the configured threshold
    #[must_use]
    pub fn detect(&self, statuses: &[ClassifiedNutrient]) -> Vec<String> {
        self.detect_below(statuses, self.config.threshold)
    }

    /// Names of nutrients with status at or below `threshold`
    #[must_use]
    pub fn detect_below(
        &self,
        statuses: &[ClassifiedNutrient],
        threshold: NutrientStatus,
    ) -> Vec<String> {
        let deficiencies: Vec<String> = statuses
            .iter()
            .filter(|n| self.config.include_macronutrients || !n.category.is_macronutrient())
            .filter(|n| n.status <= threshold)
            .map(|n| n.name.clone())
            .collect();
        if !deficiencies.is_empty() {
            debug!(?deficiencies, %threshold, "Detected nutrient deficiencies");
        }
        deficiencies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use molecular_core::models::NutrientCategory;

    fn classified(name: &str, category: NutrientCategory, status: NutrientStatus) -> ClassifiedNutrient {
        ClassifiedNutrient {
            name: name.to_owned(),
            category,
            amount: 0.0,
            target: 1.0,
            unit: "g".to_owned(),
            status,
        }
    }

    fn sample() -> Vec<ClassifiedNutrient> {
        vec![
            classified("Protein", NutrientCategory::Macronutrient, NutrientStatus::Critical),
            classified("Iron", NutrientCategory::Mineral, NutrientStatus::Poor),
            classified("Vitamin C", NutrientCategory::Vitamin, NutrientStatus::Warning),
            classified("Zinc", NutrientCategory::Mineral, NutrientStatus::Critical),
        ]
    }

    #[test]
    fn test_default_threshold_is_poor() {
        let found = DeficiencyDetector::default().detect(&sample());
        assert_eq!(found, vec!["Protein", "Iron", "Zinc"]);
    }

    #[test]
    fn test_macronutrients_can_be_excluded() {
        let detector = DeficiencyDetector::new(DeficiencyConfig {
            include_macronutrients: false,
            ..DeficiencyConfig::default()
        });
        assert_eq!(detector.detect(&sample()), vec!["Iron", "Zinc"]);
    }

    #[test]
    fn test_custom_threshold() {
        let found = DeficiencyDetector::default().detect_below(&sample(), NutrientStatus::Critical);
        assert_eq!(found, vec!["Protein", "Zinc"]);
    }
}
