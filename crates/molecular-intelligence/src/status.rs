// ABOUTME: Nutrient status classification from intake and target
// ABOUTME: Applies higher-is-better, target-range, or lower-is-better policies with configurable bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use molecular_core::models::{ClassifiedNutrient, NutrientStatus, NutrientTotals};

use crate::config::intelligence::{PolicyDirection, StatusBands, StatusConfig, StatusPolicy};
use crate::targets::NutrientTargets;

/// Maps an `(amount, target)` pair to an ordinal status
///
/// Classification is total: a zero or unusable target means "no requirement"
/// and is always excellent, and negative or non-finite amounts count as zero.
#[derive(Debug, Clone, Default)]
pub struct StatusClassifier {
    config: StatusConfig,
}

impl StatusClassifier {
    /// Create a classifier with the given policy table
    #[must_use]
    pub const fn new(config: StatusConfig) -> Self {
        Self { config }
    }

    /// Policy used for a nutrient
    #[must_use]
    pub fn policy_for(&self, name: &str) -> StatusPolicy {
        self.config.policy_for(name)
    }

    /// Classify one nutrient using its configured policy
    #[must_use]
    pub fn classify(&self, name: &str, amount: f64, target: f64) -> NutrientStatus {
        Self::classify_with(&self.policy_for(name), amount, target)
    }

    /// Classify against an explicit policy
    #[must_use]
    pub fn classify_with(policy: &StatusPolicy, amount: f64, target: f64) -> NutrientStatus {
        if !target.is_finite() || target <= 0.0 {
            return NutrientStatus::Excellent;
        }
        let amount = if amount.is_finite() && amount > 0.0 {
            amount
        } else {
            0.0
        };

        match policy.direction {
            PolicyDirection::HigherIsBetter => band_status(&policy.bands, amount / target),
            PolicyDirection::LowerIsBetter => {
                if amount == 0.0 {
                    NutrientStatus::Excellent
                } else {
                    band_status(&policy.bands, target / amount)
                }
            }
            PolicyDirection::TargetRange => {
                let deviation = (amount / target - 1.0).abs();
                let tiers = &policy.tolerances;
                if deviation <= tiers.excellent_max_deviation {
                    NutrientStatus::Excellent
                } else if deviation <= tiers.good_max_deviation {
                    NutrientStatus::Good
                } else if deviation <= tiers.warning_max_deviation {
                    NutrientStatus::Warning
                } else if deviation <= tiers.poor_max_deviation {
                    NutrientStatus::Poor
                } else {
                    NutrientStatus::Critical
                }
            }
        }
    }

    /// Classify every targeted nutrient against a day's totals
    ///
    /// Output follows target order, macronutrients first. Nutrients eaten but
    /// without a target are not graded.
    #[must_use]
    pub fn classify_totals(
        &self,
        totals: &NutrientTotals,
        targets: &NutrientTargets,
    ) -> Vec<ClassifiedNutrient> {
        targets
            .iter()
            .map(|target| {
                let amount = totals.amount(&target.name);
                ClassifiedNutrient {
                    name: target.name.clone(),
                    category: target.category,
                    amount,
                    target: target.amount,
                    unit: target.unit.clone(),
                    status: self.classify(&target.name, amount, target.amount),
                }
            })
            .collect()
    }
}

fn band_status(bands: &StatusBands, ratio: f64) -> NutrientStatus {
    if ratio >= bands.excellent_min_ratio {
        NutrientStatus::Excellent
    } else if ratio >= bands.good_min_ratio {
        NutrientStatus::Good
    } else if ratio >= bands.warning_min_ratio {
        NutrientStatus::Warning
    } else if ratio >= bands.poor_min_ratio {
        NutrientStatus::Poor
    } else {
        NutrientStatus::Critical
    }
}
