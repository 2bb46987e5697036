// ABOUTME: Status classification policy configuration
// ABOUTME: Ratio bands, target-range tolerances, direction per nutrient, and per-name overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Status Classification Configuration
//!
//! A nutrient's status comes from its intake-to-target ratio, read through a
//! [`StatusPolicy`]. The policy says which direction is good and where the
//! band edges sit. Most nutrients use the default higher-is-better bands;
//! energy and fat are graded on distance from target in both directions.

use molecular_core::constants::nutrients;
use molecular_core::constants::policy::{status_bands, target_range};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which side of the target is desirable
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PolicyDirection {
    /// More is better, up to and beyond the target
    #[default]
    HigherIsBetter,
    /// Closest to the target is best, overshoot is penalised
    TargetRange,
    /// Less is better (inflammation-type markers)
    LowerIsBetter,
}

/// Lower ratio bounds for each status
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusBands {
    /// Ratio at or above which the status is excellent
    pub excellent_min_ratio: f64,
    /// Ratio at or above which the status is good
    pub good_min_ratio: f64,
    /// Ratio at or above which the status is warning
    pub warning_min_ratio: f64,
    /// Ratio at or above which the status is poor
    pub poor_min_ratio: f64,
}

impl Default for StatusBands {
    fn default() -> Self {
        Self {
            excellent_min_ratio: status_bands::EXCELLENT_MIN_RATIO,
            good_min_ratio: status_bands::GOOD_MIN_RATIO,
            warning_min_ratio: status_bands::WARNING_MIN_RATIO,
            poor_min_ratio: status_bands::POOR_MIN_RATIO,
        }
    }
}

/// Maximum fractional deviation from target for each status
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeTolerances {
    /// Deviation up to which the status is excellent
    pub excellent_max_deviation: f64,
    /// Deviation up to which the status is good
    pub good_max_deviation: f64,
    /// Deviation up to which the status is warning
    pub warning_max_deviation: f64,
    /// Deviation up to which the status is poor
    pub poor_max_deviation: f64,
}

impl Default for RangeTolerances {
    fn default() -> Self {
        Self {
            excellent_max_deviation: target_range::EXCELLENT_MAX_DEVIATION,
            good_max_deviation: target_range::GOOD_MAX_DEVIATION,
            warning_max_deviation: target_range::WARNING_MAX_DEVIATION,
            poor_max_deviation: target_range::POOR_MAX_DEVIATION,
        }
    }
}

/// Complete grading rule for one nutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct StatusPolicy {
    /// Desirable direction
    pub direction: PolicyDirection,
    /// Bands for the ratio-based directions
    pub bands: StatusBands,
    /// Tiers for the target-range direction
    pub tolerances: RangeTolerances,
}

impl StatusPolicy {
    /// Default bands with the given direction
    #[must_use]
    pub fn with_direction(direction: PolicyDirection) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }
}

/// Status classification configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusConfig {
    /// Policy applied to nutrients without an override
    pub default_policy: StatusPolicy,
    /// Per-nutrient policies keyed by [`policy_key`]
    pub overrides: BTreeMap<String, StatusPolicy>,
}

impl Default for StatusConfig {
    fn default() -> Self {
        let range = StatusPolicy::with_direction(PolicyDirection::TargetRange);
        let overrides = [nutrients::CALORIES, nutrients::FAT]
            .into_iter()
            .map(|name| (name.to_owned(), range))
            .collect();
        Self {
            default_policy: StatusPolicy::default(),
            overrides,
        }
    }
}

/// Override key for a nutrient name
///
/// Catalogue nutrients use their canonical name; anything else is trimmed and
/// lowercased, so `"Sodium"` and `"sodium "` share one override.
#[must_use]
pub fn policy_key(name: &str) -> String {
    nutrients::lookup(name).map_or_else(
        || name.trim().to_lowercase(),
        |known| known.name.to_owned(),
    )
}

impl StatusConfig {
    /// Policy for a nutrient, honouring overrides case-insensitively
    ///
    /// Keys inserted into `overrides` directly are matched through
    /// [`policy_key`] as well.
    #[must_use]
    pub fn policy_for(&self, name: &str) -> StatusPolicy {
        let key = policy_key(name);
        self.overrides
            .get(&key)
            .or_else(|| {
                self.overrides
                    .iter()
                    .find(|(candidate, _)| policy_key(candidate) == key)
                    .map(|(_, policy)| policy)
            })
            .copied()
            .unwrap_or(self.default_policy)
    }

    /// Set or replace the policy for one nutrient
    pub fn set_policy(&mut self, name: &str, policy: StatusPolicy) {
        let key = policy_key(name);
        self.overrides
            .retain(|candidate, _| *candidate == key || policy_key(candidate) != key);
        self.overrides.insert(key, policy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_key_normalises_unknown_names() {
        assert_eq!(policy_key(" CRP "), "crp");
        assert_eq!(policy_key("protein"), "Protein");
        assert_eq!(policy_key("omega3"), "Omega-3");
    }

    #[test]
    fn test_overrides_match_any_case() {
        let lower = StatusPolicy::with_direction(PolicyDirection::LowerIsBetter);
        let mut config = StatusConfig::default();
        config.set_policy("Sodium", lower);
        assert_eq!(config.policy_for("sodium").direction, PolicyDirection::LowerIsBetter);
        assert_eq!(config.policy_for("SODIUM ").direction, PolicyDirection::LowerIsBetter);

        config.overrides.insert("Homocysteine".to_owned(), lower);
        assert_eq!(
            config.policy_for("homocysteine").direction,
            PolicyDirection::LowerIsBetter
        );
        assert_eq!(config.policy_for("calories").direction, PolicyDirection::TargetRange);
    }

    #[test]
    fn test_set_policy_replaces_differently_cased_key() {
        let mut config = StatusConfig::default();
        config.overrides.insert("Sodium".to_owned(), StatusPolicy::default());
        config.set_policy(
            "sodium",
            StatusPolicy::with_direction(PolicyDirection::LowerIsBetter),
        );
        assert!(!config.overrides.contains_key("Sodium"));
        assert_eq!(config.policy_for("Sodium").direction, PolicyDirection::LowerIsBetter);
    }
}
