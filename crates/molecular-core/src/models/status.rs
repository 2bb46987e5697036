// ABOUTME: Ordinal nutrient status and the per-nutrient classification record
// ABOUTME: NutrientStatus (critical < poor < warning < good < excellent) and ClassifiedNutrient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use super::NutrientCategory;

/// How well an intake meets its target
///
/// Variants are declared worst-first so the derived ordering reads
/// `Critical < Poor < Warning < Good < Excellent`.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum NutrientStatus {
    /// Far from target
    Critical,
    /// Well short of target
    Poor,
    /// Somewhat short of target
    Warning,
    /// Close to target
    Good,
    /// At or beyond target
    Excellent,
}

impl NutrientStatus {
    /// All statuses, worst first
    pub const ALL: [Self; 5] = [
        Self::Critical,
        Self::Poor,
        Self::Warning,
        Self::Good,
        Self::Excellent,
    ];

    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Poor => "poor",
            Self::Warning => "warning",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}

impl fmt::Display for NutrientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One nutrient's intake, target, and resulting status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedNutrient {
    /// Canonical nutrient name
    pub name: String,
    /// Nutrient category
    pub category: NutrientCategory,
    /// Amount eaten
    pub amount: f64,
    /// Daily target
    pub target: f64,
    /// Measurement unit
    pub unit: String,
    /// Classification result
    pub status: NutrientStatus,
}

impl ClassifiedNutrient {
    /// Intake as a percentage of target (100 when there is no requirement)
    #[must_use]
    pub fn percent_of_target(&self) -> f64 {
        if self.target > 0.0 {
            self.amount / self.target * 100.0
        } else {
            100.0
        }
    }
}
