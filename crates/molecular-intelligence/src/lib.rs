// ABOUTME: Nutrition intelligence algorithms for the molecular balance engine
// ABOUTME: Aggregation, target resolution, status classification, scoring, deficiencies, and trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Molecular Intelligence
//!
//! Pure, synchronous algorithms that turn logged meals into a daily molecular
//! balance picture. Every component is `Send + Sync`, holds only its slice of
//! [`IntelligenceConfig`], and never fails on odd numeric input: amounts are
//! clamped, zero targets mean "no requirement", and empty inputs produce
//! neutral results.
//!
//! Data flows leaves first:
//!
//! 1. [`NutrientAggregator`] sums meals into daily totals
//! 2. [`TargetResolver`] derives per-user targets from a profile
//! 3. [`StatusClassifier`] grades each nutrient against its target
//! 4. [`BalanceScorer`] folds the grades into one 0-100 score
//! 5. [`DeficiencyDetector`] lists nutrients at or below a threshold
//! 6. [`DailyIntakeCalculator`] rebuilds a day whenever its meals change
//! 7. [`TrendAnalyzer`] compares recent and previous windows of days

/// Meal-to-daily nutrient summation
pub mod aggregator;

/// Intelligence policy configuration with environment overrides
pub mod config;

/// Daily intake construction and full recompute on meal edits
pub mod daily;

/// Deficiency filtering over classified nutrients
pub mod deficiency;

/// Composite molecular balance score
pub mod scoring;

/// Intake-to-target status classification
pub mod status;

/// Per-user nutrient target resolution
pub mod targets;

/// Multi-day trend analysis
pub mod trends;

pub use aggregator::NutrientAggregator;
pub use config::{ConfigError, IntelligenceConfig};
pub use daily::DailyIntakeCalculator;
pub use deficiency::DeficiencyDetector;
pub use scoring::BalanceScorer;
pub use status::StatusClassifier;
pub use targets::{NutrientTargets, TargetResolver};
pub use trends::TrendAnalyzer;
