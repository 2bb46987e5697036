// ABOUTME: Core data models for the molecular balance engine
// ABOUTME: Re-exports nutrient, meal, profile, status, intake, trend, and recommendation types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain serde-friendly values passed between the aggregation, scoring, and
//! trend stages. Derived values (meal totals, daily totals, scores) are always
//! recomputed from their inputs and never patched in place.
//!
//! ## Core Models
//!
//! - `NutrientAmount`: a named quantity of one nutrient with its unit and category
//! - `Meal` / `FoodItem`: logged food with per-item nutrient lists
//! - `NutrientTotals`: the ordered macro and micro totals for a meal or day
//! - `UserProfile`: attributes that drive target resolution
//! - `DailyIntake` / `DailySnapshot`: one calendar day of meals and its summary
//! - `Recommendation`: a single AI or fallback suggestion

mod intake;
mod nutrition;
mod profile;
mod recommendation;
mod status;
mod trend;

// Nutrition domain
pub use nutrition::{
    FoodItem, Meal, MealType, NutrientAmount, NutrientCategory, NutrientTarget, NutrientTotals,
};

// Profile domain
pub use profile::{ActivityLevel, HealthGoal, Lifestyle, MedicalCondition, Sex, UserProfile};

// Status domain
pub use status::{ClassifiedNutrient, NutrientStatus};

// Daily intake domain
pub use intake::{DailyIntake, DailySnapshot};

// Recommendation domain
pub use recommendation::{
    Recommendation, RecommendationPriority, RecommendationSet, RecommendationType,
};

// Trend domain
pub use trend::{
    OverallTrend, Significance, TrendDirection, TrendInsight, TrendMetric, TrendPeriod,
    TrendReport,
};
