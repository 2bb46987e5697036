// ABOUTME: Nutrition engine facade over the intelligence algorithms
// ABOUTME: Resolves targets, analyzes days, applies meal edits, and reports multi-day trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Engine
//!
//! One entry point that builds every algorithm from a single
//! [`IntelligenceConfig`] so callers never wire classifiers, scorers, and
//! detectors by hand. The engine is immutable and `Send + Sync`; share it
//! behind an `Arc` across tasks.

use chrono::NaiveDate;
use molecular_core::constants::nutrients;
use molecular_core::models::{
    ClassifiedNutrient, DailyIntake, DailySnapshot, Meal, TrendInsight, TrendMetric, TrendReport,
    UserProfile,
};
use serde::{Deserialize, Serialize};
use std::iter;
use tracing::{debug, info};

use crate::errors::AppResult;
use crate::intelligence::{
    DailyIntakeCalculator, DeficiencyDetector, IntelligenceConfig, NutrientAggregator,
    NutrientTargets, StatusClassifier, TargetResolver, TrendAnalyzer,
};
use crate::recommendations::RecommendationRequest;

/// Everything known about one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAnalysis {
    /// Meals, totals, and score
    pub intake: DailyIntake,
    /// Per-nutrient grades in target order
    pub statuses: Vec<ClassifiedNutrient>,
    /// Nutrients at or below the deficiency threshold
    pub deficiencies: Vec<String>,
}

/// Facade over target resolution, daily analysis, and trend analysis
#[derive(Debug, Clone)]
pub struct NutritionEngine {
    config: IntelligenceConfig,
    resolver: TargetResolver,
    classifier: StatusClassifier,
    calculator: DailyIntakeCalculator,
    detector: DeficiencyDetector,
    trends: TrendAnalyzer,
}

impl Default for NutritionEngine {
    fn default() -> Self {
        Self::new(IntelligenceConfig::default())
    }
}

impl NutritionEngine {
    /// Build every component from one configuration
    #[must_use]
    pub fn new(config: IntelligenceConfig) -> Self {
        Self {
            resolver: TargetResolver::new(config.targets),
            classifier: StatusClassifier::new(config.status.clone()),
            calculator: DailyIntakeCalculator::from_config(&config),
            detector: DeficiencyDetector::new(config.deficiency),
            trends: TrendAnalyzer::new(config.trends),
            config,
        }
    }

    /// Build from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an intelligence override is invalid
    pub fn from_env() -> AppResult<Self> {
        let engine = Self::new(IntelligenceConfig::load()?);
        info!("Nutrition engine initialized from environment");
        Ok(engine)
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Daily targets for a profile
    #[must_use]
    pub fn targets(&self, profile: &UserProfile) -> NutrientTargets {
        self.resolver.resolve(profile)
    }

    /// Analyze one day from its complete meal list
    #[must_use]
    pub fn analyze_day(
        &self,
        profile: &UserProfile,
        date: NaiveDate,
        meals: Vec<Meal>,
    ) -> DailyAnalysis {
        let targets = self.targets(profile);
        let intake = self.calculator.compute(date, meals, &targets);
        self.finish(intake, &targets)
    }

    /// Analyze every date present in a meal log, oldest first
    #[must_use]
    pub fn analyze_history(&self, profile: &UserProfile, meals: Vec<Meal>) -> Vec<DailyAnalysis> {
        let targets = self.targets(profile);
        let days: Vec<DailyAnalysis> = DailyIntakeCalculator::group_by_date(meals)
            .into_iter()
            .map(|(date, day_meals)| {
                let intake = self.calculator.compute(date, day_meals, &targets);
                self.finish(intake, &targets)
            })
            .collect();
        debug!(user_id = %profile.id, days = days.len(), "Analyzed meal history");
        days
    }

    /// Day with one more meal, fully recomputed
    ///
    /// # Errors
    ///
    /// Returns an error if the meal belongs to another date or its id is taken
    pub fn add_meal(
        &self,
        profile: &UserProfile,
        day: &DailyAnalysis,
        meal: Meal,
    ) -> AppResult<DailyAnalysis> {
        let targets = self.targets(profile);
        let intake = self.calculator.add_meal(&day.intake, meal, &targets)?;
        Ok(self.finish(intake, &targets))
    }

    /// Day with one meal replaced by id, fully recomputed
    ///
    /// # Errors
    ///
    /// Returns an error if no meal has that id or the replacement is for another date
    pub fn replace_meal(
        &self,
        profile: &UserProfile,
        day: &DailyAnalysis,
        meal: Meal,
    ) -> AppResult<DailyAnalysis> {
        let targets = self.targets(profile);
        let intake = self.calculator.replace_meal(&day.intake, meal, &targets)?;
        Ok(self.finish(intake, &targets))
    }

    /// Day without one meal, fully recomputed
    ///
    /// # Errors
    ///
    /// Returns an error if no meal has that id
    pub fn remove_meal(
        &self,
        profile: &UserProfile,
        day: &DailyAnalysis,
        meal_id: &str,
    ) -> AppResult<DailyAnalysis> {
        let targets = self.targets(profile);
        let intake = self.calculator.remove_meal(&day.intake, meal_id, &targets)?;
        Ok(self.finish(intake, &targets))
    }

    /// Recommendation request for the latest of `days`
    ///
    /// Deficiencies and statuses come from the last day; recent nutrition is
    /// the per-nutrient mean across every day given. An empty slice yields a
    /// request with no deficiencies and no nutrition context.
    #[must_use]
    pub fn recommendation_request(
        profile: &UserProfile,
        days: &[DailyAnalysis],
    ) -> RecommendationRequest {
        let Some(latest) = days.last() else {
            return RecommendationRequest::new(profile.clone(), Vec::new());
        };
        let totals: Vec<_> = days
            .iter()
            .map(|day| day.intake.total_nutrients.clone())
            .collect();
        debug!(user_id = %profile.id, days = days.len(), "Built recommendation request");
        RecommendationRequest::new(profile.clone(), latest.deficiencies.clone())
            .with_statuses(latest.statuses.clone())
            .with_recent_nutrition(NutrientAggregator::average(&totals))
    }

    /// Trend input for one day
    #[must_use]
    pub fn snapshot(intake: &DailyIntake) -> DailySnapshot {
        DailySnapshot::from(intake)
    }

    /// Score plus every catalogue nutrient
    #[must_use]
    pub fn default_trend_metrics() -> Vec<TrendMetric> {
        iter::once(TrendMetric::MolecularBalanceScore)
            .chain(nutrients::all().map(|entry| TrendMetric::nutrient(entry.name)))
            .collect()
    }

    /// One insight per metric; `None` uses the configured default window
    #[must_use]
    pub fn analyze_trends(
        &self,
        history: &[DailySnapshot],
        window: Option<usize>,
        metrics: &[TrendMetric],
    ) -> Vec<TrendInsight> {
        let window = window.unwrap_or(self.config.trends.default_window_days);
        self.trends.analyze(history, window, metrics)
    }

    /// Insights plus overall direction and streaks
    #[must_use]
    pub fn trend_report(
        &self,
        history: &[DailySnapshot],
        window: Option<usize>,
        metrics: &[TrendMetric],
    ) -> TrendReport {
        let window = window.unwrap_or(self.config.trends.default_window_days);
        self.trends.report(history, window, metrics)
    }

    fn finish(&self, intake: DailyIntake, targets: &NutrientTargets) -> DailyAnalysis {
        let statuses = self
            .classifier
            .classify_totals(&intake.total_nutrients, targets);
        let deficiencies = self.detector.detect(&statuses);
        DailyAnalysis {
            intake,
            statuses,
            deficiencies,
        }
    }
}
