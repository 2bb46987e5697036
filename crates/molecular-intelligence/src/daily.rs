// ABOUTME: Daily intake construction for one calendar date from its meal set
// ABOUTME: Add, replace, and remove meal operations that always recompute totals and score in full
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use molecular_core::errors::{AppError, AppResult};
use molecular_core::models::{DailyIntake, Meal};
use std::collections::BTreeMap;
use tracing::debug;

use crate::aggregator::NutrientAggregator;
use crate::config::IntelligenceConfig;
use crate::scoring::BalanceScorer;
use crate::status::StatusClassifier;
use crate::targets::NutrientTargets;

/// Builds and rebuilds `DailyIntake` values
///
/// Every edit produces a fresh intake from the complete meal list; totals and
/// score are never patched incrementally. Meals are bucketed by the UTC
/// calendar date of `logged_at`.
#[derive(Debug, Clone, Default)]
pub struct DailyIntakeCalculator {
    classifier: StatusClassifier,
    scorer: BalanceScorer,
}

impl DailyIntakeCalculator {
    /// Create a calculator from its classifier and scorer
    #[must_use]
    pub const fn new(classifier: StatusClassifier, scorer: BalanceScorer) -> Self {
        Self { classifier, scorer }
    }

    /// Create a calculator from a full intelligence configuration
    #[must_use]
    pub fn from_config(config: &IntelligenceConfig) -> Self {
        Self::new(
            StatusClassifier::new(config.status.clone()),
            BalanceScorer::new(config.scoring.clone()),
        )
    }

    /// Build the intake for `date` from its complete meal list
    #[must_use]
    pub fn compute(
        &self,
        date: NaiveDate,
        meals: Vec<Meal>,
        targets: &NutrientTargets,
    ) -> DailyIntake {
        let total_nutrients = NutrientAggregator::aggregate(&meals);
        let statuses = self.classifier.classify_totals(&total_nutrients, targets);
        let molecular_balance_score = self.scorer.score(&statuses);
        debug!(%date, meals = meals.len(), molecular_balance_score, "Computed daily intake");
        DailyIntake {
            date,
            meals,
            total_nutrients,
            molecular_balance_score,
        }
    }

    /// Intake with one more meal
    ///
    /// # Errors
    ///
    /// Returns an error if the meal was logged on another date or its id is
    /// already present
    pub fn add_meal(
        &self,
        intake: &DailyIntake,
        meal: Meal,
        targets: &NutrientTargets,
    ) -> AppResult<DailyIntake> {
        Self::ensure_same_date(intake.date, &meal)?;
        if intake.meals.iter().any(|m| m.id == meal.id) {
            return Err(AppError::invalid_input(format!(
                "Meal {} is already logged on {}",
                meal.id, intake.date
            )));
        }
        let mut meals = intake.meals.clone();
        meals.push(meal);
        Ok(self.compute(intake.date, meals, targets))
    }

    /// Intake with a meal replaced by id
    ///
    /// # Errors
    ///
    /// Returns an error if no meal has the given id or the replacement was
    /// logged on another date
    pub fn replace_meal(
        &self,
        intake: &DailyIntake,
        meal: Meal,
        targets: &NutrientTargets,
    ) -> AppResult<DailyIntake> {
        Self::ensure_same_date(intake.date, &meal)?;
        let mut meals = intake.meals.clone();
        let slot = meals
            .iter_mut()
            .find(|m| m.id == meal.id)
            .ok_or_else(|| AppError::not_found(format!("Meal {}", meal.id)))?;
        *slot = meal;
        Ok(self.compute(intake.date, meals, targets))
    }

    /// Intake without the meal with `meal_id`
    ///
    /// # Errors
    ///
    /// Returns an error if no meal has the given id
    pub fn remove_meal(
        &self,
        intake: &DailyIntake,
        meal_id: &str,
        targets: &NutrientTargets,
    ) -> AppResult<DailyIntake> {
        if !intake.meals.iter().any(|m| m.id == meal_id) {
            return Err(AppError::not_found(format!("Meal {meal_id}")));
        }
        let meals = intake
            .meals
            .iter()
            .filter(|m| m.id != meal_id)
            .cloned()
            .collect();
        Ok(self.compute(intake.date, meals, targets))
    }

    /// Bucket meals by calendar date, preserving order within a day
    #[must_use]
    pub fn group_by_date(meals: Vec<Meal>) -> BTreeMap<NaiveDate, Vec<Meal>> {
        let mut days: BTreeMap<NaiveDate, Vec<Meal>> = BTreeMap::new();
        for meal in meals {
            days.entry(meal.logged_at.date_naive()).or_default().push(meal);
        }
        days
    }

    fn ensure_same_date(date: NaiveDate, meal: &Meal) -> AppResult<()> {
        let meal_date = meal.logged_at.date_naive();
        if meal_date == date {
            Ok(())
        } else {
            Err(AppError::invalid_input(format!(
                "Meal {} was logged on {meal_date}, not {date}",
                meal.id
            )))
        }
    }
}
