// ABOUTME: Integration tests for daily intake computation and meal edits
// ABOUTME: Verifies full recomputation on add, replace, and remove plus date bucketing and error cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{at, day_after, meal, meal_meeting, reference_profile, test_date};
use molecular_balance::constants::nutrients;
use molecular_balance::errors::ErrorCode;
use molecular_balance::intelligence::{DailyIntakeCalculator, NutrientTargets, TargetResolver};
use molecular_balance::models::{DailyIntake, Meal};

fn targets() -> NutrientTargets {
    TargetResolver::default().resolve(&reference_profile())
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Intake recomputed from scratch, for comparison with edited intakes
fn fresh(calculator: &DailyIntakeCalculator, meals: Vec<Meal>) -> DailyIntake {
    calculator.compute(test_date(), meals, &targets())
}

#[test]
fn test_empty_day_scores_all_critical() {
    let intake = DailyIntakeCalculator::default().compute(test_date(), Vec::new(), &targets());
    assert!(intake.meals.is_empty());
    assert_eq!(intake.molecular_balance_score, 20);
    assert!(close(intake.total_nutrients.amount(nutrients::PROTEIN), 0.0));
}

#[test]
fn test_meeting_every_target_scores_hundred() {
    let targets = targets();
    let plate = meal_meeting(&targets, 1.0, at(test_date(), 12));
    let intake = DailyIntakeCalculator::default().compute(test_date(), vec![plate], &targets);
    assert_eq!(intake.molecular_balance_score, 100);
}

#[test]
fn test_add_meal_matches_full_recompute() -> Result<()> {
    let calculator = DailyIntakeCalculator::default();
    let date = test_date();
    let breakfast = meal("Oats", at(date, 8), &[("Protein", 15.0), ("Fiber", 8.0)]);
    let lunch = meal("Lentils", at(date, 13), &[("Protein", 18.0), ("Iron", 6.6)]);

    let before = fresh(&calculator, vec![breakfast.clone()]);
    let after = calculator.add_meal(&before, lunch.clone(), &targets())?;

    assert_eq!(after, fresh(&calculator, vec![breakfast, lunch]));
    assert!(close(after.total_nutrients.amount(nutrients::PROTEIN), 33.0));
    assert!(after.molecular_balance_score >= before.molecular_balance_score);
    // The input intake is untouched
    assert_eq!(before.meals.len(), 1);
    Ok(())
}

#[test]
fn test_replace_meal_matches_full_recompute() -> Result<()> {
    let calculator = DailyIntakeCalculator::default();
    let date = test_date();
    let breakfast = meal("Toast", at(date, 8), &[("Carbohydrates", 30.0)]);
    let dinner = meal("Pasta", at(date, 19), &[("Carbohydrates", 90.0)]);
    let intake = fresh(&calculator, vec![breakfast.clone(), dinner.clone()]);

    let mut lighter = meal("Soup", at(date, 19), &[("Carbohydrates", 20.0)]);
    lighter.id.clone_from(&dinner.id);
    let replaced = calculator.replace_meal(&intake, lighter.clone(), &targets())?;

    assert_eq!(replaced, fresh(&calculator, vec![breakfast, lighter]));
    assert!(close(
        replaced.total_nutrients.amount(nutrients::CARBOHYDRATES),
        50.0
    ));
    Ok(())
}

#[test]
fn test_remove_meal_matches_full_recompute() -> Result<()> {
    let calculator = DailyIntakeCalculator::default();
    let date = test_date();
    let breakfast = meal("Eggs", at(date, 8), &[("Protein", 13.0)]);
    let snack = meal("Almonds", at(date, 16), &[("Magnesium", 80.0)]);
    let intake = fresh(&calculator, vec![breakfast.clone(), snack.clone()]);

    let removed = calculator.remove_meal(&intake, &snack.id, &targets())?;
    assert_eq!(removed, fresh(&calculator, vec![breakfast.clone()]));
    assert!(close(removed.total_nutrients.amount(nutrients::MAGNESIUM), 0.0));

    let emptied = calculator.remove_meal(&removed, &breakfast.id, &targets())?;
    assert_eq!(emptied.molecular_balance_score, 20);
    Ok(())
}

#[test]
fn test_edit_errors() {
    let calculator = DailyIntakeCalculator::default();
    let date = test_date();
    let breakfast = meal("Eggs", at(date, 8), &[("Protein", 13.0)]);
    let intake = fresh(&calculator, vec![breakfast.clone()]);

    let duplicate = calculator.add_meal(&intake, breakfast, &targets());
    assert_eq!(duplicate.unwrap_err().code, ErrorCode::InvalidInput);

    let tomorrow = meal("Late", at(day_after(1), 1), &[("Protein", 5.0)]);
    let wrong_day = calculator.add_meal(&intake, tomorrow.clone(), &targets());
    assert_eq!(wrong_day.unwrap_err().code, ErrorCode::InvalidInput);

    let missing = calculator.replace_meal(
        &intake,
        meal("Ghost", at(date, 9), &[]),
        &targets(),
    );
    assert_eq!(missing.unwrap_err().code, ErrorCode::ResourceNotFound);

    let missing = calculator.remove_meal(&intake, "no-such-meal", &targets());
    assert_eq!(missing.unwrap_err().code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_group_by_utc_date() {
    let day_one = test_date();
    let day_two = day_after(1);
    let meals = vec![
        meal("Late dinner", at(day_one, 23), &[]),
        meal("Breakfast", at(day_two, 0), &[]),
        meal("Lunch", at(day_one, 12), &[]),
    ];

    let days = DailyIntakeCalculator::group_by_date(meals);
    let dates: Vec<_> = days.keys().copied().collect();
    assert_eq!(dates, vec![day_one, day_two]);

    // Order within a day follows the input
    let names: Vec<&str> = days[&day_one].iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Late dinner", "Lunch"]);
    assert_eq!(days[&day_two].len(), 1);
}
