// ABOUTME: Integration tests for the nutrition engine facade
// ABOUTME: Exercises day and history analysis, meal edits, snapshots, and trend reports end to end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{at, day_after, meal, meal_meeting, reference_profile, test_date};
use molecular_balance::constants::nutrients;
use molecular_balance::engine::NutritionEngine;
use molecular_balance::errors::ErrorCode;
use molecular_balance::intelligence::config::intelligence::DeficiencyConfig;
use molecular_balance::intelligence::IntelligenceConfig;
use molecular_balance::models::{
    DailySnapshot, NutrientStatus, OverallTrend, TrendDirection, TrendMetric,
};

#[test]
fn test_empty_day_is_all_critical() {
    let engine = NutritionEngine::default();
    let analysis = engine.analyze_day(&reference_profile(), test_date(), Vec::new());

    assert_eq!(analysis.intake.molecular_balance_score, 20);
    assert_eq!(analysis.statuses.len(), 16);
    assert!(analysis
        .statuses
        .iter()
        .all(|s| s.status == NutrientStatus::Critical));
    assert_eq!(analysis.deficiencies.len(), 16);
    assert_eq!(analysis.deficiencies[0], nutrients::CALORIES);
}

#[test]
fn test_balanced_day_has_no_deficiencies() {
    let engine = NutritionEngine::default();
    let profile = reference_profile();
    let targets = engine.targets(&profile);
    let plate = meal_meeting(&targets, 1.0, at(test_date(), 12));

    let analysis = engine.analyze_day(&profile, test_date(), vec![plate]);
    assert_eq!(analysis.intake.molecular_balance_score, 100);
    assert!(analysis.deficiencies.is_empty());
}

#[test]
fn test_deficiencies_are_ordered_subset_of_statuses() {
    let engine = NutritionEngine::default();
    let profile = reference_profile();
    let date = test_date();
    let meals = vec![
        meal("Steak", at(date, 19), &[("Protein", 60.0), ("Iron", 5.0), ("Zinc", 9.0)]),
        meal("Orange", at(date, 10), &[("Vitamin C", 70.0)]),
    ];
    let analysis = engine.analyze_day(&profile, date, meals);

    let mut statuses = analysis.statuses.iter();
    for name in &analysis.deficiencies {
        let status = statuses
            .find(|s| &s.name == name)
            .unwrap_or_else(|| panic!("{name} is not an ordered member of the statuses"));
        assert!(status.status <= NutrientStatus::Poor);
    }
    assert!(!analysis.deficiencies.contains(&nutrients::ZINC.to_owned()));
}

#[test]
fn test_history_groups_by_date() {
    let engine = NutritionEngine::default();
    let meals = vec![
        meal("Tuesday lunch", at(day_after(1), 12), &[("Protein", 40.0)]),
        meal("Monday lunch", at(day_after(0), 12), &[("Protein", 30.0)]),
        meal("Monday dinner", at(day_after(0), 19), &[("Protein", 50.0)]),
    ];
    let history = engine.analyze_history(&reference_profile(), meals);

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].intake.date, day_after(0));
    assert_eq!(history[0].intake.meals.len(), 2);
    assert!((history[0].intake.total_nutrients.amount("protein") - 80.0).abs() < 1e-9);
    assert_eq!(history[1].intake.date, day_after(1));
}

#[test]
fn test_meal_edits_refresh_statuses_and_deficiencies() -> Result<()> {
    let engine = NutritionEngine::default();
    let profile = reference_profile();
    let date = test_date();

    let day = engine.analyze_day(&profile, date, Vec::new());
    assert!(day.deficiencies.contains(&nutrients::IRON.to_owned()));

    let liver = meal("Liver", at(date, 12), &[("Iron", 9.0)]);
    let liver_id = liver.id.clone();
    let day = engine.add_meal(&profile, &day, liver)?;
    assert!(!day.deficiencies.contains(&nutrients::IRON.to_owned()));
    assert_eq!(
        day,
        engine.analyze_day(&profile, date, day.intake.meals.clone())
    );

    let mut smaller = meal("Liver (half)", at(date, 12), &[("Iron", 2.0)]);
    smaller.id.clone_from(&liver_id);
    let day = engine.replace_meal(&profile, &day, smaller)?;
    assert!(day.deficiencies.contains(&nutrients::IRON.to_owned()));

    let day = engine.remove_meal(&profile, &day, &liver_id)?;
    assert!(day.intake.meals.is_empty());
    assert_eq!(day.intake.molecular_balance_score, 20);

    let missing = engine.remove_meal(&profile, &day, &liver_id);
    assert_eq!(missing.unwrap_err().code, ErrorCode::ResourceNotFound);
    Ok(())
}

#[test]
fn test_recommendation_request_averages_recent_days() {
    let engine = NutritionEngine::default();
    let profile = reference_profile();
    let meals = vec![
        meal("Monday", at(day_after(0), 12), &[("Protein", 40.0), ("Iron", 2.0)]),
        meal("Tuesday", at(day_after(1), 12), &[("Protein", 80.0)]),
    ];
    let history = engine.analyze_history(&profile, meals);

    let request = NutritionEngine::recommendation_request(&profile, &history);
    let recent = request.recent_nutrition.as_ref().unwrap();
    assert!((recent.amount("Protein") - 60.0).abs() < 1e-9);
    assert!((recent.amount("Iron") - 1.0).abs() < 1e-9);
    assert_eq!(request.deficiencies, history[1].deficiencies);
    assert_eq!(request.statuses, history[1].statuses);
    assert_eq!(request.profile.id, profile.id);
}

#[test]
fn test_recommendation_request_without_days_has_no_context() {
    let profile = reference_profile();
    let request = NutritionEngine::recommendation_request(&profile, &[]);
    assert!(request.deficiencies.is_empty());
    assert!(request.statuses.is_empty());
    assert!(request.recent_nutrition.is_none());
}

#[test]
fn test_configured_deficiency_rules_flow_through() {
    let config = IntelligenceConfig {
        deficiency: DeficiencyConfig {
            include_macronutrients: false,
            ..DeficiencyConfig::default()
        },
        ..IntelligenceConfig::default()
    };
    let engine = NutritionEngine::new(config);
    let analysis = engine.analyze_day(&reference_profile(), test_date(), Vec::new());
    assert_eq!(analysis.deficiencies.len(), 11);
    assert_eq!(analysis.deficiencies[0], nutrients::IRON);
}

#[test]
fn test_snapshot_carries_score_and_nutrients() {
    let engine = NutritionEngine::default();
    let date = test_date();
    let analysis = engine.analyze_day(
        &reference_profile(),
        date,
        vec![meal("Eggs", at(date, 8), &[("Protein", 13.0)])],
    );
    let snapshot = NutritionEngine::snapshot(&analysis.intake);

    assert_eq!(snapshot.date, date);
    assert!(
        (snapshot.molecular_balance_score - f64::from(analysis.intake.molecular_balance_score))
            .abs()
            < f64::EPSILON
    );
    assert!((snapshot.value(&TrendMetric::nutrient("Protein")) - 13.0).abs() < 1e-9);
}

#[test]
fn test_default_trend_metrics_cover_score_and_catalogue() {
    let metrics = NutritionEngine::default_trend_metrics();
    assert_eq!(metrics[0], TrendMetric::MolecularBalanceScore);
    assert_eq!(metrics.len(), 1 + nutrients::all().count());
    assert!(metrics.contains(&TrendMetric::nutrient("Omega-3")));
}

#[test]
fn test_trend_report_over_analyzed_history() {
    let engine = NutritionEngine::default();
    let profile = reference_profile();
    let targets = engine.targets(&profile);

    // A poor week followed by a balanced week
    let history: Vec<DailySnapshot> = (0..14)
        .map(|offset| {
            let date = day_after(offset);
            let factor = if offset < 7 { 0.5 } else { 1.0 };
            let plate = meal_meeting(&targets, factor, at(date, 12));
            NutritionEngine::snapshot(&engine.analyze_day(&profile, date, vec![plate]).intake)
        })
        .collect();

    let metrics = vec![TrendMetric::MolecularBalanceScore, TrendMetric::nutrient("Iron")];
    let report = engine.trend_report(&history, None, &metrics);

    assert_eq!(report.days_analyzed, 14);
    assert_eq!(report.overall_trend, OverallTrend::Improving);
    assert_eq!(report.current_streak, 7);
    assert_eq!(report.best_streak, 7);
    assert_eq!(report.insights.len(), 2);
    assert!(report
        .insights
        .iter()
        .all(|insight| insight.trend == TrendDirection::Up));
    // Iron doubled
    assert!((report.insights[1].percentage_change - 100.0).abs() < 1e-9);

    let narrow = engine.analyze_trends(&history, Some(3), &metrics);
    assert!(narrow[0].percentage_change.abs() < f64::EPSILON);
    assert_eq!(narrow[0].trend, TrendDirection::Stable);
}
