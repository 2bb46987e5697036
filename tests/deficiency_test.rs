// ABOUTME: Integration tests for deficiency detection over classified nutrients
// ABOUTME: Checks threshold semantics, subset and order laws, and macronutrient filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{at, meal, reference_profile, test_date};
use molecular_balance::intelligence::config::intelligence::DeficiencyConfig;
use molecular_balance::intelligence::{
    DeficiencyDetector, NutrientAggregator, StatusClassifier, TargetResolver,
};
use molecular_balance::models::{ClassifiedNutrient, NutrientCategory, NutrientStatus};

fn classified(name: &str, category: NutrientCategory, status: NutrientStatus) -> ClassifiedNutrient {
    ClassifiedNutrient {
        name: name.to_owned(),
        category,
        amount: 0.0,
        target: 1.0,
        unit: "mg".to_owned(),
        status,
    }
}

fn mixed_statuses() -> Vec<ClassifiedNutrient> {
    vec![
        classified("Protein", NutrientCategory::Macronutrient, NutrientStatus::Poor),
        classified("Zinc", NutrientCategory::Mineral, NutrientStatus::Critical),
        classified("Vitamin C", NutrientCategory::Vitamin, NutrientStatus::Good),
        classified("Iron", NutrientCategory::Mineral, NutrientStatus::Poor),
        classified("Folate", NutrientCategory::Vitamin, NutrientStatus::Warning),
        classified("Calcium", NutrientCategory::Mineral, NutrientStatus::Excellent),
    ]
}

#[test]
fn test_default_threshold_reports_poor_and_critical_in_input_order() {
    let found = DeficiencyDetector::default().detect(&mixed_statuses());
    assert_eq!(found, vec!["Protein", "Zinc", "Iron"]);
}

#[test]
fn test_result_is_ordered_subset_for_every_threshold() {
    let statuses = mixed_statuses();
    let detector = DeficiencyDetector::default();
    let thresholds = [
        NutrientStatus::Critical,
        NutrientStatus::Poor,
        NutrientStatus::Warning,
        NutrientStatus::Good,
        NutrientStatus::Excellent,
    ];

    let mut previous_len = 0;
    for threshold in thresholds {
        let found = detector.detect_below(&statuses, threshold);

        // Every reported name appears in the input, in input order
        let mut cursor = statuses.iter();
        for name in &found {
            assert!(
                cursor.any(|s| &s.name == name),
                "{name} out of order or missing at {threshold:?}"
            );
        }
        // Every reported nutrient is at or below the threshold
        for name in &found {
            let status = statuses.iter().find(|s| &s.name == name).unwrap().status;
            assert!(status <= threshold);
        }
        // Raising the threshold never drops a deficiency
        assert!(found.len() >= previous_len);
        previous_len = found.len();
    }
    assert_eq!(previous_len, statuses.len());
}

#[test]
fn test_critical_threshold_is_strict() {
    let found =
        DeficiencyDetector::default().detect_below(&mixed_statuses(), NutrientStatus::Critical);
    assert_eq!(found, vec!["Zinc"]);
}

#[test]
fn test_macronutrients_can_be_excluded() {
    let detector = DeficiencyDetector::new(DeficiencyConfig {
        include_macronutrients: false,
        ..DeficiencyConfig::default()
    });
    assert_eq!(detector.detect(&mixed_statuses()), vec!["Zinc", "Iron"]);
}

#[test]
fn test_empty_input_has_no_deficiencies() {
    assert!(DeficiencyDetector::default().detect(&[]).is_empty());
}

#[test]
fn test_iron_poor_day_flags_iron() {
    let date = test_date();
    let targets = TargetResolver::default().resolve(&reference_profile());
    // 3.5 of 8 mg is under 60% of the target, which grades poor
    let meals = vec![meal("Toast", at(date, 8), &[("Iron", 3.5)])];
    let totals = NutrientAggregator::aggregate(&meals);
    let statuses = StatusClassifier::default().classify_totals(&totals, &targets);
    let found = DeficiencyDetector::default().detect(&statuses);
    assert!(found.contains(&"Iron".to_owned()));

    let enough = vec![meal("Steak", at(date, 19), &[("Iron", 7.0)])];
    let totals = NutrientAggregator::aggregate(&enough);
    let statuses = StatusClassifier::default().classify_totals(&totals, &targets);
    assert!(!DeficiencyDetector::default()
        .detect(&statuses)
        .contains(&"Iron".to_owned()));
}
