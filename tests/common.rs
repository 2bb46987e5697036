// ABOUTME: Shared fixtures for molecular-balance integration tests
// ABOUTME: Profiles, dates, meals, snapshot builders, and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(
    dead_code,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc
)]

use chrono::{DateTime, Days, NaiveDate, Utc};
use molecular_balance::intelligence::NutrientTargets;
use molecular_balance::models::{
    ActivityLevel, DailySnapshot, FoodItem, Lifestyle, Meal, MealType, Sex, UserProfile,
};
use std::collections::BTreeMap;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; tests stay quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 30-year-old, 70 kg, 175 cm moderately active omnivore male
pub fn reference_profile() -> UserProfile {
    UserProfile {
        age: 30,
        sex: Sex::Male,
        weight_kg: 70.0,
        height_cm: 175.0,
        lifestyle: Lifestyle::Omnivore,
        activity_level: ActivityLevel::ModeratelyActive,
        ..UserProfile::new("user-1")
    }
}

/// Reference profile with a different lifestyle
pub fn profile_with_lifestyle(lifestyle: Lifestyle) -> UserProfile {
    UserProfile {
        lifestyle,
        ..reference_profile()
    }
}

/// Base date used across tests
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

/// `offset` days after the base date
pub fn day_after(offset: u64) -> NaiveDate {
    test_date().checked_add_days(Days::new(offset)).unwrap()
}

/// UTC instant at `hour:00` on `date`
pub fn at(date: NaiveDate, hour: u32) -> DateTime<Utc> {
    date.and_hms_opt(hour, 0, 0).unwrap().and_utc()
}

/// Single-item meal carrying the given nutrient amounts
pub fn meal(name: &str, logged_at: DateTime<Utc>, nutrients: &[(&str, f64)]) -> Meal {
    let item = nutrients
        .iter()
        .fold(FoodItem::new(name, 1.0, "serving"), |item, (nutrient, amount)| {
            item.with_nutrient(nutrient, *amount)
        });
    Meal::new(name, MealType::Other, logged_at, vec![item])
}

/// Meal supplying `factor` times every target
pub fn meal_meeting(targets: &NutrientTargets, factor: f64, logged_at: DateTime<Utc>) -> Meal {
    let item = targets.iter().fold(
        FoodItem::new("Target plate", 1.0, "plate"),
        |item, target| item.with_nutrient(&target.name, target.amount * factor),
    );
    Meal::new("Target plate", MealType::Lunch, logged_at, vec![item])
}

/// Snapshot with a score and optional nutrient values
pub fn snapshot(date: NaiveDate, score: f64, nutrients: &[(&str, f64)]) -> DailySnapshot {
    DailySnapshot {
        date,
        molecular_balance_score: score,
        nutrients: nutrients
            .iter()
            .map(|(name, amount)| ((*name).to_owned(), *amount))
            .collect::<BTreeMap<_, _>>(),
    }
}

/// One snapshot per score on consecutive days from the base date
pub fn score_history(scores: &[f64]) -> Vec<DailySnapshot> {
    scores
        .iter()
        .zip(0_u64..)
        .map(|(score, offset)| snapshot(day_after(offset), *score, &[]))
        .collect()
}
