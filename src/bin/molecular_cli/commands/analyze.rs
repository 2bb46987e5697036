// ABOUTME: Target, daily analysis, and recommendation commands for the molecular-balance CLI
// ABOUTME: Loads profile and meal JSON, runs the engine, and prints JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Days, NaiveDate, Utc};
use molecular_balance::engine::{DailyAnalysis, NutritionEngine};
use molecular_balance::errors::AppResult;
use molecular_balance::models::{Meal, NutrientTotals, RecommendationSet, TrendPeriod, UserProfile};
use molecular_balance::recommendations::{fallback_recommendations, parse_recommendations};
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

use crate::helpers::io::{print_json, read_json, read_text};

#[derive(Serialize)]
struct RecommendationOutput<'a> {
    date: NaiveDate,
    molecular_balance_score: u8,
    deficiencies: &'a [String],
    source: &'static str,
    recent_nutrition: Option<NutrientTotals>,
    recommendations: RecommendationSet,
}

/// Print the daily targets for a profile
pub fn targets(engine: &NutritionEngine, profile_path: &Path) -> AppResult<()> {
    let profile: UserProfile = read_json(profile_path)?;
    print_json(&engine.targets(&profile))
}

/// Print the analysis of one date, or of every logged date when none is given
pub fn analyze(
    engine: &NutritionEngine,
    profile_path: &Path,
    meals_path: &Path,
    date: Option<NaiveDate>,
) -> AppResult<()> {
    let profile: UserProfile = read_json(profile_path)?;
    let meals: Vec<Meal> = read_json(meals_path)?;

    if let Some(date) = date {
        let analysis = engine.analyze_day(&profile, date, meals_on(meals, date));
        info!(
            %date,
            score = analysis.intake.molecular_balance_score,
            deficiencies = analysis.deficiencies.len(),
            "Analyzed day"
        );
        print_json(&analysis)
    } else {
        let history = engine.analyze_history(&profile, meals);
        info!(days = history.len(), "Analyzed meal history");
        print_json(&history)
    }
}

/// Print recommendations for a day's deficiencies
///
/// A saved provider reply is parsed when given; the static fallback list is
/// used when there is none or it holds no recommendations. The week ending on
/// the chosen day supplies the recent nutrition context.
pub fn recommend(
    engine: &NutritionEngine,
    profile_path: &Path,
    meals_path: &Path,
    date: Option<NaiveDate>,
    response_path: Option<&Path>,
) -> AppResult<()> {
    let profile: UserProfile = read_json(profile_path)?;
    let meals: Vec<Meal> = read_json(meals_path)?;
    let day = select_day(engine, &profile, meals.clone(), date);
    let date = day.intake.date;
    let score = day.intake.molecular_balance_score;
    let span = u64::try_from(TrendPeriod::Week.days().saturating_sub(1)).unwrap_or_default();
    let week_start = date.checked_sub_days(Days::new(span)).unwrap_or(date);
    let mut window: Vec<DailyAnalysis> = engine
        .analyze_history(&profile, meals)
        .into_iter()
        .filter(|earlier| earlier.intake.date >= week_start && earlier.intake.date < date)
        .collect();
    window.push(day);
    let request = NutritionEngine::recommendation_request(&profile, &window);

    let parsed = response_path
        .map(read_text)
        .transpose()?
        .map(|text| parse_recommendations(&text));
    let (source, recommendations) = match parsed {
        Some(set) if !set.is_empty() => ("provider", set),
        Some(_) => {
            warn!("Provider reply held no recommendations, using fallback list");
            ("fallback", fallback_recommendations(&profile, &request.deficiencies))
        }
        None => ("fallback", fallback_recommendations(&profile, &request.deficiencies)),
    };

    print_json(&RecommendationOutput {
        date,
        molecular_balance_score: score,
        deficiencies: &request.deficiencies,
        source,
        recent_nutrition: request.recent_nutrition,
        recommendations,
    })
}

/// The requested date, else the latest logged date, else today with no meals
fn select_day(
    engine: &NutritionEngine,
    profile: &UserProfile,
    meals: Vec<Meal>,
    date: Option<NaiveDate>,
) -> DailyAnalysis {
    if let Some(date) = date {
        return engine.analyze_day(profile, date, meals_on(meals, date));
    }
    engine
        .analyze_history(profile, meals)
        .pop()
        .unwrap_or_else(|| engine.analyze_day(profile, Utc::now().date_naive(), Vec::new()))
}

fn meals_on(meals: Vec<Meal>, date: NaiveDate) -> Vec<Meal> {
    meals
        .into_iter()
        .filter(|meal| meal.logged_at.date_naive() == date)
        .collect()
}
