// ABOUTME: Integration tests for the molecular-balance binary
// ABOUTME: Runs each subcommand against JSON fixtures in a temp dir and checks the JSON it prints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use anyhow::Result;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Run the binary, returning exit code, stdout, and stderr
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_molecular-balance"))
        .args(args)
        .env("RUST_LOG", "warn")
        .env_remove("INTELLIGENCE_SCORE_NEUTRAL")
        .env_remove("INTELLIGENCE_STATUS_GOOD_RATIO")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    (exit_code, stdout, stderr)
}

fn run_json(args: &[&str]) -> Result<Value> {
    let (code, stdout, stderr) = run_cli(args);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    Ok(serde_json::from_str(&stdout)?)
}

fn write_json(dir: &TempDir, file: &str, value: &Value) -> Result<PathBuf> {
    let path = dir.path().join(file);
    fs::write(&path, serde_json::to_string_pretty(value)?)?;
    Ok(path)
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn profile_json() -> Value {
    json!({
        "id": "user-1",
        "age": 30,
        "sex": "male",
        "weight_kg": 70.0,
        "height_cm": 175.0,
        "lifestyle": "omnivore",
        "activity_level": "moderately_active"
    })
}

fn vegan_profile_json() -> Value {
    let mut profile = profile_json();
    profile["lifestyle"] = json!("vegan");
    profile
}

fn meals_json() -> Value {
    json!([
        {
            "id": "breakfast-15",
            "name": "Oats",
            "meal_type": "breakfast",
            "logged_at": "2025-01-15T08:00:00Z",
            "food_items": [{
                "name": "Oats",
                "quantity": 80.0,
                "unit": "g",
                "macronutrients": [{"name": "protein", "amount": 13.0}],
                "micronutrients": [{"name": "Iron", "amount": 3.0}]
            }]
        },
        {
            "id": "dinner-16",
            "name": "Salmon",
            "meal_type": "dinner",
            "logged_at": "2025-01-16T19:00:00Z",
            "food_items": [{
                "name": "Salmon",
                "macronutrients": [{"name": "Protein", "amount": 40.0}],
                "micronutrients": [{"name": "omega3", "amount": 2000.0}]
            }]
        }
    ])
}

fn history_json() -> Value {
    let days: Vec<Value> = (1..=14)
        .map(|day| {
            let score = if day <= 7 { 40.0 } else { 80.0 };
            json!({
                "date": format!("2025-01-{day:02}"),
                "molecular_balance_score": score,
                "nutrients": {"protein": score}
            })
        })
        .collect();
    Value::Array(days)
}

fn target_amount(targets: &Value, list: &str, name: &str) -> f64 {
    targets[list]
        .as_array()
        .unwrap()
        .iter()
        .find(|target| target["name"] == name)
        .and_then(|target| target["amount"].as_f64())
        .unwrap_or_else(|| panic!("no {name} target in {list}"))
}

#[test]
fn test_help_lists_subcommands() {
    let (code, stdout, _stderr) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    for command in ["targets", "analyze", "recommend", "trends"] {
        assert!(stdout.contains(command), "help is missing {command}");
    }
}

#[test]
fn test_targets_for_reference_profile() -> Result<()> {
    let dir = TempDir::new()?;
    let profile = write_json(&dir, "profile.json", &profile_json())?;

    let targets = run_json(&["targets", "--profile", arg(&profile)])?;
    assert!((target_amount(&targets, "macronutrients", "Calories") - 2628.0).abs() < 1e-9);
    assert!((target_amount(&targets, "macronutrients", "Protein") - 112.0).abs() < 1e-9);
    assert!((target_amount(&targets, "micronutrients", "Iron") - 8.0).abs() < 1e-9);
    assert_eq!(targets["micronutrients"].as_array().unwrap().len(), 11);
    Ok(())
}

#[test]
fn test_analyze_single_date() -> Result<()> {
    let dir = TempDir::new()?;
    let profile = write_json(&dir, "profile.json", &profile_json())?;
    let meals = write_json(&dir, "meals.json", &meals_json())?;

    let analysis = run_json(&[
        "analyze",
        "--profile",
        arg(&profile),
        "--meals",
        arg(&meals),
        "--date",
        "2025-01-15",
    ])?;
    assert_eq!(analysis["intake"]["date"], "2025-01-15");
    assert_eq!(analysis["intake"]["meals"].as_array().unwrap().len(), 1);
    assert_eq!(analysis["statuses"].as_array().unwrap().len(), 16);
    let deficiencies = analysis["deficiencies"].as_array().unwrap();
    assert!(deficiencies.contains(&json!("Protein")));
    assert!(deficiencies.contains(&json!("Iron")));
    Ok(())
}

#[test]
fn test_analyze_every_logged_date() -> Result<()> {
    let dir = TempDir::new()?;
    let profile = write_json(&dir, "profile.json", &profile_json())?;
    let meals = write_json(&dir, "meals.json", &meals_json())?;

    let history = run_json(&["analyze", "--profile", arg(&profile), "--meals", arg(&meals)])?;
    let days = history.as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["intake"]["date"], "2025-01-15");
    assert_eq!(days[1]["intake"]["date"], "2025-01-16");
    Ok(())
}

#[test]
fn test_recommend_uses_fallback_without_reply() -> Result<()> {
    let dir = TempDir::new()?;
    let profile = write_json(&dir, "profile.json", &vegan_profile_json())?;
    let meals = write_json(&dir, "meals.json", &meals_json())?;

    let output = run_json(&[
        "recommend",
        "--profile",
        arg(&profile),
        "--meals",
        arg(&meals),
        "--date",
        "2025-01-15",
    ])?;
    assert_eq!(output["source"], "fallback");
    assert_eq!(output["date"], "2025-01-15");
    let titles: Vec<&str> = output["recommendations"]["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|rec| rec["title"].as_str())
        .collect();
    assert!(titles.contains(&"B12 Supplementation"));
    assert!(titles.contains(&"Iron Absorption Enhancement"));
    Ok(())
}

#[test]
fn test_recommend_parses_saved_reply() -> Result<()> {
    let dir = TempDir::new()?;
    let profile = write_json(&dir, "profile.json", &profile_json())?;
    let meals = write_json(&dir, "meals.json", &meals_json())?;
    let reply = dir.path().join("reply.txt");
    fs::write(
        &reply,
        "Sure!\n```json\n{\"recommendations\": [{\"type\": \"food_suggestion\", \"title\": \"Add lentils\"}]}\n```",
    )?;

    let output = run_json(&[
        "recommend",
        "--profile",
        arg(&profile),
        "--meals",
        arg(&meals),
        "--response",
        arg(&reply),
    ])?;
    assert_eq!(output["source"], "provider");
    // Latest logged date when none is given
    assert_eq!(output["date"], "2025-01-16");
    let recommendations = output["recommendations"]["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0]["title"], "Add lentils");
    // Mean of the 13 g and 40 g protein days
    let protein = target_amount(&output["recent_nutrition"], "macronutrients", "Protein");
    assert!((protein - 26.5).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_trends_over_snapshot_history() -> Result<()> {
    let dir = TempDir::new()?;
    let history = write_json(&dir, "history.json", &history_json())?;

    let report = run_json(&[
        "trends",
        "--history",
        arg(&history),
        "--period",
        "week",
        "--metric",
        "score",
        "--metric",
        "protein",
    ])?;
    assert_eq!(report["days_analyzed"], 14);
    assert_eq!(report["overall_trend"], "improving");
    let insights = report["insights"].as_array().unwrap();
    assert_eq!(insights.len(), 2);
    assert_eq!(insights[0]["metric"], "molecular_balance_score");
    assert_eq!(insights[1]["metric"]["nutrient"], "Protein");
    assert_eq!(insights[1]["trend"], "up");
    assert!((insights[1]["percentage_change"].as_f64().unwrap() - 100.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_trends_default_metrics_cover_catalogue() -> Result<()> {
    let dir = TempDir::new()?;
    let history = write_json(&dir, "history.json", &history_json())?;

    let report = run_json(&["trends", "--history", arg(&history), "--window", "3"])?;
    assert_eq!(report["insights"].as_array().unwrap().len(), 18);
    Ok(())
}

#[test]
fn test_missing_input_file_fails() {
    let (code, stdout, _stderr) = run_cli(&["targets", "--profile", "/nonexistent/profile.json"]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn test_malformed_history_fails() -> Result<()> {
    let dir = TempDir::new()?;
    let history = write_json(&dir, "history.json", &json!({"days": "none"}))?;

    let (code, _stdout, _stderr) = run_cli(&["trends", "--history", arg(&history)]);
    assert_ne!(code, 0);
    Ok(())
}
