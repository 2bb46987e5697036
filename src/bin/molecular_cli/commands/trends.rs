// ABOUTME: Trend report command for the molecular-balance CLI
// ABOUTME: Accepts daily intakes or snapshots and reports window-over-window changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use molecular_balance::engine::NutritionEngine;
use molecular_balance::errors::{AppError, AppResult};
use molecular_balance::models::{DailyIntake, DailySnapshot, TrendMetric, TrendPeriod};
use serde_json::Value;
use std::path::Path;
use tracing::info;

use crate::helpers::io::{print_json, read_json};

/// Print a trend report over a saved history
pub fn report(
    engine: &NutritionEngine,
    history_path: &Path,
    period: Option<&str>,
    window: Option<usize>,
    metrics: Vec<TrendMetric>,
) -> AppResult<()> {
    let history = load_history(history_path)?;
    let window = window.or_else(|| period.map(|p| TrendPeriod::from_str_lossy(p).days()));
    let metrics = if metrics.is_empty() {
        NutritionEngine::default_trend_metrics()
    } else {
        metrics
    };

    let report = engine.trend_report(&history, window, &metrics);
    info!(
        days = report.days_analyzed,
        overall = ?report.overall_trend,
        "Computed trend report"
    );
    print_json(&report)
}

/// History as full daily intakes or as bare snapshots
fn load_history(path: &Path) -> AppResult<Vec<DailySnapshot>> {
    let raw: Value = read_json(path)?;
    if let Ok(intakes) = serde_json::from_value::<Vec<DailyIntake>>(raw.clone()) {
        return Ok(intakes.iter().map(NutritionEngine::snapshot).collect());
    }
    serde_json::from_value(raw).map_err(|e| {
        AppError::invalid_input(format!(
            "{} holds neither daily intakes nor daily snapshots: {e}",
            path.display()
        ))
        .with_source(e)
    })
}
