// ABOUTME: Trend analysis configuration
// ABOUTME: Direction and significance thresholds for the score and nutrients, streak and overall-trend cut points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use molecular_core::constants::policy::{balance_score, trend_periods, trend_thresholds};
use serde::{Deserialize, Serialize};

/// Percentage-change thresholds for one metric family
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendThresholds {
    /// Change beyond which the metric is trending up or down
    pub trend_percent: f64,
    /// Change beyond which significance is medium
    pub medium_percent: f64,
    /// Change beyond which significance is high
    pub high_percent: f64,
}

/// Trend analysis configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Thresholds for the balance score
    pub score: TrendThresholds,
    /// Thresholds for nutrient amounts
    pub nutrient: TrendThresholds,
    /// Score-point difference for an improving or declining overall trend
    pub overall_score_points: f64,
    /// Daily score counted towards a streak
    pub streak_threshold: f64,
    /// Window used when the caller does not pick one
    pub default_window_days: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            score: TrendThresholds {
                trend_percent: trend_thresholds::SCORE_TREND_PERCENT,
                medium_percent: trend_thresholds::SCORE_MEDIUM_PERCENT,
                high_percent: trend_thresholds::SCORE_HIGH_PERCENT,
            },
            nutrient: TrendThresholds {
                trend_percent: trend_thresholds::NUTRIENT_TREND_PERCENT,
                medium_percent: trend_thresholds::NUTRIENT_MEDIUM_PERCENT,
                high_percent: trend_thresholds::NUTRIENT_HIGH_PERCENT,
            },
            overall_score_points: trend_thresholds::OVERALL_SCORE_POINTS,
            streak_threshold: balance_score::STREAK_THRESHOLD,
            default_window_days: trend_periods::WEEK_DAYS,
        }
    }
}
