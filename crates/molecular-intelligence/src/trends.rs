// ABOUTME: Multi-day trend analysis over daily snapshots
// ABOUTME: Recent-vs-previous window means, direction, significance, overall score trend, and streaks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Trend Analyzer
//!
//! Snapshots are sorted by date (stable) before analysis. With `n` days and
//! window `k`, the recent window is the last `min(k, n)` days and the previous
//! window is up to `k` days immediately before it. A metric without a usable
//! baseline (empty previous window or a zero previous mean) reports a zero
//! change and a stable trend.

use molecular_core::models::{
    DailySnapshot, OverallTrend, Significance, TrendDirection, TrendInsight, TrendMetric,
    TrendReport,
};
use tracing::debug;

use crate::config::intelligence::{TrendConfig, TrendThresholds};

/// Computes trend insights across a history of days
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendAnalyzer {
    config: TrendConfig,
}

/// Recent and previous windows over a date-sorted history
struct Windows<'a> {
    previous: &'a [DailySnapshot],
    recent: &'a [DailySnapshot],
}

impl<'a> Windows<'a> {
    fn split(sorted: &'a [DailySnapshot], window: usize) -> Self {
        let window = window.max(1);
        let n = sorted.len();
        let recent_start = n.saturating_sub(window);
        let previous_start = recent_start.saturating_sub(window);
        Self {
            previous: &sorted[previous_start..recent_start],
            recent: &sorted[recent_start..],
        }
    }
}

fn mean(days: &[DailySnapshot], metric: &TrendMetric) -> f64 {
    if days.is_empty() {
        return 0.0;
    }
    days.iter().map(|day| day.value(metric)).sum::<f64>() / days.len() as f64
}

impl TrendAnalyzer {
    /// Create an analyzer with the given thresholds
    #[must_use]
    pub const fn new(config: TrendConfig) -> Self {
        Self { config }
    }

    /// Window used when the caller does not choose one
    #[must_use]
    pub const fn default_window(&self) -> usize {
        self.config.default_window_days
    }

    /// Thresholds applied to a metric
    #[must_use]
    pub const fn thresholds_for(&self, metric: &TrendMetric) -> TrendThresholds {
        match metric {
            TrendMetric::MolecularBalanceScore => self.config.score,
            TrendMetric::Nutrient(_) => self.config.nutrient,
        }
    }

    /// One insight per metric, in caller order
    #[must_use]
    pub fn analyze(
        &self,
        snapshots: &[DailySnapshot],
        window: usize,
        metrics: &[TrendMetric],
    ) -> Vec<TrendInsight> {
        let sorted = sort_by_date(snapshots);
        let windows = Windows::split(&sorted, window);
        metrics
            .iter()
            .map(|metric| self.insight(&windows, metric))
            .collect()
    }

    /// Insights plus overall score direction and balanced-day streaks
    #[must_use]
    pub fn report(
        &self,
        snapshots: &[DailySnapshot],
        window: usize,
        metrics: &[TrendMetric],
    ) -> TrendReport {
        let sorted = sort_by_date(snapshots);
        let windows = Windows::split(&sorted, window);
        let insights = metrics
            .iter()
            .map(|metric| self.insight(&windows, metric))
            .collect();
        let (current_streak, best_streak) = self.streaks(&sorted);
        let overall_trend = self.overall_trend(&windows);
        debug!(
            days = sorted.len(),
            window,
            ?overall_trend,
            current_streak,
            best_streak,
            "Computed trend report"
        );
        TrendReport {
            insights,
            overall_trend,
            current_streak,
            best_streak,
            days_analyzed: sorted.len(),
        }
    }

    fn insight(&self, windows: &Windows<'_>, metric: &TrendMetric) -> TrendInsight {
        let recent_mean = mean(windows.recent, metric);
        let previous_mean = mean(windows.previous, metric);
        let percentage_change = if windows.previous.is_empty() || previous_mean == 0.0 {
            0.0
        } else {
            (recent_mean - previous_mean) / previous_mean * 100.0
        };

        let thresholds = self.thresholds_for(metric);
        let trend = if percentage_change > thresholds.trend_percent {
            TrendDirection::Up
        } else if percentage_change < -thresholds.trend_percent {
            TrendDirection::Down
        } else {
            TrendDirection::Stable
        };
        let magnitude = percentage_change.abs();
        let significance = if magnitude > thresholds.high_percent {
            Significance::High
        } else if magnitude > thresholds.medium_percent {
            Significance::Medium
        } else {
            Significance::Low
        };

        TrendInsight {
            metric: metric.clone(),
            trend,
            percentage_change,
            significance,
            previous_mean,
            recent_mean,
        }
    }

    fn overall_trend(&self, windows: &Windows<'_>) -> OverallTrend {
        if windows.previous.is_empty() {
            return OverallTrend::Stable;
        }
        let metric = TrendMetric::MolecularBalanceScore;
        let difference = mean(windows.recent, &metric) - mean(windows.previous, &metric);
        if difference > self.config.overall_score_points {
            OverallTrend::Improving
        } else if difference < -self.config.overall_score_points {
            OverallTrend::Declining
        } else {
            OverallTrend::Stable
        }
    }

    /// Current (ending at the latest day) and best runs of balanced days
    fn streaks(&self, sorted: &[DailySnapshot]) -> (usize, usize) {
        let mut run = 0;
        let mut best = 0;
        for day in sorted {
            if day.molecular_balance_score >= self.config.streak_threshold {
                run += 1;
                best = best.max(run);
            } else {
                run = 0;
            }
        }
        (run, best)
    }
}

fn sort_by_date(snapshots: &[DailySnapshot]) -> Vec<DailySnapshot> {
    let mut sorted = snapshots.to_vec();
    sorted.sort_by_key(|day| day.date);
    sorted
}
