// ABOUTME: Trend analysis result models for multi-day score and nutrient changes
// ABOUTME: TrendMetric, TrendDirection, Significance, TrendInsight, TrendPeriod, and TrendReport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::constants::nutrients;
use crate::constants::policy::trend_periods;

/// Quantity tracked across days
///
/// Nutrient names are canonicalised on deserialisation as well as through
/// [`TrendMetric::nutrient`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "RawTrendMetric")]
pub enum TrendMetric {
    /// The composite balance score
    MolecularBalanceScore,
    /// One nutrient by canonical name
    Nutrient(String),
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawTrendMetric {
    MolecularBalanceScore,
    Nutrient(String),
}

impl From<RawTrendMetric> for TrendMetric {
    fn from(raw: RawTrendMetric) -> Self {
        match raw {
            RawTrendMetric::MolecularBalanceScore => Self::MolecularBalanceScore,
            RawTrendMetric::Nutrient(name) => Self::nutrient(&name),
        }
    }
}

impl TrendMetric {
    /// Metric for a nutrient, canonicalising the name
    #[must_use]
    pub fn nutrient(name: &str) -> Self {
        Self::Nutrient(nutrients::canonical_name(name))
    }
}

impl FromStr for TrendMetric {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "score" | "balance" | "molecular_balance_score" => Ok(Self::MolecularBalanceScore),
            _ => Ok(Self::nutrient(s)),
        }
    }
}

impl fmt::Display for TrendMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MolecularBalanceScore => f.write_str("Molecular Balance Score"),
            Self::Nutrient(name) => f.write_str(name),
        }
    }
}

/// Direction of change between two windows
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Increased beyond the threshold
    Up,
    /// Decreased beyond the threshold
    Down,
    /// Within the threshold
    Stable,
}

/// How large a change is relative to the metric's tiers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Significance {
    /// Below the medium tier
    Low,
    /// Above the medium tier
    Medium,
    /// Above the high tier
    High,
}

/// Change in one metric between the previous and recent windows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendInsight {
    /// Metric analysed
    pub metric: TrendMetric,
    /// Direction of change
    pub trend: TrendDirection,
    /// `(recent - previous) / previous * 100`, zero without a baseline
    pub percentage_change: f64,
    /// Size of the change
    pub significance: Significance,
    /// Mean over the previous window
    pub previous_mean: f64,
    /// Mean over the recent window
    pub recent_mean: f64,
}

/// Named trend window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrendPeriod {
    /// Seven days
    #[default]
    Week,
    /// Thirty days
    Month,
    /// Ninety days
    Quarter,
    /// A full year
    Year,
}

impl TrendPeriod {
    /// Window length in days
    #[must_use]
    pub const fn days(self) -> usize {
        match self {
            Self::Week => trend_periods::WEEK_DAYS,
            Self::Month => trend_periods::MONTH_DAYS,
            Self::Quarter => trend_periods::QUARTER_DAYS,
            Self::Year => trend_periods::YEAR_DAYS,
        }
    }

    /// Parse a period name, defaulting to a week
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "month" | "30d" => Self::Month,
            "quarter" | "90d" => Self::Quarter,
            "year" | "365d" => Self::Year,
            _ => Self::Week,
        }
    }
}

/// Overall direction of the balance score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OverallTrend {
    /// Recent scores are clearly higher
    Improving,
    /// Recent scores are clearly lower
    Declining,
    /// No clear change
    Stable,
}

/// Full trend summary for a history of days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    /// Per-metric insights in request order
    pub insights: Vec<TrendInsight>,
    /// Overall score direction
    pub overall_trend: OverallTrend,
    /// Consecutive balanced days ending at the latest day
    pub current_streak: usize,
    /// Longest run of consecutive balanced days
    pub best_streak: usize,
    /// Number of days considered
    pub days_analyzed: usize,
}
