// ABOUTME: Named policy constants for status bands, balance score weights, and trend thresholds
// ABOUTME: Single canonical table of tunable cut points consumed by the intelligence config defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring policy constants
//!
//! These are tunable defaults, not load-bearing invariants. Every value is
//! surfaced through `molecular_intelligence::config` so deployments can
//! override it.

/// Intake-to-target ratio bands (lower bounds, higher is better)
pub mod status_bands {
    /// Ratio at or above which a nutrient is excellent
    pub const EXCELLENT_MIN_RATIO: f64 = 1.0;
    /// Ratio at or above which a nutrient is good
    pub const GOOD_MIN_RATIO: f64 = 0.8;
    /// Ratio at or above which a nutrient is a warning
    pub const WARNING_MIN_RATIO: f64 = 0.6;
    /// Ratio at or above which a nutrient is poor (below is critical)
    pub const POOR_MIN_RATIO: f64 = 0.4;
}

/// Deviation tiers for nutrients that should land near their target
pub mod target_range {
    /// Maximum fractional deviation for excellent (within 10 %)
    pub const EXCELLENT_MAX_DEVIATION: f64 = 0.10;
    /// Maximum fractional deviation for good
    pub const GOOD_MAX_DEVIATION: f64 = 0.20;
    /// Maximum fractional deviation for warning
    pub const WARNING_MAX_DEVIATION: f64 = 0.30;
    /// Maximum fractional deviation for poor (beyond is critical)
    pub const POOR_MAX_DEVIATION: f64 = 0.40;
}

/// Numeric weight of each status in the balance score
pub mod status_weights {
    /// Excellent status weight
    pub const EXCELLENT: f64 = 100.0;
    /// Good status weight
    pub const GOOD: f64 = 80.0;
    /// Warning status weight
    pub const WARNING: f64 = 60.0;
    /// Poor status weight
    pub const POOR: f64 = 40.0;
    /// Critical status weight
    pub const CRITICAL: f64 = 20.0;
}

/// Per-nutrient importance coefficients for the balance score
pub mod importance {
    /// Macronutrients dominate the composite score
    pub const MACRONUTRIENT: f64 = 2.0;
    /// Standard vitamins, minerals, and fatty acids
    pub const MICRONUTRIENT: f64 = 1.0;
    /// Trace minerals such as chromium
    pub const TRACE_MICRONUTRIENT: f64 = 0.5;
}

/// Balance score bounds and fallbacks
pub mod balance_score {
    /// Lowest possible score
    pub const MIN: u8 = 0;
    /// Highest possible score
    pub const MAX: u8 = 100;
    /// Score returned when nothing could be evaluated
    pub const NEUTRAL: u8 = 50;
    /// Daily score counted towards a "balanced day" streak
    pub const STREAK_THRESHOLD: f64 = 80.0;
}

/// Percentage-change thresholds for trend direction and significance
pub mod trend_thresholds {
    /// Score change (%) beyond which the score is trending
    pub const SCORE_TREND_PERCENT: f64 = 2.0;
    /// Score change (%) for medium significance
    pub const SCORE_MEDIUM_PERCENT: f64 = 5.0;
    /// Score change (%) for high significance
    pub const SCORE_HIGH_PERCENT: f64 = 10.0;
    /// Nutrient change (%) beyond which a nutrient is trending
    pub const NUTRIENT_TREND_PERCENT: f64 = 5.0;
    /// Nutrient change (%) for medium significance
    pub const NUTRIENT_MEDIUM_PERCENT: f64 = 8.0;
    /// Nutrient change (%) for high significance
    pub const NUTRIENT_HIGH_PERCENT: f64 = 15.0;
    /// Absolute score-point difference for an improving/declining overall trend
    pub const OVERALL_SCORE_POINTS: f64 = 5.0;
}

/// Named trend periods in days
pub mod trend_periods {
    /// One week
    pub const WEEK_DAYS: usize = 7;
    /// One month
    pub const MONTH_DAYS: usize = 30;
    /// One quarter
    pub const QUARTER_DAYS: usize = 90;
    /// One year
    pub const YEAR_DAYS: usize = 365;
}
