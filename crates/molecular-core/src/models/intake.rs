// ABOUTME: Daily intake model grouping one calendar day of meals with its totals and score
// ABOUTME: DailyIntake and the DailySnapshot summary consumed by trend analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Meal, NutrientTotals, TrendMetric};
use crate::constants::nutrients;

/// All meals logged on one calendar date
///
/// Totals and score are rebuilt from the full meal set whenever it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyIntake {
    /// Calendar date
    pub date: NaiveDate,
    /// Meals logged that day
    pub meals: Vec<Meal>,
    /// Aggregated nutrients for every meal
    pub total_nutrients: NutrientTotals,
    /// Composite 0-100 balance score
    pub molecular_balance_score: u8,
}

/// Compact per-day summary used as trend input
///
/// Nutrient keys are canonicalised on deserialisation; spellings that map to
/// the same nutrient are summed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawDailySnapshot")]
pub struct DailySnapshot {
    /// Calendar date
    pub date: NaiveDate,
    /// Composite 0-100 balance score
    pub molecular_balance_score: f64,
    /// Nutrient amounts by canonical name
    #[serde(default)]
    pub nutrients: BTreeMap<String, f64>,
}

#[derive(Deserialize)]
struct RawDailySnapshot {
    date: NaiveDate,
    molecular_balance_score: f64,
    #[serde(default)]
    nutrients: BTreeMap<String, f64>,
}

impl From<RawDailySnapshot> for DailySnapshot {
    fn from(raw: RawDailySnapshot) -> Self {
        let mut merged = BTreeMap::new();
        for (name, amount) in raw.nutrients {
            *merged.entry(nutrients::canonical_name(&name)).or_insert(0.0) += amount;
        }
        Self {
            date: raw.date,
            molecular_balance_score: raw.molecular_balance_score,
            nutrients: merged,
        }
    }
}

impl DailySnapshot {
    /// Value of a trend metric on this day, zero for absent nutrients
    #[must_use]
    pub fn value(&self, metric: &TrendMetric) -> f64 {
        match metric {
            TrendMetric::MolecularBalanceScore => self.molecular_balance_score,
            TrendMetric::Nutrient(name) => self
                .nutrients
                .get(&nutrients::canonical_name(name))
                .copied()
                .unwrap_or(0.0),
        }
    }
}

impl From<&DailyIntake> for DailySnapshot {
    fn from(intake: &DailyIntake) -> Self {
        Self {
            date: intake.date,
            molecular_balance_score: f64::from(intake.molecular_balance_score),
            nutrients: intake
                .total_nutrients
                .iter()
                .map(|nutrient| (nutrient.name.clone(), nutrient.amount))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_keys_are_canonicalised() {
        let json = r#"{
            "date": "2025-02-01",
            "molecular_balance_score": 70,
            "nutrients": {"protein": 60, "Protein": 15, "ascorbic acid": 80}
        }"#;
        let snapshot: DailySnapshot = serde_json::from_str(json).unwrap();
        assert!((snapshot.value(&TrendMetric::nutrient("Protein")) - 75.0).abs() < 1e-9);
        assert!((snapshot.value(&TrendMetric::nutrient("Vitamin C")) - 80.0).abs() < 1e-9);
        assert!(!snapshot.nutrients.contains_key("protein"));
    }

    #[test]
    fn test_value_accepts_non_canonical_metric() {
        let snapshot = DailySnapshot {
            date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            molecular_balance_score: 50.0,
            nutrients: BTreeMap::from([("Iron".to_owned(), 9.0)]),
        };
        let metric = TrendMetric::Nutrient("iron".to_owned());
        assert!((snapshot.value(&metric) - 9.0).abs() < 1e-9);
    }
}
