// ABOUTME: Nutrient aggregation from logged meals into daily totals
// ABOUTME: Sums food-item nutrients by canonical name and averages totals across days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use molecular_core::models::{Meal, NutrientAmount, NutrientTotals};
use tracing::trace;

/// Sums meal nutrients into one set of totals
///
/// The canonical nutrient name is the join key. Units are not converted; the
/// first occurrence of a name decides its unit. Aggregation is additive, so
/// aggregating two partitions of a meal list and merging the results gives
/// the same totals as aggregating the whole list.
#[derive(Debug, Clone, Copy, Default)]
pub struct NutrientAggregator;

impl NutrientAggregator {
    /// Sum every nutrient of every food item across all meals
    ///
    /// Food items are read directly so a stale `total_nutrients` on a meal
    /// cannot leak into the result.
    #[must_use]
    pub fn aggregate(meals: &[Meal]) -> NutrientTotals {
        let mut totals = NutrientTotals::empty();
        for nutrient in meals
            .iter()
            .flat_map(|meal| meal.food_items.iter())
            .flat_map(|item| item.nutrients())
        {
            totals.add(nutrient);
        }
        trace!(meal_count = meals.len(), "Aggregated meal nutrients");
        totals
    }

    /// Per-nutrient mean across several daily totals
    ///
    /// A nutrient missing from some days counts as zero on those days.
    #[must_use]
    pub fn average(days: &[NutrientTotals]) -> NutrientTotals {
        if days.is_empty() {
            return NutrientTotals::empty();
        }

        let mut sum = NutrientTotals::empty();
        for day in days {
            sum.merge(day);
        }

        let count = days.len() as f64;
        let scale = |list: Vec<NutrientAmount>| -> Vec<NutrientAmount> {
            list.into_iter()
                .map(|mut nutrient| {
                    nutrient.amount /= count;
                    nutrient
                })
                .collect()
        };
        NutrientTotals {
            macronutrients: scale(sum.macronutrients),
            micronutrients: scale(sum.micronutrients),
        }
    }
}
