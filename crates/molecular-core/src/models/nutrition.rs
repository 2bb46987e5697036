// ABOUTME: Nutrition models for logged meals and their nutrient content
// ABOUTME: NutrientAmount, FoodItem, Meal, MealType, NutrientTotals, and NutrientTarget definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::nutrients;

/// Broad classification of a nutrient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NutrientCategory {
    /// Energy, protein, carbohydrates, fat, fiber
    Macronutrient,
    /// Vitamins
    Vitamin,
    /// Minerals, including trace minerals
    Mineral,
    /// Fatty acids such as omega-3
    FattyAcid,
    /// Amino acids
    AminoAcid,
}

impl NutrientCategory {
    /// Whether this category belongs to the macronutrient list
    #[must_use]
    pub const fn is_macronutrient(self) -> bool {
        matches!(self, Self::Macronutrient)
    }
}

/// Non-negative, finite amount
fn sanitize_amount(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

/// Quantity of a single nutrient
///
/// Names are canonicalised against the nutrient catalogue on construction and
/// on deserialisation, so `"protein"` and `"Protein"` share one join key.
/// Negative or non-finite amounts are stored as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawNutrientAmount")]
pub struct NutrientAmount {
    /// Canonical nutrient name
    pub name: String,
    /// Amount, always finite and `>= 0`
    pub amount: f64,
    /// Measurement unit
    pub unit: String,
    /// Nutrient category
    pub category: NutrientCategory,
}

/// Wire form accepted from callers; unit and category may be omitted
#[derive(Deserialize)]
struct RawNutrientAmount {
    name: String,
    #[serde(default)]
    amount: f64,
    #[serde(default)]
    unit: Option<String>,
    #[serde(default)]
    category: Option<NutrientCategory>,
}

impl From<RawNutrientAmount> for NutrientAmount {
    fn from(raw: RawNutrientAmount) -> Self {
        let category = raw
            .category
            .unwrap_or_else(|| nutrients::default_category(&raw.name));
        match raw.unit {
            Some(unit) if !unit.trim().is_empty() => {
                Self::with_unit(&raw.name, raw.amount, unit.trim(), category)
            }
            _ => {
                let mut amount = Self::new(&raw.name, raw.amount);
                amount.category = category;
                amount
            }
        }
    }
}

impl NutrientAmount {
    /// Build an amount using the catalogue unit and category for `name`
    #[must_use]
    pub fn new(name: &str, amount: f64) -> Self {
        Self {
            name: nutrients::canonical_name(name),
            amount: sanitize_amount(amount),
            unit: nutrients::default_unit(name).to_owned(),
            category: nutrients::default_category(name),
        }
    }

    /// Build an amount with an explicit unit and category
    #[must_use]
    pub fn with_unit(name: &str, amount: f64, unit: &str, category: NutrientCategory) -> Self {
        Self {
            name: nutrients::canonical_name(name),
            amount: sanitize_amount(amount),
            unit: unit.to_owned(),
            category,
        }
    }

    /// Zero amount for a catalogue entry
    #[must_use]
    pub fn zero(known: &nutrients::KnownNutrient) -> Self {
        Self {
            name: known.name.to_owned(),
            amount: 0.0,
            unit: known.unit.to_owned(),
            category: known.category,
        }
    }
}

/// Per-user daily requirement for one nutrient
///
/// Derived from a profile on demand and never stored. An amount of zero means
/// the user has no requirement for that nutrient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientTarget {
    /// Canonical nutrient name
    pub name: String,
    /// Target amount per day, `>= 0`
    pub amount: f64,
    /// Measurement unit
    pub unit: String,
    /// Nutrient category
    pub category: NutrientCategory,
}

impl NutrientTarget {
    /// Target for a catalogue nutrient with its canonical unit and category
    #[must_use]
    pub fn new(name: &str, amount: f64) -> Self {
        Self {
            name: nutrients::canonical_name(name),
            amount: sanitize_amount(amount),
            unit: nutrients::default_unit(name).to_owned(),
            category: nutrients::default_category(name),
        }
    }
}

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    #[default]
    #[serde(other)]
    Other,
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" | "snacks" => Self::Snack,
            _ => Self::Other,
        }
    }
}

/// Individual food item within a meal
///
/// Quantity and unit are descriptive only; the nutrient lists already hold the
/// amounts for the portion eaten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Food name
    pub name: String,
    /// Portion size
    #[serde(default)]
    pub quantity: f64,
    /// Portion unit (g, cup, slice, ...)
    #[serde(default)]
    pub unit: String,
    /// Macronutrients in this portion
    #[serde(default)]
    pub macronutrients: Vec<NutrientAmount>,
    /// Micronutrients in this portion
    #[serde(default)]
    pub micronutrients: Vec<NutrientAmount>,
}

impl FoodItem {
    /// Create a food item with no nutrients yet attached
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            macronutrients: Vec::new(),
            micronutrients: Vec::new(),
        }
    }

    /// Attach a nutrient, routing it by category
    #[must_use]
    pub fn with_nutrient(mut self, name: &str, amount: f64) -> Self {
        let nutrient = NutrientAmount::new(name, amount);
        if nutrient.category.is_macronutrient() {
            self.macronutrients.push(nutrient);
        } else {
            self.micronutrients.push(nutrient);
        }
        self
    }

    /// Every nutrient in this item, macronutrients first
    pub fn nutrients(&self) -> impl Iterator<Item = &NutrientAmount> {
        self.macronutrients.iter().chain(self.micronutrients.iter())
    }
}

/// Ordered macro and micro nutrient totals keyed by canonical name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NutrientTotals {
    /// Macronutrient totals
    #[serde(default)]
    pub macronutrients: Vec<NutrientAmount>,
    /// Micronutrient totals
    #[serde(default)]
    pub micronutrients: Vec<NutrientAmount>,
}

impl NutrientTotals {
    /// Totals containing every catalogue nutrient at zero
    #[must_use]
    pub fn empty() -> Self {
        Self {
            macronutrients: nutrients::MACRONUTRIENTS
                .iter()
                .map(NutrientAmount::zero)
                .collect(),
            micronutrients: nutrients::MICRONUTRIENTS
                .iter()
                .map(NutrientAmount::zero)
                .collect(),
        }
    }

    /// Sum the nutrients of a set of food items
    #[must_use]
    pub fn from_food_items(items: &[FoodItem]) -> Self {
        let mut totals = Self::empty();
        for nutrient in items.iter().flat_map(FoodItem::nutrients) {
            totals.add(nutrient);
        }
        totals
    }

    /// Look up a nutrient by any accepted spelling
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NutrientAmount> {
        let key = nutrients::canonical_name(name);
        self.iter().find(|nutrient| nutrient.name == key)
    }

    /// Amount for a nutrient, zero when absent
    #[must_use]
    pub fn amount(&self, name: &str) -> f64 {
        self.get(name).map_or(0.0, |nutrient| nutrient.amount)
    }

    /// Add one nutrient amount, keyed by canonical name
    ///
    /// The first occurrence of a name fixes its unit; later amounts are summed
    /// without unit conversion.
    pub fn add(&mut self, nutrient: &NutrientAmount) {
        // A name keeps the list it was first filed under, whatever the later category
        if let Some(existing) = self
            .macronutrients
            .iter_mut()
            .chain(self.micronutrients.iter_mut())
            .find(|n| n.name == nutrient.name)
        {
            existing.amount += nutrient.amount;
            return;
        }
        if nutrient.category.is_macronutrient() {
            self.macronutrients.push(nutrient.clone());
        } else {
            self.micronutrients.push(nutrient.clone());
        }
    }

    /// Merge another set of totals into this one
    pub fn merge(&mut self, other: &Self) {
        for nutrient in other.iter() {
            self.add(nutrient);
        }
    }

    /// Every total, macronutrients first
    pub fn iter(&self) -> impl Iterator<Item = &NutrientAmount> {
        self.macronutrients.iter().chain(self.micronutrients.iter())
    }
}

/// A logged meal
///
/// `total_nutrients` is computed when the meal is built and whenever its food
/// items are replaced as a whole. Deserialised meals recompute their totals
/// rather than trusting the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawMeal")]
pub struct Meal {
    /// Unique meal identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Meal slot
    pub meal_type: MealType,
    /// When the meal was logged
    pub logged_at: DateTime<Utc>,
    /// Food items eaten
    pub food_items: Vec<FoodItem>,
    /// Sum of the food items' nutrients
    pub total_nutrients: NutrientTotals,
}

#[derive(Deserialize)]
struct RawMeal {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    meal_type: MealType,
    logged_at: DateTime<Utc>,
    #[serde(default)]
    food_items: Vec<FoodItem>,
}

impl From<RawMeal> for Meal {
    fn from(raw: RawMeal) -> Self {
        let mut meal = Self::new(raw.name, raw.meal_type, raw.logged_at, raw.food_items);
        if let Some(id) = raw.id.filter(|id| !id.is_empty()) {
            meal.id = id;
        }
        meal
    }
}

impl Meal {
    /// Create a meal with a fresh identifier and computed totals
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        meal_type: MealType,
        logged_at: DateTime<Utc>,
        food_items: Vec<FoodItem>,
    ) -> Self {
        let total_nutrients = NutrientTotals::from_food_items(&food_items);
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            meal_type,
            logged_at,
            food_items,
            total_nutrients,
        }
    }

    /// Replace every food item and recompute the totals
    pub fn replace_food_items(&mut self, food_items: Vec<FoodItem>) {
        self.total_nutrients = NutrientTotals::from_food_items(&food_items);
        self.food_items = food_items;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oats() -> FoodItem {
        FoodItem::new("Oats", 80.0, "g")
            .with_nutrient("calories", 300.0)
            .with_nutrient("protein", 10.0)
            .with_nutrient("iron", 3.5)
    }

    #[test]
    fn test_negative_and_nan_amounts_clamp_to_zero() {
        assert!(NutrientAmount::new("Protein", -4.0).amount.abs() < f64::EPSILON);
        assert!(NutrientAmount::new("Protein", f64::NAN).amount.abs() < f64::EPSILON);
        assert!(NutrientAmount::new("Protein", f64::INFINITY).amount.abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_totals_cover_catalogue() {
        let totals = NutrientTotals::empty();
        assert_eq!(totals.macronutrients.len(), nutrients::MACRONUTRIENTS.len());
        assert_eq!(totals.micronutrients.len(), nutrients::MICRONUTRIENTS.len());
        assert!(totals.iter().all(|n| n.amount.abs() < f64::EPSILON));
    }

    #[test]
    fn test_absent_lookup_is_zero() {
        let totals = NutrientTotals::empty();
        assert!(totals.amount("Selenium").abs() < f64::EPSILON);
    }

    #[test]
    fn test_meal_totals_computed_on_construction() {
        let meal = Meal::new("Breakfast", MealType::Breakfast, Utc::now(), vec![oats(), oats()]);
        assert!((meal.total_nutrients.amount("Protein") - 20.0).abs() < 1e-9);
        assert!((meal.total_nutrients.amount("Iron") - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_replace_food_items_recomputes() {
        let mut meal = Meal::new("Lunch", MealType::Lunch, Utc::now(), vec![oats()]);
        meal.replace_food_items(vec![FoodItem::new("Apple", 1.0, "piece").with_nutrient("fiber", 4.0)]);
        assert!(meal.total_nutrients.amount("Protein").abs() < f64::EPSILON);
        assert!((meal.total_nutrients.amount("Fiber") - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_deserialized_meal_ignores_payload_totals() {
        let json = r#"{
            "name": "Dinner",
            "meal_type": "dinner",
            "logged_at": "2025-03-01T19:00:00Z",
            "food_items": [{
                "name": "Salmon",
                "quantity": 150,
                "unit": "g",
                "macronutrients": [{"name": "protein", "amount": 30}],
                "micronutrients": [{"name": "omega 3", "amount": 1800}]
            }],
            "total_nutrients": {"macronutrients": [{"name": "Protein", "amount": 999}]}
        }"#;
        let meal: Meal = serde_json::from_str(json).unwrap();
        assert!((meal.total_nutrients.amount("Protein") - 30.0).abs() < 1e-9);
        assert!((meal.total_nutrients.amount("Omega-3") - 1800.0).abs() < 1e-9);
        assert!(!meal.id.is_empty());
    }

    #[test]
    fn test_unknown_meal_type_is_other() {
        assert_eq!(MealType::from_str_lossy("Brunch"), MealType::Other);
        let parsed: MealType = serde_json::from_str("\"brunch\"").unwrap();
        assert_eq!(parsed, MealType::Other);
    }

    #[test]
    fn test_unknown_nutrient_keeps_first_unit() {
        let mut totals = NutrientTotals::empty();
        totals.add(&NutrientAmount::with_unit("Selenium", 20.0, "mcg", NutrientCategory::Mineral));
        totals.add(&NutrientAmount::with_unit("Selenium ", 5.0, "mg", NutrientCategory::Mineral));
        let selenium = totals.get("Selenium").unwrap();
        assert_eq!(selenium.unit, "mcg");
        assert!((selenium.amount - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_recategorised_nutrient_merges_into_existing_total() {
        let mut totals = NutrientTotals::empty();
        totals.add(&NutrientAmount::with_unit(
            "Fiber",
            6.0,
            "g",
            NutrientCategory::Mineral,
        ));
        let fiber: Vec<_> = totals.iter().filter(|n| n.name == "Fiber").collect();
        assert_eq!(fiber.len(), 1);
        assert!((fiber[0].amount - 6.0).abs() < 1e-9);
        assert!(totals.micronutrients.iter().all(|n| n.name != "Fiber"));
    }
}
