// ABOUTME: Catalogue of nutrients known to the engine with canonical names, units, and categories
// ABOUTME: Provides case-insensitive name canonicalisation used as the aggregation join key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::NutrientCategory;

/// Energy intake
pub const CALORIES: &str = "Calories";
/// Protein
pub const PROTEIN: &str = "Protein";
/// Carbohydrates
pub const CARBOHYDRATES: &str = "Carbohydrates";
/// Total fat
pub const FAT: &str = "Fat";
/// Dietary fiber
pub const FIBER: &str = "Fiber";
/// Iron
pub const IRON: &str = "Iron";
/// Calcium
pub const CALCIUM: &str = "Calcium";
/// Vitamin C (ascorbic acid)
pub const VITAMIN_C: &str = "Vitamin C";
/// Vitamin D
pub const VITAMIN_D: &str = "Vitamin D";
/// Vitamin B12 (cobalamin)
pub const VITAMIN_B12: &str = "Vitamin B12";
/// Zinc
pub const ZINC: &str = "Zinc";
/// Magnesium
pub const MAGNESIUM: &str = "Magnesium";
/// Folate
pub const FOLATE: &str = "Folate";
/// Vitamin A (retinol activity equivalents)
pub const VITAMIN_A: &str = "Vitamin A";
/// Vitamin E
pub const VITAMIN_E: &str = "Vitamin E";
/// Omega-3 fatty acids
pub const OMEGA_3: &str = "Omega-3";
/// Chromium
pub const CHROMIUM: &str = "Chromium";

/// Unit assumed for a nutrient name missing from the catalogue
pub const FALLBACK_UNIT: &str = "g";

/// A nutrient the engine knows how to name, measure, and categorise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownNutrient {
    /// Canonical display name
    pub name: &'static str,
    /// Canonical unit
    pub unit: &'static str,
    /// Nutrient category
    pub category: NutrientCategory,
}

const fn known(
    name: &'static str,
    unit: &'static str,
    category: NutrientCategory,
) -> KnownNutrient {
    KnownNutrient {
        name,
        unit,
        category,
    }
}

/// Macronutrients in canonical display order
pub static MACRONUTRIENTS: [KnownNutrient; 5] = [
    known(CALORIES, "kcal", NutrientCategory::Macronutrient),
    known(PROTEIN, "g", NutrientCategory::Macronutrient),
    known(CARBOHYDRATES, "g", NutrientCategory::Macronutrient),
    known(FAT, "g", NutrientCategory::Macronutrient),
    known(FIBER, "g", NutrientCategory::Macronutrient),
];

/// Micronutrients in canonical display order
pub static MICRONUTRIENTS: [KnownNutrient; 12] = [
    known(IRON, "mg", NutrientCategory::Mineral),
    known(CALCIUM, "mg", NutrientCategory::Mineral),
    known(VITAMIN_C, "mg", NutrientCategory::Vitamin),
    known(VITAMIN_D, "IU", NutrientCategory::Vitamin),
    known(VITAMIN_B12, "mcg", NutrientCategory::Vitamin),
    known(ZINC, "mg", NutrientCategory::Mineral),
    known(MAGNESIUM, "mg", NutrientCategory::Mineral),
    known(FOLATE, "mcg", NutrientCategory::Vitamin),
    known(VITAMIN_A, "mcg", NutrientCategory::Vitamin),
    known(VITAMIN_E, "mg", NutrientCategory::Vitamin),
    known(OMEGA_3, "mg", NutrientCategory::FattyAcid),
    known(CHROMIUM, "mcg", NutrientCategory::Mineral),
];

/// Micronutrients needed in trace quantities (lower scoring importance)
pub const TRACE_MICRONUTRIENTS: [&str; 1] = [CHROMIUM];

/// Alternate spellings accepted from food databases and AI payloads
static ALIASES: [(&str, &str); 16] = [
    ("energy", CALORIES),
    ("kcal", CALORIES),
    ("carbs", CARBOHYDRATES),
    ("carbohydrate", CARBOHYDRATES),
    ("fats", FAT),
    ("total fat", FAT),
    ("fibre", FIBER),
    ("dietary fiber", FIBER),
    ("b12", VITAMIN_B12),
    ("vitamin b-12", VITAMIN_B12),
    ("cobalamin", VITAMIN_B12),
    ("ascorbic acid", VITAMIN_C),
    ("folic acid", FOLATE),
    ("omega 3", OMEGA_3),
    ("omega3", OMEGA_3),
    ("omega-3 fatty acids", OMEGA_3),
];

/// Iterate every catalogue entry, macronutrients first
pub fn all() -> impl Iterator<Item = &'static KnownNutrient> {
    MACRONUTRIENTS.iter().chain(MICRONUTRIENTS.iter())
}

/// Find a catalogue entry by name, ignoring case and surrounding whitespace
#[must_use]
pub fn lookup(name: &str) -> Option<&'static KnownNutrient> {
    let needle = name.trim().to_lowercase();
    if let Some(entry) = all().find(|entry| entry.name.to_lowercase() == needle) {
        return Some(entry);
    }
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == needle)
        .and_then(|(_, canonical)| all().find(|entry| entry.name == *canonical))
}

/// Canonical join key for a nutrient name
///
/// Known nutrients map to their catalogue spelling; anything else is kept
/// verbatim apart from trimming.
#[must_use]
pub fn canonical_name(name: &str) -> String {
    lookup(name).map_or_else(|| name.trim().to_owned(), |entry| entry.name.to_owned())
}

/// Canonical unit for a nutrient, falling back to grams
#[must_use]
pub fn default_unit(name: &str) -> &'static str {
    lookup(name).map_or(FALLBACK_UNIT, |entry| entry.unit)
}

/// Category for a nutrient, falling back to mineral for unknown micronutrients
#[must_use]
pub fn default_category(name: &str) -> NutrientCategory {
    lookup(name).map_or(NutrientCategory::Mineral, |entry| entry.category)
}

/// Whether a nutrient is only required in trace amounts
#[must_use]
pub fn is_trace(name: &str) -> bool {
    let canonical = canonical_name(name);
    TRACE_MICRONUTRIENTS.contains(&canonical.as_str())
}
