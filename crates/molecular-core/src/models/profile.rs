// ABOUTME: User profile model driving per-user nutrient target resolution
// ABOUTME: UserProfile, Sex, Lifestyle, HealthGoal, MedicalCondition, and ActivityLevel definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Age used when a profile carries no usable age
pub const DEFAULT_AGE_YEARS: u32 = 30;
/// Weight used when a profile carries no usable weight
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
/// Height used when a profile carries no usable height
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;

const AGE_RANGE: (u32, u32) = (1, 120);
const WEIGHT_RANGE_KG: (f64, f64) = (20.0, 300.0);
const HEIGHT_RANGE_CM: (f64, f64) = (100.0, 250.0);

/// Biological sex used by the energy equations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male equations and reference intakes
    Male,
    /// Female equations and reference intakes
    Female,
    /// Averaged equations, higher of the two reference intakes
    #[default]
    #[serde(other)]
    Other,
}

/// Dietary pattern
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Lifestyle {
    /// No dietary restriction
    Omnivore,
    /// No animal products
    Vegan,
    /// No meat or fish
    Vegetarian,
    /// Fish but no meat
    Pescatarian,
    /// Very low carbohydrate
    Keto,
    /// Paleolithic-style diet
    Paleo,
    /// Unrecognised lifestyle, treated as neutral
    #[default]
    #[serde(other)]
    Unknown,
}

impl Lifestyle {
    /// Whether the diet excludes meat
    #[must_use]
    pub const fn is_plant_based(self) -> bool {
        matches!(self, Self::Vegan | Self::Vegetarian)
    }

    /// Stable snake_case label, used in cache keys
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Omnivore => "omnivore",
            Self::Vegan => "vegan",
            Self::Vegetarian => "vegetarian",
            Self::Pescatarian => "pescatarian",
            Self::Keto => "keto",
            Self::Paleo => "paleo",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Lifestyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Health goal selected by the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HealthGoal {
    /// Build lean mass
    MuscleGain,
    /// Reduce body weight
    WeightLoss,
    /// More daytime energy
    EnergyBoost,
    /// Long-term healthspan
    Longevity,
    /// Reduce chronic disease risk
    DiseasePrevention,
    /// Sports performance
    AthleticPerformance,
    /// Cognitive focus
    MentalClarity,
    /// Immune resilience
    ImmuneSupport,
    /// Unrecognised goal, ignored
    #[serde(other)]
    Unknown,
}

/// Medical condition that changes nutrient targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MedicalCondition {
    /// Diabetes (adds a chromium target)
    Diabetes,
    /// Cardiovascular disease (raises the omega-3 target)
    Cardiovascular,
    /// Unrecognised condition, ignored
    #[serde(other)]
    Unknown,
}

/// Activity level for energy expenditure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    #[default]
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extra active (hard training 2x/day)
    ExtraActive,
}

impl ActivityLevel {
    /// Parse activity level from string, defaulting to moderately active
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Self::Sedentary,
            "lightly_active" | "light" => Self::LightlyActive,
            "very_active" | "very" => Self::VeryActive,
            "extra_active" | "extra" => Self::ExtraActive,
            _ => Self::ModeratelyActive,
        }
    }
}

/// Attributes of a user that drive target resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier
    pub id: String,
    /// Age in years
    #[serde(default = "default_age")]
    pub age: u32,
    /// Biological sex
    #[serde(default)]
    pub sex: Sex,
    /// Body weight in kilograms
    #[serde(default = "default_weight")]
    pub weight_kg: f64,
    /// Height in centimeters
    #[serde(default = "default_height")]
    pub height_cm: f64,
    /// Dietary pattern
    #[serde(default)]
    pub lifestyle: Lifestyle,
    /// Selected health goals
    #[serde(default)]
    pub health_goals: Vec<HealthGoal>,
    /// Known medical conditions
    #[serde(default)]
    pub medical_history: Vec<MedicalCondition>,
    /// Typical activity level
    #[serde(default)]
    pub activity_level: ActivityLevel,
}

const fn default_age() -> u32 {
    DEFAULT_AGE_YEARS
}

const fn default_weight() -> f64 {
    DEFAULT_WEIGHT_KG
}

const fn default_height() -> f64 {
    DEFAULT_HEIGHT_CM
}

fn sanitize_measure(value: f64, fallback: f64, (low, high): (f64, f64)) -> f64 {
    if value.is_finite() && value > 0.0 {
        value.clamp(low, high)
    } else {
        fallback
    }
}

impl UserProfile {
    /// Create a profile with default body measurements and no goals
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            age: DEFAULT_AGE_YEARS,
            sex: Sex::default(),
            weight_kg: DEFAULT_WEIGHT_KG,
            height_cm: DEFAULT_HEIGHT_CM,
            lifestyle: Lifestyle::default(),
            health_goals: Vec::new(),
            medical_history: Vec::new(),
            activity_level: ActivityLevel::default(),
        }
    }

    /// Copy of this profile with measurements forced into plausible ranges
    ///
    /// Zero, negative, or non-finite measurements are replaced by defaults;
    /// everything else is clamped.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let age = if self.age == 0 {
            DEFAULT_AGE_YEARS
        } else {
            self.age.clamp(AGE_RANGE.0, AGE_RANGE.1)
        };
        Self {
            age,
            weight_kg: sanitize_measure(self.weight_kg, DEFAULT_WEIGHT_KG, WEIGHT_RANGE_KG),
            height_cm: sanitize_measure(self.height_cm, DEFAULT_HEIGHT_CM, HEIGHT_RANGE_CM),
            ..self.clone()
        }
    }

    /// Whether the profile lists a goal
    #[must_use]
    pub fn has_goal(&self, goal: HealthGoal) -> bool {
        self.health_goals.contains(&goal)
    }

    /// Whether the profile lists a medical condition
    #[must_use]
    pub fn has_condition(&self, condition: MedicalCondition) -> bool {
        self.medical_history.contains(&condition)
    }

    /// Body mass index from weight and height
    #[must_use]
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        if height_m > 0.0 {
            self.weight_kg / (height_m * height_m)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_enum_strings_deserialize() {
        let json = r#"{
            "id": "u1",
            "sex": "prefer_not_to_say",
            "lifestyle": "carnivore",
            "health_goals": ["muscle_gain", "better_sleep"],
            "medical_history": ["asthma"]
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.sex, Sex::Other);
        assert_eq!(profile.lifestyle, Lifestyle::Unknown);
        assert_eq!(
            profile.health_goals,
            vec![HealthGoal::MuscleGain, HealthGoal::Unknown]
        );
        assert_eq!(profile.medical_history, vec![MedicalCondition::Unknown]);
        assert_eq!(profile.activity_level, ActivityLevel::ModeratelyActive);
    }

    #[test]
    fn test_sanitized_clamps_and_defaults() {
        let mut profile = UserProfile::new("u2");
        profile.age = 0;
        profile.weight_kg = f64::NAN;
        profile.height_cm = 400.0;
        let clean = profile.sanitized();
        assert_eq!(clean.age, DEFAULT_AGE_YEARS);
        assert!((clean.weight_kg - DEFAULT_WEIGHT_KG).abs() < f64::EPSILON);
        assert!((clean.height_cm - 250.0).abs() < f64::EPSILON);

        profile.age = 150;
        profile.weight_kg = 5.0;
        let clean = profile.sanitized();
        assert_eq!(clean.age, 120);
        assert!((clean.weight_kg - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmi() {
        let mut profile = UserProfile::new("u3");
        profile.weight_kg = 81.0;
        profile.height_cm = 180.0;
        assert!((profile.bmi() - 25.0).abs() < 1e-9);
    }
}
