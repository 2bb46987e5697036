// ABOUTME: Per-user nutrient target resolution from profile attributes
// ABOUTME: Harris-Benedict energy, goal-aware macro split, and lifestyle/goal/medical micronutrient adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Target Resolver
//!
//! Resolution is pure and total: the profile is sanitised first, so any
//! profile yields a full, non-negative target list.
//!
//! # Scientific References
//!
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//!   <https://doi.org/10.1093/ajcn/40.1.168>

use molecular_core::constants::nutrients;
use molecular_core::models::{
    ActivityLevel, HealthGoal, Lifestyle, MedicalCondition, NutrientTarget, Sex, UserProfile,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::intelligence::{HarrisBenedictCoefficients, TargetConfig};

/// kcal per gram of protein or carbohydrate
const KCAL_PER_GRAM_PROTEIN_CARB: f64 = 4.0;
/// kcal per gram of fat
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Ordered daily targets for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NutrientTargets {
    /// Macronutrient targets in catalogue order
    pub macronutrients: Vec<NutrientTarget>,
    /// Micronutrient targets in catalogue order
    pub micronutrients: Vec<NutrientTarget>,
}

impl NutrientTargets {
    /// Every target, macronutrients first
    pub fn iter(&self) -> impl Iterator<Item = &NutrientTarget> {
        self.macronutrients.iter().chain(self.micronutrients.iter())
    }

    /// Target for a nutrient by any accepted spelling
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NutrientTarget> {
        let key = nutrients::canonical_name(name);
        self.iter().find(|target| target.name == key)
    }

    /// Target amount, zero (no requirement) when absent
    #[must_use]
    pub fn amount(&self, name: &str) -> f64 {
        self.get(name).map_or(0.0, |target| target.amount)
    }
}

/// Derives per-user targets from a profile
#[derive(Debug, Clone, Default)]
pub struct TargetResolver {
    config: TargetConfig,
}

impl TargetResolver {
    /// Create a resolver with the given configuration
    #[must_use]
    pub const fn new(config: TargetConfig) -> Self {
        Self { config }
    }

    /// Resolve macro and micro targets for a profile
    #[must_use]
    pub fn resolve(&self, profile: &UserProfile) -> NutrientTargets {
        let profile = profile.sanitized();
        let targets = NutrientTargets {
            macronutrients: self.macronutrient_targets(&profile),
            micronutrients: self.micronutrient_targets(&profile),
        };
        debug!(
            user_id = %profile.id,
            energy_kcal = targets.amount(nutrients::CALORIES),
            micronutrient_count = targets.micronutrients.len(),
            "Resolved nutrient targets"
        );
        targets
    }

    /// Basal metabolic rate (kcal/day), averaging both equations for `Sex::Other`
    #[must_use]
    pub fn basal_metabolic_rate(&self, profile: &UserProfile) -> f64 {
        let bmr = &self.config.bmr;
        let equation = |c: &HarrisBenedictCoefficients| {
            c.weight_coef.mul_add(
                profile.weight_kg,
                c.height_coef.mul_add(
                    profile.height_cm,
                    (-c.age_coef).mul_add(f64::from(profile.age), c.base),
                ),
            )
        };
        match profile.sex {
            Sex::Male => equation(&bmr.male),
            Sex::Female => equation(&bmr.female),
            Sex::Other => (equation(&bmr.male) + equation(&bmr.female)) / 2.0,
        }
    }

    /// Activity multiplier for TDEE
    #[must_use]
    pub const fn activity_factor(&self, level: ActivityLevel) -> f64 {
        let factors = &self.config.activity_factors;
        match level {
            ActivityLevel::Sedentary => factors.sedentary,
            ActivityLevel::LightlyActive => factors.lightly_active,
            ActivityLevel::ModeratelyActive => factors.moderately_active,
            ActivityLevel::VeryActive => factors.very_active,
            ActivityLevel::ExtraActive => factors.extra_active,
        }
    }

    /// Daily energy target after goal and BMI adjustments
    #[must_use]
    pub fn energy_target(&self, profile: &UserProfile) -> f64 {
        let adjust = &self.config.energy;
        let mut energy = (self.basal_metabolic_rate(profile)
            * self.activity_factor(profile.activity_level))
        .round();

        if profile.has_goal(HealthGoal::MuscleGain) {
            energy += adjust.muscle_gain_kcal;
        }
        if profile.has_goal(HealthGoal::WeightLoss) {
            energy -= adjust.weight_loss_kcal;
        }

        let bmi = profile.bmi();
        if bmi < adjust.underweight_bmi {
            energy += adjust.underweight_kcal;
        } else if bmi > adjust.obese_bmi {
            energy -= adjust.obese_kcal;
        }

        energy.max(0.0)
    }

    /// Protein factor (g/kg); the highest applicable goal factor wins
    fn protein_g_per_kg(&self, profile: &UserProfile) -> f64 {
        let macros = &self.config.macros;
        let goal_factors = [
            (HealthGoal::MuscleGain, macros.muscle_gain_protein_g_per_kg),
            (
                HealthGoal::AthleticPerformance,
                macros.athletic_protein_g_per_kg,
            ),
            (HealthGoal::WeightLoss, macros.weight_loss_protein_g_per_kg),
        ];
        goal_factors
            .iter()
            .filter(|(goal, _)| profile.has_goal(*goal))
            .map(|(_, factor)| *factor)
            .fold(macros.protein_g_per_kg, f64::max)
    }

    fn macronutrient_targets(&self, profile: &UserProfile) -> Vec<NutrientTarget> {
        let macros = &self.config.macros;
        let energy = self.energy_target(profile);

        let protein_g = (profile.weight_kg * self.protein_g_per_kg(profile)).round();
        let remaining_kcal = protein_g
            .mul_add(-KCAL_PER_GRAM_PROTEIN_CARB, energy)
            .max(0.0);

        let (carbohydrate_g, fat_g) = if profile.lifestyle == Lifestyle::Keto {
            let carbs = (remaining_kcal * macros.carbohydrate_share / KCAL_PER_GRAM_PROTEIN_CARB)
                .round()
                .min(macros.keto_carbohydrate_cap_g);
            let fat = (carbs.mul_add(-KCAL_PER_GRAM_PROTEIN_CARB, remaining_kcal)
                / KCAL_PER_GRAM_FAT)
                .round();
            (carbs, fat)
        } else {
            (
                (remaining_kcal * macros.carbohydrate_share / KCAL_PER_GRAM_PROTEIN_CARB).round(),
                (remaining_kcal * macros.fat_share / KCAL_PER_GRAM_FAT).round(),
            )
        };
        let fiber_g = (profile.weight_kg * macros.fiber_g_per_kg).round();

        vec![
            NutrientTarget::new(nutrients::CALORIES, energy),
            NutrientTarget::new(nutrients::PROTEIN, protein_g),
            NutrientTarget::new(nutrients::CARBOHYDRATES, carbohydrate_g),
            NutrientTarget::new(nutrients::FAT, fat_g),
            NutrientTarget::new(nutrients::FIBER, fiber_g),
        ]
    }

    fn micronutrient_targets(&self, profile: &UserProfile) -> Vec<NutrientTarget> {
        let reference = &self.config.micronutrients;
        let by_sex = |male: f64, female: f64| match profile.sex {
            Sex::Male => male,
            Sex::Female => female,
            Sex::Other => male.max(female),
        };
        let per_kg = |amount: f64| (profile.weight_kg * amount).round();

        let mut calcium = per_kg(reference.calcium_mg_per_kg);
        if profile.age >= reference.older_adult_age {
            calcium = (calcium * reference.older_adult_calcium_factor).round();
        }

        let mut targets = vec![
            NutrientTarget::new(
                nutrients::IRON,
                by_sex(reference.iron_male_mg, reference.iron_female_mg),
            ),
            NutrientTarget::new(nutrients::CALCIUM, calcium),
            NutrientTarget::new(nutrients::VITAMIN_C, per_kg(reference.vitamin_c_mg_per_kg)),
            NutrientTarget::new(nutrients::VITAMIN_D, per_kg(reference.vitamin_d_iu_per_kg)),
            NutrientTarget::new(nutrients::VITAMIN_B12, reference.vitamin_b12_mcg),
            NutrientTarget::new(
                nutrients::ZINC,
                by_sex(reference.zinc_male_mg, reference.zinc_female_mg),
            ),
            NutrientTarget::new(nutrients::MAGNESIUM, per_kg(reference.magnesium_mg_per_kg)),
            NutrientTarget::new(nutrients::FOLATE, reference.folate_mcg),
            NutrientTarget::new(
                nutrients::VITAMIN_A,
                by_sex(reference.vitamin_a_male_mcg, reference.vitamin_a_female_mcg),
            ),
            NutrientTarget::new(nutrients::VITAMIN_E, per_kg(reference.vitamin_e_mg_per_kg)),
            NutrientTarget::new(nutrients::OMEGA_3, reference.omega_3_mg),
        ];

        self.apply_lifestyle(profile.lifestyle, &mut targets);
        self.apply_goals(profile, &mut targets);
        self.apply_medical_history(profile, &mut targets);
        targets
    }

    fn apply_lifestyle(&self, lifestyle: Lifestyle, targets: &mut [NutrientTarget]) {
        let adjust = &self.config.adjustments;
        if lifestyle.is_plant_based() {
            scale(targets, nutrients::IRON, adjust.plant_based_iron_factor);
            set(targets, nutrients::VITAMIN_B12, adjust.plant_based_b12_mcg);
            scale(targets, nutrients::ZINC, adjust.plant_based_zinc_factor);
            scale(targets, nutrients::OMEGA_3, adjust.plant_based_omega_3_factor);
        } else if lifestyle == Lifestyle::Keto {
            scale(targets, nutrients::MAGNESIUM, adjust.keto_magnesium_factor);
        }
    }

    fn apply_goals(&self, profile: &UserProfile, targets: &mut [NutrientTarget]) {
        let adjust = &self.config.adjustments;
        if profile.has_goal(HealthGoal::ImmuneSupport) {
            scale(targets, nutrients::VITAMIN_C, adjust.immune_vitamin_c_factor);
            scale(targets, nutrients::ZINC, adjust.immune_zinc_factor);
        }
        if profile.has_goal(HealthGoal::EnergyBoost) {
            scale(targets, nutrients::VITAMIN_B12, adjust.energy_b12_factor);
            scale(targets, nutrients::IRON, adjust.energy_iron_factor);
        }
        if profile.has_goal(HealthGoal::MentalClarity) {
            scale(
                targets,
                nutrients::OMEGA_3,
                adjust.mental_clarity_omega_3_factor,
            );
        }
        if profile.has_goal(HealthGoal::AthleticPerformance) {
            scale(targets, nutrients::MAGNESIUM, adjust.athletic_magnesium_factor);
        }
    }

    fn apply_medical_history(&self, profile: &UserProfile, targets: &mut Vec<NutrientTarget>) {
        let adjust = &self.config.adjustments;
        if profile.has_condition(MedicalCondition::Diabetes) {
            targets.push(NutrientTarget::new(
                nutrients::CHROMIUM,
                adjust.diabetes_chromium_mcg,
            ));
        }
        if profile.has_condition(MedicalCondition::Cardiovascular) {
            if let Some(omega) = targets.iter_mut().find(|t| t.name == nutrients::OMEGA_3) {
                omega.amount = omega.amount.max(adjust.cardiovascular_omega_3_mg);
            }
        }
    }
}

fn scale(targets: &mut [NutrientTarget], name: &str, factor: f64) {
    if let Some(target) = targets.iter_mut().find(|t| t.name == name) {
        target.amount *= factor;
    }
}

fn set(targets: &mut [NutrientTarget], name: &str, amount: f64) {
    if let Some(target) = targets.iter_mut().find(|t| t.name == name) {
        target.amount = amount;
    }
}
