// ABOUTME: Nutrient target resolution configuration
// ABOUTME: Harris-Benedict coefficients, activity factors, macro splits, and micronutrient reference intakes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Target Resolution Configuration
//!
//! Energy comes from the revised Harris-Benedict equations (Roza & Shizgal
//! 1984) scaled by an activity factor. Micronutrient baselines are adult
//! reference intakes, some scaled by body weight.

use serde::{Deserialize, Serialize};

/// Revised Harris-Benedict coefficients for one sex
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarrisBenedictCoefficients {
    /// Constant term (kcal)
    pub base: f64,
    /// kcal per kg of body weight
    pub weight_coef: f64,
    /// kcal per cm of height
    pub height_coef: f64,
    /// kcal subtracted per year of age
    pub age_coef: f64,
}

/// BMR equation configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Male coefficients
    pub male: HarrisBenedictCoefficients,
    /// Female coefficients
    pub female: HarrisBenedictCoefficients,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            male: HarrisBenedictCoefficients {
                base: 88.362,
                weight_coef: 13.397,
                height_coef: 4.799,
                age_coef: 5.677,
            },
            female: HarrisBenedictCoefficients {
                base: 447.593,
                weight_coef: 9.247,
                height_coef: 3.098,
                age_coef: 4.330,
            },
        }
    }
}

/// Activity factors for TDEE
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary factor
    pub sedentary: f64,
    /// Lightly active factor
    pub lightly_active: f64,
    /// Moderately active factor
    pub moderately_active: f64,
    /// Very active factor
    pub very_active: f64,
    /// Extra active factor
    pub extra_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

/// Goal and body-composition energy adjustments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyAdjustments {
    /// Surplus for muscle gain (kcal)
    pub muscle_gain_kcal: f64,
    /// Deficit for weight loss (kcal)
    pub weight_loss_kcal: f64,
    /// BMI below which the user is underweight
    pub underweight_bmi: f64,
    /// Surplus for underweight users (kcal)
    pub underweight_kcal: f64,
    /// BMI above which the user is obese
    pub obese_bmi: f64,
    /// Deficit for obese users (kcal)
    pub obese_kcal: f64,
}

impl Default for EnergyAdjustments {
    fn default() -> Self {
        Self {
            muscle_gain_kcal: 300.0,
            weight_loss_kcal: 300.0,
            underweight_bmi: 18.5,
            underweight_kcal: 200.0,
            obese_bmi: 30.0,
            obese_kcal: 400.0,
        }
    }
}

/// Macronutrient distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Baseline protein (g/kg)
    pub protein_g_per_kg: f64,
    /// Protein for muscle gain (g/kg)
    pub muscle_gain_protein_g_per_kg: f64,
    /// Protein for athletic performance (g/kg)
    pub athletic_protein_g_per_kg: f64,
    /// Protein for weight loss (g/kg)
    pub weight_loss_protein_g_per_kg: f64,
    /// Share of non-protein energy from carbohydrates
    pub carbohydrate_share: f64,
    /// Share of non-protein energy from fat
    pub fat_share: f64,
    /// Carbohydrate ceiling for keto (g)
    pub keto_carbohydrate_cap_g: f64,
    /// Fiber (g/kg)
    pub fiber_g_per_kg: f64,
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            protein_g_per_kg: 1.6,
            muscle_gain_protein_g_per_kg: 2.0,
            athletic_protein_g_per_kg: 1.8,
            weight_loss_protein_g_per_kg: 1.8,
            carbohydrate_share: 0.55,
            fat_share: 0.45,
            keto_carbohydrate_cap_g: 50.0,
            fiber_g_per_kg: 0.4,
        }
    }
}

/// Adult micronutrient reference intakes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MicronutrientReference {
    /// Iron for males (mg)
    pub iron_male_mg: f64,
    /// Iron for females (mg)
    pub iron_female_mg: f64,
    /// Calcium (mg/kg)
    pub calcium_mg_per_kg: f64,
    /// Vitamin C (mg/kg)
    pub vitamin_c_mg_per_kg: f64,
    /// Vitamin D (IU/kg)
    pub vitamin_d_iu_per_kg: f64,
    /// Vitamin B12 (mcg)
    pub vitamin_b12_mcg: f64,
    /// Zinc for males (mg)
    pub zinc_male_mg: f64,
    /// Zinc for females (mg)
    pub zinc_female_mg: f64,
    /// Magnesium (mg/kg)
    pub magnesium_mg_per_kg: f64,
    /// Folate (mcg)
    pub folate_mcg: f64,
    /// Vitamin A for males (mcg)
    pub vitamin_a_male_mcg: f64,
    /// Vitamin A for females (mcg)
    pub vitamin_a_female_mcg: f64,
    /// Vitamin E (mg/kg)
    pub vitamin_e_mg_per_kg: f64,
    /// Omega-3 (mg)
    pub omega_3_mg: f64,
    /// Age from which calcium needs rise
    pub older_adult_age: u32,
    /// Calcium multiplier for older adults
    pub older_adult_calcium_factor: f64,
}

impl Default for MicronutrientReference {
    fn default() -> Self {
        Self {
            iron_male_mg: 8.0,
            iron_female_mg: 18.0,
            calcium_mg_per_kg: 12.5,
            vitamin_c_mg_per_kg: 1.5,
            vitamin_d_iu_per_kg: 8.0,
            vitamin_b12_mcg: 2.4,
            zinc_male_mg: 11.0,
            zinc_female_mg: 8.0,
            magnesium_mg_per_kg: 5.0,
            folate_mcg: 400.0,
            vitamin_a_male_mcg: 900.0,
            vitamin_a_female_mcg: 700.0,
            vitamin_e_mg_per_kg: 0.2,
            omega_3_mg: 250.0,
            older_adult_age: 51,
            older_adult_calcium_factor: 1.2,
        }
    }
}

/// Lifestyle, goal, and medical multipliers applied after the baseline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MicronutrientAdjustments {
    /// Iron multiplier for plant-based diets
    pub plant_based_iron_factor: f64,
    /// B12 target for plant-based diets (mcg)
    pub plant_based_b12_mcg: f64,
    /// Zinc multiplier for plant-based diets
    pub plant_based_zinc_factor: f64,
    /// Omega-3 multiplier for plant-based diets
    pub plant_based_omega_3_factor: f64,
    /// Magnesium multiplier for keto
    pub keto_magnesium_factor: f64,
    /// Vitamin C multiplier for immune support
    pub immune_vitamin_c_factor: f64,
    /// Zinc multiplier for immune support
    pub immune_zinc_factor: f64,
    /// B12 multiplier for energy boost
    pub energy_b12_factor: f64,
    /// Iron multiplier for energy boost
    pub energy_iron_factor: f64,
    /// Omega-3 multiplier for mental clarity
    pub mental_clarity_omega_3_factor: f64,
    /// Magnesium multiplier for athletic performance
    pub athletic_magnesium_factor: f64,
    /// Chromium target for diabetes (mcg)
    pub diabetes_chromium_mcg: f64,
    /// Omega-3 floor for cardiovascular disease (mg)
    pub cardiovascular_omega_3_mg: f64,
}

impl Default for MicronutrientAdjustments {
    fn default() -> Self {
        Self {
            plant_based_iron_factor: 1.8,
            plant_based_b12_mcg: 2.8,
            plant_based_zinc_factor: 1.5,
            plant_based_omega_3_factor: 2.0,
            keto_magnesium_factor: 1.2,
            immune_vitamin_c_factor: 1.5,
            immune_zinc_factor: 1.2,
            energy_b12_factor: 1.2,
            energy_iron_factor: 1.1,
            mental_clarity_omega_3_factor: 1.5,
            athletic_magnesium_factor: 1.1,
            diabetes_chromium_mcg: 35.0,
            cardiovascular_omega_3_mg: 1000.0,
        }
    }
}

/// Target resolution configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct TargetConfig {
    /// BMR equations
    pub bmr: BmrConfig,
    /// Activity factors
    pub activity_factors: ActivityFactorsConfig,
    /// Energy adjustments
    pub energy: EnergyAdjustments,
    /// Macronutrient split
    pub macros: MacroSplitConfig,
    /// Micronutrient baseline
    pub micronutrients: MicronutrientReference,
    /// Micronutrient adjustments
    pub adjustments: MicronutrientAdjustments,
}
