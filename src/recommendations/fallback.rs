// ABOUTME: Static recommendations for when no provider payload is available
// ABOUTME: Deficiency-specific alerts plus general synergy, superfood, and plant-based B12 tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Utc;
use molecular_core::constants::nutrients::{self, IRON, PROTEIN, VITAMIN_B12, VITAMIN_C};
use molecular_core::models::{
    Recommendation, RecommendationPriority, RecommendationSet, RecommendationType, UserProfile,
};
use uuid::Uuid;

struct Template {
    recommendation_type: RecommendationType,
    priority: RecommendationPriority,
    title: &'static str,
    description: &'static str,
    reasoning: &'static str,
    suggested_foods: &'static [&'static str],
    target_nutrients: &'static [&'static str],
}

impl Template {
    fn build(&self) -> Recommendation {
        Recommendation {
            id: Uuid::new_v4().to_string(),
            recommendation_type: self.recommendation_type,
            priority: self.priority,
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            reasoning: self.reasoning.to_owned(),
            suggested_foods: self.suggested_foods.iter().map(|s| (*s).to_owned()).collect(),
            target_nutrients: self.target_nutrients.iter().map(|s| (*s).to_owned()).collect(),
            created_at: Utc::now(),
        }
    }
}

const PROTEIN_ALERT: Template = Template {
    recommendation_type: RecommendationType::DeficiencyAlert,
    priority: RecommendationPriority::High,
    title: "Complete Protein Optimization",
    description: "Protein intake is below target. Complete proteins supply all nine essential amino acids needed for muscle synthesis, enzymes, and hormones.",
    reasoning: "More complete protein supports muscle maintenance and recovery at your current intake.",
    suggested_foods: &[
        "Quinoa (1 cup cooked)",
        "Hemp seeds (3 tbsp)",
        "Lentils (1 cup cooked)",
        "Chia seeds (2 tbsp)",
        "Tempeh (4 oz)",
    ],
    target_nutrients: &["Complete Proteins", "Essential Amino Acids", "Leucine"],
};

const IRON_ALERT: Template = Template {
    recommendation_type: RecommendationType::DeficiencyAlert,
    priority: RecommendationPriority::High,
    title: "Iron Absorption Enhancement",
    description: "Iron is below target. It carries oxygen via hemoglobin and drives mitochondrial energy production; plant iron absorbs far less than heme iron.",
    reasoning: "Low iron brings fatigue and weaker performance. Vitamin C alongside plant iron multiplies absorption.",
    suggested_foods: &[
        "Spinach with bell peppers",
        "Lentils with citrus",
        "Quinoa with strawberries",
        "Pumpkin seeds with orange",
        "Dark chocolate (85% cacao)",
    ],
    target_nutrients: &["Iron", "Vitamin C", "Folate"],
};

const VITAMIN_C_TIP: Template = Template {
    recommendation_type: RecommendationType::OptimizationTip,
    priority: RecommendationPriority::Medium,
    title: "Antioxidant Power Boost",
    description: "Vitamin C regenerates vitamin E, builds collagen, and enhances iron absorption. It is heat-sensitive, so raw sources work best.",
    reasoning: "Requirements rise with stress and exercise, and it underpins immune function.",
    suggested_foods: &[
        "Bell peppers (raw)",
        "Citrus fruits",
        "Strawberries",
        "Kiwi",
        "Broccoli (lightly steamed)",
    ],
    target_nutrients: &["Vitamin C", "Bioflavonoids", "Antioxidants"],
};

const B12_SUPPLEMENT: Template = Template {
    recommendation_type: RecommendationType::DeficiencyAlert,
    priority: RecommendationPriority::High,
    title: "B12 Supplementation",
    description: "Consider a B12 supplement; it is found almost only in animal products.",
    reasoning: "Plant-based diets rarely meet B12 needs from food alone.",
    suggested_foods: &["Fortified nutritional yeast", "Fortified plant milk", "B12 supplement"],
    target_nutrients: &[VITAMIN_B12],
};

const SYNERGY_INSIGHT: Template = Template {
    recommendation_type: RecommendationType::HealthInsight,
    priority: RecommendationPriority::Medium,
    title: "Molecular Nutrition Synergy",
    description: "Nutrients work together: vitamin C enhances iron absorption, magnesium activates vitamin D, and dietary fat carries fat-soluble vitamins.",
    reasoning: "Pairing foods well raises bioavailability, which matters most on plant-based diets.",
    suggested_foods: &[
        "Quinoa with vegetables",
        "Nuts with berries",
        "Leafy greens with citrus",
        "Seeds with fruits",
    ],
    target_nutrients: &["Synergistic Nutrients", "Bioavailability Factors"],
};

const SUPERFOOD_SUGGESTION: Template = Template {
    recommendation_type: RecommendationType::FoodSuggestion,
    priority: RecommendationPriority::Low,
    title: "Superfood Integration",
    description: "Nutrient-dense foods cover several gaps at once. Chia brings protein, omega-3, and fiber; hemp seeds supply every essential amino acid.",
    reasoning: "Concentrated nutrition helps fill gaps while adding unique bioactive compounds.",
    suggested_foods: &[
        "Chia seeds (soaked)",
        "Hemp seeds (raw)",
        "Spirulina powder",
        "Nutritional yeast",
        "Cacao powder",
    ],
    target_nutrients: &[
        "Complete Proteins",
        "Omega-3 Fatty Acids",
        "Antioxidants",
        "B-Vitamins",
    ],
};

/// Static recommendations for a user and their deficiencies
///
/// Deficiency alerts come first (protein, iron, vitamin C), then a B12 note
/// for plant-based lifestyles, then two general tips that are always present.
#[must_use]
pub fn fallback_recommendations(profile: &UserProfile, deficiencies: &[String]) -> RecommendationSet {
    let deficient = |name: &str| {
        deficiencies
            .iter()
            .any(|d| nutrients::canonical_name(d) == name)
    };

    let mut templates = Vec::new();
    if deficient(PROTEIN) {
        templates.push(&PROTEIN_ALERT);
    }
    if deficient(IRON) {
        templates.push(&IRON_ALERT);
    }
    if deficient(VITAMIN_C) {
        templates.push(&VITAMIN_C_TIP);
    }
    if profile.lifestyle.is_plant_based() {
        templates.push(&B12_SUPPLEMENT);
    }
    templates.push(&SYNERGY_INSIGHT);
    templates.push(&SUPERFOOD_SUGGESTION);

    RecommendationSet::new(templates.into_iter().map(Template::build).collect())
}
