// ABOUTME: Recommendation models returned by AI providers and the fallback list
// ABOUTME: Recommendation, RecommendationType, RecommendationPriority, and RecommendationSet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    /// Specific foods to add
    FoodSuggestion,
    /// A nutrient is running low
    DeficiencyAlert,
    /// Broader health observation
    HealthInsight,
    /// General improvement tip
    #[default]
    #[serde(other)]
    OptimizationTip,
}

/// Urgency of a recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    /// Act soon
    High,
    /// Nice to have
    Low,
    /// Worth doing
    #[default]
    #[serde(other)]
    Medium,
}

/// A single suggestion shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Recommendation identifier
    pub id: String,
    /// Kind of recommendation
    #[serde(rename = "type")]
    pub recommendation_type: RecommendationType,
    /// Urgency
    pub priority: RecommendationPriority,
    /// Short headline
    pub title: String,
    /// Body text
    pub description: String,
    /// Why this was suggested
    pub reasoning: String,
    /// Foods that help
    pub suggested_foods: Vec<String>,
    /// Nutrients this addresses
    pub target_nutrients: Vec<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Ordered list of recommendations, the cached payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RecommendationSet {
    /// Recommendations in provider order
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationSet {
    /// Wrap a list of recommendations
    #[must_use]
    pub const fn new(recommendations: Vec<Recommendation>) -> Self {
        Self { recommendations }
    }

    /// Number of recommendations
    #[must_use]
    pub fn len(&self) -> usize {
        self.recommendations.len()
    }

    /// Whether the set has no recommendations
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}
