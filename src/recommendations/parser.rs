// ABOUTME: Lenient parser for recommendation payloads returned by text-generating providers
// ABOUTME: Accepts wrapped, bare-array, or prose-embedded JSON and defaults every missing field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Provider output is untrusted text. Parsing never fails: anything that
//! cannot be read as recommendations yields an empty set and a warning, and
//! each recommendation is rebuilt field by field so one malformed field does
//! not discard the rest.

use chrono::Utc;
use molecular_core::models::{Recommendation, RecommendationSet};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use uuid::Uuid;

/// Title used when a recommendation has none
pub const DEFAULT_TITLE: &str = "Nutrition Tip";

/// Parse provider text into recommendations
///
/// Accepted shapes, tried in order: `{ "recommendations": [...] }`, a bare
/// array of recommendation objects, and either of those embedded in prose.
#[must_use]
pub fn parse_recommendations(text: &str) -> RecommendationSet {
    let Some(items) = locate_items(text) else {
        warn!(
            length = text.len(),
            "Could not find recommendations in provider payload"
        );
        return RecommendationSet::default();
    };

    let recommendations: Vec<Recommendation> = items
        .iter()
        .filter_map(Value::as_object)
        .map(recommendation_from_object)
        .collect();
    debug!(
        count = recommendations.len(),
        "Parsed recommendations from provider payload"
    );
    RecommendationSet::new(recommendations)
}

fn locate_items(text: &str) -> Option<Vec<Value>> {
    let trimmed = text.trim();
    if let Some(items) = serde_json::from_str(trimmed).ok().and_then(items_of) {
        return Some(items);
    }

    // Prose around the JSON: try the outermost object, then the outermost array
    [('{', '}'), ('[', ']')].iter().find_map(|&(open, close)| {
        let start = trimmed.find(open)?;
        let end = trimmed.rfind(close)?;
        if end <= start {
            return None;
        }
        serde_json::from_str(&trimmed[start..=end])
            .ok()
            .and_then(items_of)
    })
}

fn items_of(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(mut object) => match object.remove("recommendations") {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

fn recommendation_from_object(object: &Map<String, Value>) -> Recommendation {
    Recommendation {
        id: Uuid::new_v4().to_string(),
        recommendation_type: enum_field(object, &["type", "recommendation_type"]),
        priority: enum_field(object, &["priority"]),
        title: string_field(object, &["title"])
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
        description: string_field(object, &["description"]).unwrap_or_default(),
        reasoning: string_field(object, &["reasoning"]).unwrap_or_default(),
        suggested_foods: list_field(object, &["suggestedFoods", "suggested_foods"]),
        target_nutrients: list_field(object, &["targetNutrients", "target_nutrients"]),
        created_at: Utc::now(),
    }
}

fn field<'a>(object: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| object.get(*name))
}

fn string_field(object: &Map<String, Value>, names: &[&str]) -> Option<String> {
    field(object, names)
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
}

/// Unknown or non-string values map to the enum's default
fn enum_field<T: DeserializeOwned + Default>(object: &Map<String, Value>, names: &[&str]) -> T {
    field(object, names)
        .and_then(Value::as_str)
        .and_then(|raw| {
            serde_json::from_value(Value::String(raw.trim().to_lowercase().replace(' ', "_"))).ok()
        })
        .unwrap_or_default()
}

/// Non-list values become an empty list; non-string elements are skipped
fn list_field(object: &Map<String, Value>, names: &[&str]) -> Vec<String> {
    field(object, names)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default()
}
