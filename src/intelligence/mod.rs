// ABOUTME: Intelligence module re-exports from the molecular-intelligence crate
// ABOUTME: Keeps crate::intelligence paths stable for the engine, CLI, and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Nutrient aggregation, target resolution, status classification, scoring,
//! deficiency detection, daily recompute, and trend analysis. Everything here
//! lives in the `molecular-intelligence` crate so it compiles in parallel
//! with the async layers of this crate.

// Re-export all public items from molecular-intelligence
pub use molecular_intelligence::*;

// Re-export submodules for path-based access (e.g., crate::intelligence::config::intelligence::TrendConfig)
pub use molecular_intelligence::{
    aggregator, config, daily, deficiency, scoring, status, targets, trends,
};
