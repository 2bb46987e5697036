// ABOUTME: Main library entry point for the molecular balance engine
// ABOUTME: Wires nutrition intelligence, the recommendation cache and service, config, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Molecular Balance
//!
//! A nutrition analysis engine that turns logged meals into a daily molecular
//! balance picture: per-nutrient totals, per-user targets, graded statuses, a
//! composite 0-100 score, deficiencies, and multi-day trends. Recommendations
//! come from an external provider and are memoised by a TTL-bounded LRU
//! cache keyed on the user's deficiency fingerprint.
//!
//! ## Architecture
//!
//! - **`molecular-core`**: errors, constants, and data models
//! - **`molecular-intelligence`**: the pure, synchronous algorithms
//! - **engine**: one facade over the algorithms, built from configuration
//! - **cache**: the recommendation cache with hit/latency metrics
//! - **recommendations**: provider trait, payload parser, and fallback list
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use molecular_balance::engine::NutritionEngine;
//! use molecular_balance::errors::AppResult;
//! use molecular_balance::models::UserProfile;
//!
//! fn main() -> AppResult<()> {
//!     let engine = NutritionEngine::from_env()?;
//!     let profile = UserProfile::new("user-1");
//!     let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();
//!     let analysis = engine.analyze_day(&profile, date, Vec::new());
//!     println!("score = {}", analysis.intake.molecular_balance_score);
//!     Ok(())
//! }
//! ```

/// Recommendation cache with TTL expiry, LRU eviction, and metrics
pub mod cache;

/// Environment-based configuration
pub mod config;

/// High-level facade over the nutrition algorithms
pub mod engine;

/// Nutrition intelligence (re-exported from `molecular-intelligence`)
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Recommendation provider abstraction, payload parsing, and fallbacks
pub mod recommendations;

/// Application constants (re-exported from `molecular-core`)
pub use molecular_core::constants;

/// Unified error handling (re-exported from `molecular-core`)
pub use molecular_core::errors;

/// Data models (re-exported from `molecular-core`)
pub use molecular_core::models;
