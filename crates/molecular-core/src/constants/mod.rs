// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Nutrient catalogue, scoring policy defaults, and recommendation cache defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file. Policy values here are defaults; the intelligence crate exposes
//! them as overridable configuration.

/// Recommendation cache constants (TTL, capacity, key prefix)
pub mod cache;
/// Known nutrient names, units, and categories
pub mod nutrients;
/// Status bands, score weights, and trend thresholds
pub mod policy;

/// Service identifiers used in structured logs
pub mod service_names {
    /// Engine service name
    pub const MOLECULAR_BALANCE: &str = "molecular-balance";
    /// Label used for the external recommendation provider in errors and logs
    pub const RECOMMENDATION_PROVIDER: &str = "recommendation-provider";
}
