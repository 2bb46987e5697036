// ABOUTME: Core types and constants for the molecular balance nutrition engine
// ABOUTME: Foundation crate with error handling, nutrient catalogue, policy constants, and models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Molecular Core
//!
//! Foundation crate providing shared types and constants for the molecular
//! balance engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Nutrient catalogue, scoring policy constants, and cache defaults
//! - **models**: Nutrients, meals, daily intake, profiles, statuses, and recommendations

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (meals, nutrients, profiles, recommendations)
pub mod models;
