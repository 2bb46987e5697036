// ABOUTME: Configuration module for molecular-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Intelligence policy configuration (status bands, scoring, targets, trends)
pub mod intelligence;

pub use intelligence::{ConfigError, IntelligenceConfig};
