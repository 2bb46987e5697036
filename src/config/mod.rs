// ABOUTME: Configuration module for engine-wide settings loaded from the environment
// ABOUTME: Combines intelligence policy overrides with recommendation cache settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the molecular balance engine
//!
//! - **Environment**: `EngineConfig` assembled from environment variables
//! - **Intelligence**: scoring policy, re-exported from `molecular-intelligence`

/// Environment-based engine configuration
pub mod environment;

/// Intelligence policy configuration (re-exported from `molecular-intelligence`)
pub use molecular_intelligence::config::intelligence;

pub use environment::EngineConfig;
