// ABOUTME: Recommendation cache constants for TTL, capacity, and key namespacing
// ABOUTME: Defaults used when no environment override is present
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Recommendation payload TTL (10 minutes)
pub const TTL_RECOMMENDATIONS_SECS: u64 = 600;

/// Default maximum number of cached recommendation payloads
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 1_000;

/// Cache key prefix for recommendation fingerprints
pub const RECOMMENDATION_KEY_PREFIX: &str = "recommendations";

/// Separator between deficiency names inside a fingerprint
pub const DEFICIENCY_SEPARATOR: &str = "_";
