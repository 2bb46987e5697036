// ABOUTME: Command modules for the molecular-balance CLI
// ABOUTME: Target resolution, daily analysis, recommendations, and trend reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analyze;
pub mod trends;
