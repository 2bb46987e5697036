// ABOUTME: Shared helpers for the molecular-balance CLI
// ABOUTME: JSON file input and JSON stdout output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod io;
