// ABOUTME: JSON input and output helpers for the molecular-balance CLI
// ABOUTME: Reads typed JSON files with path-aware errors and pretty-prints results to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use molecular_balance::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a file into a string
pub fn read_text(path: &Path) -> AppResult<String> {
    debug!(path = %path.display(), "Reading input file");
    fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", path.display())).with_source(e)
    })
}

/// Read and deserialize a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = read_text(path)?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::invalid_input(format!("Invalid JSON in {}: {e}", path.display())).with_source(e)
    })
}

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
