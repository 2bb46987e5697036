// ABOUTME: molecular-balance CLI - offline analysis of profiles, meal logs, and daily histories
// ABOUTME: Prints targets, daily analyses, recommendations, and trend reports as JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Daily targets for a profile
//! molecular-balance targets --profile profile.json
//!
//! # Analyze one date from a meal log (or every date when --date is omitted)
//! molecular-balance analyze --profile profile.json --meals meals.json --date 2025-01-15
//!
//! # Recommendations, from a saved provider reply or the fallback list
//! molecular-balance recommend --profile profile.json --meals meals.json --response reply.txt
//!
//! # Trend report over a month of daily intakes
//! molecular-balance trends --history history.json --period month --metric score --metric protein
//! ```

mod commands;
mod helpers;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use molecular_balance::engine::NutritionEngine;
use molecular_balance::errors::{AppError, AppResult};
use molecular_balance::logging::LoggingConfig;
use molecular_balance::models::TrendMetric;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "molecular-balance",
    about = "Molecular balance nutrition analysis",
    long_about = "Resolve nutrient targets, score daily intake, detect deficiencies, and report trends from JSON files."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print daily nutrient targets for a profile
    Targets {
        /// User profile JSON file
        #[arg(long)]
        profile: PathBuf,
    },

    /// Analyze meals against a profile's targets
    Analyze {
        /// User profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Meal log JSON file (array of meals)
        #[arg(long)]
        meals: PathBuf,

        /// Date to analyze (YYYY-MM-DD); every logged date when omitted
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Recommendations for a day's deficiencies
    Recommend {
        /// User profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Meal log JSON file (array of meals)
        #[arg(long)]
        meals: PathBuf,

        /// Date to analyze (YYYY-MM-DD); latest logged date when omitted
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Saved provider reply to parse instead of the fallback list
        #[arg(long)]
        response: Option<PathBuf>,
    },

    /// Report trends over a daily history
    Trends {
        /// History JSON file (daily intakes or daily snapshots)
        #[arg(long)]
        history: PathBuf,

        /// Window period: week, month, quarter, or year
        #[arg(long, conflicts_with = "window")]
        period: Option<String>,

        /// Window length in days
        #[arg(long)]
        window: Option<usize>,

        /// Metric to analyze (score or a nutrient name); repeatable
        #[arg(long = "metric")]
        metrics: Vec<TrendMetric>,
    },
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let engine = NutritionEngine::from_env()?;
    debug!("Engine ready");

    match cli.command {
        Command::Targets { profile } => commands::analyze::targets(&engine, &profile),
        Command::Analyze {
            profile,
            meals,
            date,
        } => commands::analyze::analyze(&engine, &profile, &meals, date),
        Command::Recommend {
            profile,
            meals,
            date,
            response,
        } => commands::analyze::recommend(&engine, &profile, &meals, date, response.as_deref()),
        Command::Trends {
            history,
            period,
            window,
            metrics,
        } => commands::trends::report(&engine, &history, period.as_deref(), window, metrics),
    }
}
