// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Goggles report tool
//!
//! Loads a dataset of workouts and results and prints workout
//! descriptions, personal bests and records as JSON.

use anyhow::Context;
use goggles_core::{
    config::Config,
    dataset::Dataset,
    localization::{Catalog, CodeLocalizer, Localizer},
    report::Report,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    init_logging()?;

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        dataset = %config.dataset_path.display(),
        "Starting Goggles report"
    );

    let dataset = Dataset::load_from_file(&config.dataset_path)
        .with_context(|| format!("Failed to load {}", config.dataset_path.display()))?;

    let catalog = match &config.catalog_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading localization catalog");
            Some(Catalog::load_from_file(path).context("Failed to load catalog")?)
        }
        None => None,
    };
    let localizer: &dyn Localizer = match &catalog {
        Some(catalog) => catalog,
        None => &CodeLocalizer,
    };

    let report = Report::build(&dataset, &config, localizer, chrono::Utc::now())?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("goggles_core=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
