// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Already-loaded workout and result data handed to the core.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{Exercise, SwimResult, TrainingRow};

/// Everything a report is computed from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Dataset {
    #[serde(default)]
    #[validate(nested)]
    pub exercises: Vec<Exercise>,
    #[serde(default)]
    #[validate(nested)]
    pub training_rows: Vec<TrainingRow>,
    #[serde(default)]
    #[validate(nested)]
    pub results: Vec<SwimResult>,
}

impl Dataset {
    /// Load and validate a dataset from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json_data = fs::read_to_string(path.as_ref()).map_err(|e| {
            AppError::Io(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Self::load_from_json(&json_data)
    }

    /// Load and validate a dataset from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json_data)?;
        dataset.validate()?;

        tracing::info!(
            exercises = dataset.exercises.len(),
            training_rows = dataset.training_rows.len(),
            results = dataset.results.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }
}
