// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Report configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use crate::description::DEFAULT_SEPARATOR;
use crate::models::record::scopes;

/// Configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON dataset to report on
    pub dataset_path: PathBuf,
    /// Optional localization catalog (JSON object of token -> text)
    pub catalog_path: Option<PathBuf>,
    /// Separator between rows of a description
    pub separator: String,
    /// Record-scope code used for personal bests
    pub personal_best_scope: String,
    /// Record-scope code used for records
    pub record_scope: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("tests/fixtures/dataset.json"),
            catalog_path: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            personal_best_scope: scopes::PERSONAL_BEST.to_string(),
            record_scope: scopes::FEDERATION_RECORD.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is honoured for local runs.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let dataset_path = env::var("GOGGLES_DATASET")
            .map(PathBuf::from)
            .map_err(|_| ConfigError::Missing("GOGGLES_DATASET"))?;

        let config = Self {
            dataset_path,
            catalog_path: env::var("GOGGLES_CATALOG").ok().map(PathBuf::from),
            separator: env::var("GOGGLES_SEPARATOR")
                .unwrap_or_else(|_| DEFAULT_SEPARATOR.to_string()),
            personal_best_scope: env::var("GOGGLES_PERSONAL_BEST_SCOPE")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|_| scopes::PERSONAL_BEST.to_string()),
            record_scope: env::var("GOGGLES_RECORD_SCOPE")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|_| scopes::FEDERATION_RECORD.to_string()),
        };

        if config.personal_best_scope.is_empty() {
            return Err(ConfigError::Invalid("GOGGLES_PERSONAL_BEST_SCOPE"));
        }
        if config.record_scope.is_empty() {
            return Err(ConfigError::Invalid("GOGGLES_RECORD_SCOPE"));
        }
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Set required env vars for test
        env::set_var("GOGGLES_DATASET", "data/season.json");
        env::set_var("GOGGLES_RECORD_SCOPE", " TTB ");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.dataset_path, PathBuf::from("data/season.json"));
        assert_eq!(config.record_scope, "TTB");
        assert_eq!(config.personal_best_scope, "SPB");
        assert_eq!(config.separator, " + ");
    }
}
