// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

use crate::config::ConfigError;
use crate::records::KeyError;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid record key: {0}")]
    InvalidKey(#[from] KeyError),

    #[error("Invalid data: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Failed to read file: {0}")]
    Io(String),

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Errors caused by the input data rather than by the environment.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidKey(_) | AppError::Validation(_) | AppError::Parse(_)
        )
    }
}

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, AppError>;
