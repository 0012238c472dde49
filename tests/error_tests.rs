// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use goggles_core::config::ConfigError;
use goggles_core::dataset::Dataset;
use goggles_core::error::AppError;
use goggles_core::records::{FirstWinsCollection, KeyError};

mod common;
use common::result;

#[test]
fn test_key_errors_convert_to_invalid_key() {
    let mut bests = FirstWinsCollection::new();
    let mut bad = result(1, 1, goggles_core::models::Timing::new(0, 30, 0));
    bad.pool_type_code = String::new();

    let err: AppError = bests.add_result(&bad, "SPB").unwrap_err().into();
    assert!(matches!(
        err,
        AppError::InvalidKey(KeyError::EmptyCode { position: 1 })
    ));
    assert!(err.is_data_error());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Dataset::load_from_file("tests/fixtures/does_not_exist.json").unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
    assert!(!err.is_data_error());
}

#[test]
fn test_config_error_message() {
    let err: AppError = ConfigError::Missing("GOGGLES_DATASET").into();
    assert_eq!(
        err.to_string(),
        "Configuration error: Missing required environment variable: GOGGLES_DATASET"
    );
}
