// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Best-performance record built from a result.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::result::SwimResult;
use crate::models::timing::Timing;

/// Well-known record-scope codes.
pub mod scopes {
    /// Swimmer personal best.
    pub const PERSONAL_BEST: &str = "SPB";
    /// Swimmer best within a season.
    pub const SEASON_BEST: &str = "SSB";
    /// Team record.
    pub const TEAM_RECORD: &str = "TTB";
    /// Federation record.
    pub const FEDERATION_RECORD: &str = "FOR";
}

/// Best known result for one categorical key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct BestPerformanceRecord {
    pub record_scope_code: String,
    pub pool_type_code: String,
    pub event_type_code: String,
    pub category_type_code: String,
    pub gender_type_code: String,
    pub timing: Timing,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub swimmer_id: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub team_id: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub season_id: u64,
    /// Id of the originating result.
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub source_result_id: u64,
}

impl BestPerformanceRecord {
    pub fn from_result(result: &SwimResult, record_scope_code: &str) -> Self {
        Self {
            record_scope_code: record_scope_code.to_string(),
            pool_type_code: result.pool_type_code.clone(),
            event_type_code: result.event_type_code.clone(),
            category_type_code: result.category_type_code.clone(),
            gender_type_code: result.gender_type_code.clone(),
            timing: result.timing,
            swimmer_id: result.swimmer_id,
            team_id: result.team_id,
            season_id: result.season_id,
            source_result_id: result.id,
        }
    }
}
