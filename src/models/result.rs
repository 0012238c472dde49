// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Individual meeting result, the source of best-performance records.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::timing::Timing;

/// A single swimmer's result in one event.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SwimResult {
    /// Stable identity, used to recognise re-insertions of the same result.
    pub id: u64,
    pub swimmer_id: u64,
    pub team_id: u64,
    pub season_id: u64,
    /// Pool length code, e.g. "25" or "50".
    pub pool_type_code: String,
    /// Event code, e.g. "100SL".
    pub event_type_code: String,
    pub category_type_code: String,
    pub gender_type_code: String,
    #[validate(nested)]
    pub timing: Timing,
    #[serde(default)]
    pub is_disqualified: bool,
}

impl SwimResult {
    /// Whether this result may become a record: not disqualified and timed.
    pub fn is_valid_performance(&self) -> bool {
        !self.is_disqualified && !self.timing.is_zero()
    }
}
