// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strategies deciding what happens when a candidate meets an existing best.

use crate::models::BestPerformanceRecord;
use crate::records::key::KeyLayout;

/// Outcome of offering a candidate to an occupied key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Candidate is strictly faster; it becomes the only entry.
    Replace,
    /// Candidate ties the best and is kept alongside it.
    AppendTie,
    /// Existing entries stay untouched.
    Keep,
}

/// Decides how a collection treats equal-timing candidates.
pub trait TiePolicy {
    /// Layout used by `RecordCollection::new`.
    const DEFAULT_LAYOUT: KeyLayout;

    fn decide(existing: &[BestPerformanceRecord], candidate: &BestPerformanceRecord) -> Decision;
}

/// Keeps every result sharing the best timing (team and federation records).
#[derive(Debug, Clone, Copy, Default)]
pub struct TieTracking;

/// Keeps only the first result found for a timing (personal bests).
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstWins;

impl TiePolicy for TieTracking {
    const DEFAULT_LAYOUT: KeyLayout = KeyLayout::Full;

    fn decide(existing: &[BestPerformanceRecord], candidate: &BestPerformanceRecord) -> Decision {
        let Some(best) = existing.first() else {
            return Decision::Replace;
        };
        if candidate.timing < best.timing {
            Decision::Replace
        } else if candidate.timing == best.timing
            && !existing
                .iter()
                .any(|r| r.source_result_id == candidate.source_result_id)
        {
            Decision::AppendTie
        } else {
            Decision::Keep
        }
    }
}

impl TiePolicy for FirstWins {
    const DEFAULT_LAYOUT: KeyLayout = KeyLayout::Short;

    fn decide(existing: &[BestPerformanceRecord], candidate: &BestPerformanceRecord) -> Decision {
        match existing.first() {
            Some(best) if candidate.timing >= best.timing => Decision::Keep,
            _ => Decision::Replace,
        }
    }
}
