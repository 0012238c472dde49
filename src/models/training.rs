// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training plan rows and the groups derived from them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

use crate::models::workout::Exercise;

/// One line of a training session: an exercise repeated `times` times.
///
/// Rows sharing a non-zero `group_id` form a [`TrainingGroup`]; the
/// `group_*` fields repeat the group-level settings on every member.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TrainingRow {
    pub part_order: u32,
    #[serde(default = "one")]
    pub times: u32,
    #[serde(default)]
    pub distance: u32,
    #[serde(default)]
    pub start_and_rest: u32,
    #[serde(default)]
    pub pause: u32,
    #[serde(default)]
    pub group_id: u32,
    #[serde(default = "one")]
    pub group_times: u32,
    #[serde(default)]
    pub group_start_and_rest: u32,
    #[serde(default)]
    pub group_pause: u32,
    #[validate(nested)]
    pub exercise: Exercise,
}

fn one() -> u32 {
    1
}

impl TrainingRow {
    pub fn is_grouped(&self) -> bool {
        self.group_id != 0
    }

    /// Estimated duration: the start-and-rest interval when set, the pause otherwise.
    pub fn total_seconds(&self) -> u32 {
        let per_repetition = if self.start_and_rest > 0 {
            self.start_and_rest
        } else {
            self.pause
        };
        self.times.saturating_mul(per_repetition)
    }
}

/// Rows sharing a `group_id`, repeated together.
#[derive(Debug, Clone)]
pub struct TrainingGroup<'a> {
    pub group_id: u32,
    pub times: u32,
    pub start_and_rest: u32,
    pub pause: u32,
    /// Members in `part_order` sequence.
    pub rows: Vec<&'a TrainingRow>,
    pub total_seconds: u32,
}

impl TrainingGroup<'_> {
    /// Part order of the first member, used to place the group in a session.
    pub fn first_part_order(&self) -> u32 {
        self.rows.first().map_or(0, |row| row.part_order)
    }
}

/// Fold a flat list of rows into groups keyed by `group_id`.
///
/// Ungrouped rows (`group_id == 0`) are skipped. The group-level settings
/// are taken from the first member encountered.
pub fn group_training_rows(rows: &[TrainingRow]) -> BTreeMap<u32, TrainingGroup<'_>> {
    let mut groups: BTreeMap<u32, TrainingGroup<'_>> = BTreeMap::new();

    for row in rows.iter().filter(|row| row.is_grouped()) {
        groups
            .entry(row.group_id)
            .or_insert_with(|| TrainingGroup {
                group_id: row.group_id,
                times: row.group_times.max(1),
                start_and_rest: row.group_start_and_rest,
                pause: row.group_pause,
                rows: Vec::new(),
                total_seconds: 0,
            })
            .rows
            .push(row);
    }

    for group in groups.values_mut() {
        group.rows.sort_by_key(|row| row.part_order);
        group.total_seconds = if group.start_and_rest > 0 {
            group.times.saturating_mul(group.start_and_rest)
        } else {
            let members = group
                .rows
                .iter()
                .map(|row| row.total_seconds())
                .fold(0, u32::saturating_add);
            group.times.saturating_mul(members.saturating_add(group.pause))
        };
    }

    groups
}
