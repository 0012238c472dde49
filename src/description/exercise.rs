// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Compact exercise descriptions.
//!
//! Repeated facts are stated once: a movement shared by every row is
//! hoisted in front, a shared training mode is appended after the
//! parenthesized row list, and a shared percentage is dropped.
//!
//! ```text
//! SL (25% + 75%) B1         movement and mode shared
//! (25% SL + 75% DO) B1      mode shared
//! 25% SL B1 + 75% DO A2     nothing shared
//! ```

use std::collections::BTreeSet;

use crate::description::row::{join_tokens, Hoisted, WorkoutRowView};
use crate::localization::Localizer;
use crate::models::{Exercise, WorkoutRow};

pub const DEFAULT_SEPARATOR: &str = " + ";

/// Rendering parameters for [`render_friendly_description`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Total meters of the exercise, when the caller knows it; turns
    /// percentages into meters.
    pub total_distance: u32,
    /// Swimmer level the description is for. Currently informational.
    pub swimmer_level_type_id: u32,
    /// Joins the per-row descriptions.
    pub separator: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            total_distance: 0,
            swimmer_level_type_id: 0,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl RenderOptions {
    pub fn with_total_distance(mut self, total_distance: u32) -> Self {
        self.total_distance = total_distance;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Facts shared by every row of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharedFacts {
    pub same_movement: bool,
    pub same_mode: bool,
    pub same_distance: bool,
}

impl SharedFacts {
    pub fn of(rows: &[&WorkoutRow]) -> Self {
        let movements: BTreeSet<Option<&str>> = rows.iter().map(|r| r.movement_code()).collect();
        let modes: BTreeSet<Option<&str>> = rows.iter().map(|r| r.training_mode_code()).collect();
        let percentages: BTreeSet<u32> = rows.iter().map(|r| r.percentage).collect();

        let same_distance = !rows.iter().any(|r| r.has_absolute_distance())
            && percentages.len() == 1
            && percentages.iter().all(|p| *p > 0);

        Self {
            same_movement: movements.len() == 1,
            same_mode: modes.len() == 1,
            same_distance,
        }
    }
}

/// Render `exercise` as a single compact line.
pub fn render_friendly_description(
    exercise: &Exercise,
    options: &RenderOptions,
    localizer: &dyn Localizer,
) -> String {
    let rows = exercise.ordered_rows();
    tracing::trace!(
        exercise_id = exercise.id,
        rows = rows.len(),
        swimmer_level_type_id = options.swimmer_level_type_id,
        "Rendering exercise description"
    );

    match rows.as_slice() {
        [] => String::new(),
        [row] => render_single_row(row, options, localizer, false),
        _ => render_rows(&rows, options, localizer),
    }
}

/// A lone row hides the default mode. `distance_stated` hides its distance
/// when the enclosing line already printed it.
pub(crate) fn render_single_row(
    row: &WorkoutRow,
    options: &RenderOptions,
    localizer: &dyn Localizer,
    distance_stated: bool,
) -> String {
    let default_mode = row.training_mode.as_ref().is_some_and(|m| m.is_default());
    let hoisted = Hoisted {
        training_mode: default_mode && !row.is_technique(),
        distance: distance_stated,
        ..Hoisted::default()
    };
    row.short_description(localizer, options.total_distance, hoisted)
}

fn render_rows(rows: &[&WorkoutRow], options: &RenderOptions, localizer: &dyn Localizer) -> String {
    let shared = SharedFacts::of(rows);
    let hoisted = Hoisted {
        movement: shared.same_movement,
        training_mode: shared.same_mode,
        distance: shared.same_distance,
    };

    let row_list = join_tokens(
        rows.iter()
            .map(|row| row.short_description(localizer, options.total_distance, hoisted)),
        &options.separator,
    );

    let mut parts: Vec<String> = Vec::with_capacity(3);
    if shared.same_movement {
        parts.push(rows[0].movement_short_name(localizer));
    }
    if (shared.same_movement || shared.same_mode) && !row_list.is_empty() {
        parts.push(format!("({row_list})"));
    } else {
        parts.push(row_list);
    }
    if shared.same_mode {
        parts.push(rows[0].training_mode_alt_name(localizer));
    }

    join_tokens(parts, " ")
}
