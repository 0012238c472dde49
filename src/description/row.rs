// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-row short descriptions.

use crate::localization::Localizer;
use crate::models::lookup::AuxKind;
use crate::models::WorkoutRow;
use crate::time_utils::format_seconds;

/// Tokens an enclosing rendering has already stated once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hoisted {
    pub movement: bool,
    pub training_mode: bool,
    pub distance: bool,
}

/// Join non-empty tokens with `separator`.
pub fn join_tokens<I, S>(tokens: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .filter_map(|t| {
            let t = t.as_ref().trim();
            (!t.is_empty()).then(|| t.to_string())
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Distance token: `"<times>x<meters>"`, `"<meters>"` or `"<percentage>%"`.
///
/// A percentage is turned into meters when `total_distance` is known.
/// Unknown distances (no meters, zero percentage) yield `None`.
pub fn format_distance(
    times: u32,
    distance: u32,
    percentage: u32,
    total_distance: u32,
) -> Option<String> {
    let meters = if distance > 0 {
        distance
    } else {
        u32::try_from(u64::from(total_distance) * u64::from(percentage) / 100).unwrap_or(u32::MAX)
    };
    let amount = if meters > 0 {
        meters.to_string()
    } else if percentage > 0 {
        format!("{percentage}%")
    } else {
        return None;
    };
    Some(if times > 1 {
        format!("{times}x{amount}")
    } else {
        amount
    })
}

pub fn format_start_and_rest(localizer: &dyn Localizer, seconds: u32) -> Option<String> {
    (seconds > 0).then(|| format!("{} {}", localizer.start_and_rest_label(), format_seconds(seconds)))
}

pub fn format_pause(localizer: &dyn Localizer, seconds: u32) -> Option<String> {
    (seconds > 0).then(|| format!("{} {}", localizer.pause_label(), format_seconds(seconds)))
}

/// Rendering view over a workout row.
pub trait WorkoutRowView {
    fn distance_token(&self, total_distance: u32) -> Option<String>;
    fn movement_short_name(&self, localizer: &dyn Localizer) -> String;
    fn aux_short_names(&self, localizer: &dyn Localizer) -> Vec<String>;
    fn training_mode_alt_name(&self, localizer: &dyn Localizer) -> String;
    fn execution_note_short_name(&self, localizer: &dyn Localizer) -> String;
    fn start_and_rest_token(&self, localizer: &dyn Localizer) -> Option<String>;
    fn pause_token(&self, localizer: &dyn Localizer) -> Option<String>;

    /// Whether the training mode is left out even when not hoisted.
    fn hides_training_mode(&self) -> bool;

    /// `[distance] [movement] [aux...] [mode] [note] [start-and-rest] [pause]`,
    /// leaving out whatever `hoisted` says was already stated.
    fn short_description(
        &self,
        localizer: &dyn Localizer,
        total_distance: u32,
        hoisted: Hoisted,
    ) -> String {
        let mut tokens: Vec<String> = Vec::new();
        if !hoisted.distance {
            tokens.extend(self.distance_token(total_distance));
        }
        if !hoisted.movement {
            tokens.push(self.movement_short_name(localizer));
        }
        tokens.extend(self.aux_short_names(localizer));
        if !hoisted.training_mode && !self.hides_training_mode() {
            tokens.push(self.training_mode_alt_name(localizer));
        }
        tokens.push(self.execution_note_short_name(localizer));
        tokens.extend(self.start_and_rest_token(localizer));
        tokens.extend(self.pause_token(localizer));
        join_tokens(tokens, " ")
    }
}

impl WorkoutRowView for WorkoutRow {
    fn distance_token(&self, total_distance: u32) -> Option<String> {
        format_distance(1, self.distance, self.percentage, total_distance)
    }

    fn movement_short_name(&self, localizer: &dyn Localizer) -> String {
        localizer.movement_short_name(self.base_movement.as_ref())
    }

    fn aux_short_names(&self, localizer: &dyn Localizer) -> Vec<String> {
        AuxKind::ALL
            .iter()
            .map(|kind| localizer.aux_short_name(*kind, self.aux(*kind)))
            .filter(|name| !name.is_empty())
            .collect()
    }

    fn training_mode_alt_name(&self, localizer: &dyn Localizer) -> String {
        localizer.training_mode_alt_name(self.training_mode.as_ref())
    }

    fn execution_note_short_name(&self, localizer: &dyn Localizer) -> String {
        localizer.execution_note_short_name(self.execution_note.as_ref())
    }

    fn start_and_rest_token(&self, localizer: &dyn Localizer) -> Option<String> {
        format_start_and_rest(localizer, self.start_and_rest)
    }

    fn pause_token(&self, localizer: &dyn Localizer) -> Option<String> {
        format_pause(localizer, self.pause)
    }

    // Pure technique drills never show a training mode.
    fn hides_training_mode(&self) -> bool {
        self.is_technique()
    }
}
