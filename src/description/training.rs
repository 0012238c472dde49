// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training session lines: single rows and repeated groups.

use crate::description::exercise::{render_friendly_description, render_single_row, RenderOptions};
use crate::description::row::{format_distance, format_pause, format_start_and_rest, join_tokens};
use crate::localization::Localizer;
use crate::models::{group_training_rows, TrainingGroup, TrainingRow};

/// `[times x distance] [exercise] [start-and-rest] [pause]`.
///
/// The row distance is stated once. A single-row exercise drops its own
/// distance when the row has one; a multi-row exercise splits the row
/// distance across its percentages.
pub fn render_training_row(
    row: &TrainingRow,
    options: &RenderOptions,
    localizer: &dyn Localizer,
) -> String {
    let exercise = match row.exercise.ordered_rows().as_slice() {
        [only] => render_single_row(only, options, localizer, row.distance > 0),
        _ => {
            let exercise_options = options.clone().with_total_distance(row.distance);
            render_friendly_description(&row.exercise, &exercise_options, localizer)
        }
    };
    let tokens = [
        format_distance(row.times, row.distance, 0, 0).unwrap_or_default(),
        exercise,
        format_start_and_rest(localizer, row.start_and_rest).unwrap_or_default(),
        format_pause(localizer, row.pause).unwrap_or_default(),
    ];
    join_tokens(tokens, " ")
}

/// `<times>x(<member rows>) [start-and-rest] [pause]`.
pub fn render_training_group(
    group: &TrainingGroup<'_>,
    options: &RenderOptions,
    localizer: &dyn Localizer,
) -> String {
    let members = join_tokens(
        group
            .rows
            .iter()
            .map(|row| render_training_row(row, options, localizer)),
        &options.separator,
    );
    let body = if group.times > 1 {
        format!("{}x({members})", group.times)
    } else {
        format!("({members})")
    };
    let tokens = [
        body,
        format_start_and_rest(localizer, group.start_and_rest).unwrap_or_default(),
        format_pause(localizer, group.pause).unwrap_or_default(),
    ];
    join_tokens(tokens, " ")
}

/// One line per ungrouped row and per group, in session order.
pub fn render_training(
    rows: &[TrainingRow],
    options: &RenderOptions,
    localizer: &dyn Localizer,
) -> Vec<String> {
    let groups = group_training_rows(rows);

    let mut lines: Vec<(u32, String)> = rows
        .iter()
        .filter(|row| !row.is_grouped())
        .map(|row| (row.part_order, render_training_row(row, options, localizer)))
        .collect();
    lines.extend(groups.values().map(|group| {
        (
            group.first_part_order(),
            render_training_group(group, options, localizer),
        )
    }));
    lines.sort_by_key(|(part_order, _)| *part_order);

    lines.into_iter().map(|(_, line)| line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::CodeLocalizer;
    use crate::models::{BaseMovement, Exercise, MovementType, TrainingMode, WorkoutRow};

    fn split() -> Exercise {
        let row = |part_order, movement: &str, percentage| WorkoutRow {
            part_order,
            base_movement: Some(BaseMovement::new(movement, MovementType::Other)),
            training_mode: Some(TrainingMode::new("B1")),
            percentage,
            ..Default::default()
        };
        Exercise::new(2, vec![row(1, "SL", 25), row(2, "DO", 75)])
    }

    fn freestyle() -> Exercise {
        Exercise::new(
            1,
            vec![WorkoutRow {
                part_order: 1,
                base_movement: Some(BaseMovement::new("SL", MovementType::Other)),
                training_mode: Some(TrainingMode::new("A2")),
                percentage: 100,
                ..Default::default()
            }],
        )
    }

    #[test]
    fn test_training_row_uses_row_distance() {
        let row = TrainingRow {
            part_order: 1,
            times: 4,
            distance: 100,
            start_and_rest: 105,
            exercise: freestyle(),
            ..Default::default()
        };
        assert_eq!(
            render_training_row(&row, &RenderOptions::default(), &CodeLocalizer),
            "4x100 SL S-R 1'45\""
        );
    }

    #[test]
    fn test_group_line() {
        let rows = vec![
            TrainingRow {
                part_order: 2,
                times: 1,
                distance: 50,
                group_id: 1,
                group_times: 3,
                group_pause: 30,
                exercise: freestyle(),
                ..Default::default()
            },
            TrainingRow {
                part_order: 1,
                times: 1,
                distance: 200,
                exercise: freestyle(),
                ..Default::default()
            },
        ];
        let lines = render_training(&rows, &RenderOptions::default(), &CodeLocalizer);
        assert_eq!(lines, vec!["200 SL", "3x(50 SL) p. 30\""]);
    }

    #[test]
    fn test_single_row_distance_is_stated_once() {
        let row = TrainingRow {
            part_order: 1,
            times: 4,
            distance: 50,
            exercise: freestyle(),
            ..Default::default()
        };
        let line = render_training_row(&row, &RenderOptions::default(), &CodeLocalizer);
        assert_eq!(line, "4x50 SL");
        assert_eq!(line.matches("50").count(), 1);
    }

    #[test]
    fn test_multi_row_exercise_splits_row_distance() {
        let row = TrainingRow {
            part_order: 1,
            times: 2,
            distance: 200,
            exercise: split(),
            ..Default::default()
        };
        assert_eq!(
            render_training_row(&row, &RenderOptions::default(), &CodeLocalizer),
            "2x200 (50 SL + 150 DO) B1"
        );
    }

    #[test]
    fn test_huge_row_distance_does_not_overflow() {
        let row = TrainingRow {
            part_order: 1,
            distance: 50_000_000,
            exercise: split(),
            ..Default::default()
        };
        assert_eq!(
            render_training_row(&row, &RenderOptions::default(), &CodeLocalizer),
            "50000000 (12500000 SL + 37500000 DO) B1"
        );
    }
}
