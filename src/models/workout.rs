// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise model: an ordered list of workout rows.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::lookup::{AuxKind, AuxType, BaseMovement, ExecutionNote, TrainingMode};

/// One component of an exercise (an "exercise row").
///
/// A row contributes either an absolute `distance` (meters) or a
/// `percentage` of the exercise's total distance, never both.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct WorkoutRow {
    pub part_order: u32,
    #[serde(default)]
    pub base_movement: Option<BaseMovement>,
    #[serde(default)]
    pub training_mode: Option<TrainingMode>,
    #[serde(default)]
    pub execution_note: Option<ExecutionNote>,
    #[serde(default)]
    #[validate(range(max = 100))]
    pub percentage: u32,
    /// Absolute meters; 0 when percentage-based.
    #[serde(default)]
    pub distance: u32,
    /// Start-and-rest interval in seconds.
    #[serde(default)]
    pub start_and_rest: u32,
    /// Pause after the row, in seconds.
    #[serde(default)]
    pub pause: u32,
    #[serde(default)]
    pub arm_aux: Option<AuxType>,
    #[serde(default)]
    pub kick_aux: Option<AuxType>,
    #[serde(default)]
    pub body_aux: Option<AuxType>,
    #[serde(default)]
    pub breath_aux: Option<AuxType>,
}

impl WorkoutRow {
    pub fn movement_code(&self) -> Option<&str> {
        self.base_movement.as_ref().map(|m| m.code.as_str())
    }

    pub fn training_mode_code(&self) -> Option<&str> {
        self.training_mode.as_ref().map(|m| m.code.as_str())
    }

    pub fn is_technique(&self) -> bool {
        self.base_movement
            .as_ref()
            .is_some_and(|m| m.movement_type.is_technique())
    }

    pub fn aux(&self, kind: AuxKind) -> Option<&AuxType> {
        match kind {
            AuxKind::Arm => self.arm_aux.as_ref(),
            AuxKind::Kick => self.kick_aux.as_ref(),
            AuxKind::Body => self.body_aux.as_ref(),
            AuxKind::Breath => self.breath_aux.as_ref(),
        }
    }

    pub fn has_absolute_distance(&self) -> bool {
        self.distance > 0
    }
}

/// A reusable exercise definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Exercise {
    pub id: u64,
    #[serde(default)]
    pub code: String,
    #[validate(nested)]
    pub rows: Vec<WorkoutRow>,
}

impl Exercise {
    pub fn new(id: u64, rows: Vec<WorkoutRow>) -> Self {
        Self {
            id,
            code: String::new(),
            rows,
        }
    }

    /// Rows in `part_order` sequence. Ties keep their stored order.
    pub fn ordered_rows(&self) -> Vec<&WorkoutRow> {
        let mut rows: Vec<&WorkoutRow> = self.rows.iter().collect();
        rows.sort_by_key(|row| row.part_order);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(part_order: u32, code: &str) -> WorkoutRow {
        WorkoutRow {
            part_order,
            base_movement: Some(BaseMovement::new(code, Default::default())),
            ..Default::default()
        }
    }

    #[test]
    fn test_ordered_rows_sorts_by_part_order() {
        let exercise = Exercise::new(1, vec![row(3, "C"), row(1, "A"), row(2, "B")]);
        let codes: Vec<&str> = exercise
            .ordered_rows()
            .iter()
            .filter_map(|r| r.movement_code())
            .collect();
        assert_eq!(codes, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_percentage_over_100_fails_validation() {
        let exercise = Exercise::new(
            1,
            vec![WorkoutRow {
                percentage: 120,
                ..Default::default()
            }],
        );
        assert!(exercise.validate().is_err());
    }
}
