// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use goggles_core::models::{
    BaseMovement, Exercise, MovementType, SwimResult, Timing, TrainingMode, WorkoutRow,
};

/// Percentage-based exercise row.
#[allow(dead_code)]
pub fn row(part_order: u32, movement: &str, mode: &str, percentage: u32) -> WorkoutRow {
    WorkoutRow {
        part_order,
        base_movement: Some(BaseMovement::new(movement, MovementType::Other)),
        training_mode: Some(TrainingMode::new(mode)),
        percentage,
        ..Default::default()
    }
}

/// Pure technique drill row with an absolute distance.
#[allow(dead_code)]
pub fn technique_row(part_order: u32, movement: &str, mode: &str, distance: u32) -> WorkoutRow {
    WorkoutRow {
        part_order,
        base_movement: Some(BaseMovement::new(movement, MovementType::Technique)),
        training_mode: Some(TrainingMode::new(mode)),
        distance,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn exercise(rows: Vec<WorkoutRow>) -> Exercise {
    Exercise::new(1, rows)
}

/// 100SL result in a 25m pool for a 40-44 male.
#[allow(dead_code)]
pub fn result(id: u64, swimmer_id: u64, timing: Timing) -> SwimResult {
    SwimResult {
        id,
        swimmer_id,
        team_id: 3,
        season_id: 172,
        pool_type_code: "25".to_string(),
        event_type_code: "100SL".to_string(),
        category_type_code: "M40".to_string(),
        gender_type_code: "M".to_string(),
        timing,
        is_disqualified: false,
    }
}

/// Load a JSON fixture from `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{name}"))
        .unwrap_or_else(|e| panic!("Failed to read fixture {name}: {e}"))
}
