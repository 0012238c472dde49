// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod lookup;
pub mod record;
pub mod result;
pub mod timing;
pub mod training;
pub mod workout;

pub use lookup::{AuxKind, AuxType, BaseMovement, ExecutionNote, MovementType, TrainingMode};
pub use record::BestPerformanceRecord;
pub use result::SwimResult;
pub use timing::Timing;
pub use training::{group_training_rows, TrainingGroup, TrainingRow};
pub use workout::{Exercise, WorkoutRow};
