// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Human-readable workout descriptions.

pub mod exercise;
pub mod row;
pub mod training;

pub use exercise::{render_friendly_description, RenderOptions, SharedFacts, DEFAULT_SEPARATOR};
pub use row::{Hoisted, WorkoutRowView};
pub use training::{render_training, render_training_group, render_training_row};
