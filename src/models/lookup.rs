// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Coded lookup entities referenced by workout rows.
//!
//! These carry codes only. Display names come from a [`Localizer`].
//!
//! [`Localizer`]: crate::localization::Localizer

use serde::{Deserialize, Serialize};

/// Code of the implicit default training mode (resistance).
pub const DEFAULT_TRAINING_MODE_CODE: &str = "A2";

/// Classification of a base movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MovementType {
    /// Pure technique drill ("T").
    #[serde(rename = "T")]
    Technique,
    #[default]
    #[serde(other)]
    Other,
}

impl MovementType {
    pub fn is_technique(self) -> bool {
        matches!(self, MovementType::Technique)
    }
}

/// Stroke or drill a workout row is swum with (e.g. "SL").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseMovement {
    pub code: String,
    #[serde(default)]
    pub movement_type: MovementType,
}

impl BaseMovement {
    pub fn new(code: impl Into<String>, movement_type: MovementType) -> Self {
        Self {
            code: code.into(),
            movement_type,
        }
    }
}

/// Intensity classification of a workout segment (e.g. "A2", "B1").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingMode {
    pub code: String,
}

impl TrainingMode {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn is_default(&self) -> bool {
        self.code == DEFAULT_TRAINING_MODE_CODE
    }
}

/// Short annotation on a workout row (e.g. "fast").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionNote {
    pub code: String,
}

impl ExecutionNote {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Technique-focus modifier attached to a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuxType {
    pub code: String,
}

impl AuxType {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Which body part an [`AuxType`] refers to; selects its localization namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxKind {
    Arm,
    Kick,
    Body,
    Breath,
}

impl AuxKind {
    pub const ALL: [AuxKind; 4] = [AuxKind::Arm, AuxKind::Kick, AuxKind::Body, AuxKind::Breath];

    pub fn namespace(self) -> &'static str {
        match self {
            AuxKind::Arm => "arm_aux",
            AuxKind::Kick => "kick_aux",
            AuxKind::Body => "body_aux",
            AuxKind::Breath => "breath_aux",
        }
    }
}
