// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Display-name resolution for coded entities.
//!
//! Rendering code only knows tokens such as `base_movement.SL.short`; a
//! [`Localizer`] turns them into text. Unresolved tokens fall back to the
//! entity code so descriptions are always renderable.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::lookup::{AuxKind, AuxType, BaseMovement, ExecutionNote, TrainingMode};

pub const START_AND_REST_LABEL: &str = "label.start_and_rest";
pub const PAUSE_LABEL: &str = "label.pause";

const DEFAULT_START_AND_REST_LABEL: &str = "S-R";
const DEFAULT_PAUSE_LABEL: &str = "p.";

/// Resolves a stable token to localized text.
pub trait Localizer {
    fn resolve(&self, token: &str) -> Option<String>;

    fn movement_short_name(&self, movement: Option<&BaseMovement>) -> String {
        movement.map_or_else(String::new, |m| {
            self.resolve(&format!("base_movement.{}.short", m.code))
                .unwrap_or_else(|| m.code.clone())
        })
    }

    fn training_mode_alt_name(&self, mode: Option<&TrainingMode>) -> String {
        mode.map_or_else(String::new, |m| {
            self.resolve(&format!("training_mode.{}.alt", m.code))
                .unwrap_or_else(|| m.code.clone())
        })
    }

    fn execution_note_short_name(&self, note: Option<&ExecutionNote>) -> String {
        note.map_or_else(String::new, |n| {
            self.resolve(&format!("execution_note.{}.short", n.code))
                .unwrap_or_else(|| n.code.clone())
        })
    }

    fn aux_short_name(&self, kind: AuxKind, aux: Option<&AuxType>) -> String {
        aux.map_or_else(String::new, |a| {
            self.resolve(&format!("{}.{}.short", kind.namespace(), a.code))
                .unwrap_or_else(|| a.code.clone())
        })
    }

    fn start_and_rest_label(&self) -> String {
        self.resolve(START_AND_REST_LABEL)
            .unwrap_or_else(|| DEFAULT_START_AND_REST_LABEL.to_string())
    }

    fn pause_label(&self) -> String {
        self.resolve(PAUSE_LABEL)
            .unwrap_or_else(|| DEFAULT_PAUSE_LABEL.to_string())
    }
}

/// Localizer that never resolves anything: every name is its code.
#[derive(Debug, Default, Clone, Copy)]
pub struct CodeLocalizer;

impl Localizer for CodeLocalizer {
    fn resolve(&self, _token: &str) -> Option<String> {
        None
    }
}

/// Flat token catalog, usually loaded from a JSON object.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json_data = fs::read_to_string(path.as_ref()).map_err(|e| {
            AppError::Io(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Self::load_from_json(&json_data)
    }

    pub fn load_from_json(json_data: &str) -> Result<Self> {
        let entries: HashMap<String, String> = serde_json::from_str(json_data)?;
        tracing::info!(count = entries.len(), "Loaded localization catalog");
        Ok(Self { entries })
    }
}

impl Localizer for Catalog {
    fn resolve(&self, token: &str) -> Option<String> {
        self.entries.get(token).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovementType;

    #[test]
    fn test_code_localizer_falls_back_to_codes() {
        let movement = BaseMovement::new("SL", MovementType::Other);
        assert_eq!(CodeLocalizer.movement_short_name(Some(&movement)), "SL");
        assert_eq!(CodeLocalizer.movement_short_name(None), "");
        assert_eq!(CodeLocalizer.start_and_rest_label(), "S-R");
        assert_eq!(CodeLocalizer.pause_label(), "p.");
    }

    #[test]
    fn test_catalog_resolves_tokens() {
        let catalog = Catalog::load_from_json(
            r#"{"base_movement.SL.short": "free", "kick_aux.PB.short": "pull buoy"}"#,
        )
        .expect("valid catalog");

        let movement = BaseMovement::new("SL", MovementType::Other);
        assert_eq!(catalog.movement_short_name(Some(&movement)), "free");
        assert_eq!(
            catalog.aux_short_name(AuxKind::Kick, Some(&AuxType::new("PB"))),
            "pull buoy"
        );
        assert_eq!(
            catalog.aux_short_name(AuxKind::Arm, Some(&AuxType::new("PB"))),
            "PB"
        );
    }

    #[test]
    fn test_catalog_rejects_non_object_json() {
        assert!(Catalog::load_from_json("[1, 2]").is_err());
    }
}
