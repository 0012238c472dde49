// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise description tests.
//!
//! These pin down the compaction rules: which tokens are hoisted out of
//! the per-row list and which are suppressed.

use goggles_core::description::{render_friendly_description, RenderOptions};
use goggles_core::localization::{Catalog, CodeLocalizer};
use goggles_core::models::{AuxType, ExecutionNote, TrainingMode, WorkoutRow};

mod common;
use common::{exercise, fixture, row, technique_row};

fn render(rows: Vec<WorkoutRow>) -> String {
    render_friendly_description(&exercise(rows), &RenderOptions::default(), &CodeLocalizer)
}

#[test]
fn test_render_is_repeatable() {
    let ex = exercise(vec![row(1, "SL", "A2", 50), row(2, "DO", "B1", 50)]);
    let options = RenderOptions::default();

    let first = render_friendly_description(&ex, &options, &CodeLocalizer);
    let second = render_friendly_description(&ex, &options, &CodeLocalizer);
    assert_eq!(first, second);
}

#[test]
fn test_single_row_hides_default_mode() {
    let mut only = row(1, "SL", "A2", 100);
    only.distance = 400;
    only.percentage = 0;
    assert_eq!(render(vec![only.clone()]), "400 SL");

    only.training_mode = Some(TrainingMode::new("B2"));
    assert_eq!(render(vec![only]), "400 SL B2");
}

#[test]
fn test_single_technique_row_never_shows_mode() {
    assert_eq!(render(vec![technique_row(1, "DR", "A2", 50)]), "50 DR");
    assert_eq!(render(vec![technique_row(1, "DR", "B1", 50)]), "50 DR");
}

#[test]
fn test_single_row_without_references() {
    let bare = WorkoutRow {
        part_order: 1,
        distance: 200,
        ..Default::default()
    };
    assert_eq!(render(vec![bare]), "200");
}

#[test]
fn test_shared_movement_is_hoisted_once() {
    let description = render(vec![row(1, "SL", "A2", 50), row(2, "SL", "B1", 30)]);
    assert_eq!(description, "SL (50% A2 + 30% B1)");

    let (outside, inside) = description.split_once('(').expect("parenthesized list");
    assert_eq!(outside.matches("SL").count(), 1);
    assert!(outside.starts_with("SL"));
    assert!(!inside.contains("SL"));
}

#[test]
fn test_equal_percentages_are_collapsed() {
    let description = render(vec![row(1, "SL", "A2", 50), row(2, "DO", "B1", 50)]);
    assert!(!description.contains("50%"));
    assert_eq!(description, "SL A2 + DO B1");
}

#[test]
fn test_different_percentages_are_shown() {
    let description = render(vec![row(1, "SL", "A2", 50), row(2, "DO", "B1", 30)]);
    assert!(description.contains("50%"));
    assert!(description.contains("30%"));
}

#[test]
fn test_zero_percentage_is_never_rendered() {
    let description = render(vec![row(1, "SL", "A2", 0), row(2, "DO", "B1", 0)]);
    assert!(!description.contains("0%"));
    assert_eq!(description, "SL A2 + DO B1");
}

#[test]
fn test_technique_rows_never_show_mode() {
    let description = render(vec![
        technique_row(1, "DR", "B1", 50),
        row(2, "SL", "A3", 0),
    ]);
    assert_eq!(description, "50 DR + SL A3");
}

#[test]
fn test_aux_types_and_suffixes_are_kept_per_row() {
    let mut kick = row(1, "SL", "A2", 0);
    kick.distance = 100;
    kick.kick_aux = Some(AuxType::new("PB"));
    kick.pause = 20;
    let mut fast = row(2, "SL", "A2", 0);
    fast.distance = 50;
    fast.execution_note = Some(ExecutionNote::new("V"));
    fast.start_and_rest = 75;

    assert_eq!(
        render(vec![kick, fast]),
        "SL (100 PB p. 20\" + 50 V S-R 1'15\") A2"
    );
}

#[test]
fn test_catalog_names_are_used() {
    let catalog = Catalog::load_from_json(&fixture("catalog.json")).expect("valid catalog");
    let ex = exercise(vec![row(1, "SL", "B1", 25), row(2, "SL", "B1", 75)]);

    assert_eq!(
        render_friendly_description(&ex, &RenderOptions::default(), &catalog),
        "freestyle (25% + 75%) aerobic"
    );
}
