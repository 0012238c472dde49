// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Goggles core: swim workout descriptions and best-performance tables
//!
//! This crate renders compact descriptions of structured workouts and
//! maintains personal-best and record collections from meeting results.

pub mod config;
pub mod dataset;
pub mod description;
pub mod error;
pub mod localization;
pub mod models;
pub mod records;
pub mod report;
pub mod time_utils;
