// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Best-performance collections: personal bests and records.

pub mod collection;
pub mod key;
pub mod policy;

pub use collection::{FirstWinsCollection, RecordCollection, TieTrackingCollection};
pub use key::{KeyError, KeyLayout, RecordKey, KEY_SEPARATOR};
pub use policy::{Decision, FirstWins, TiePolicy, TieTracking};
