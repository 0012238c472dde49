// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Composite record keys.
//!
//! A key joins the categorical codes of a record in a fixed order:
//! scope, pool, event and, for [`KeyLayout::Full`], category and gender.

use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

use crate::models::SwimResult;

/// Separator between key components. Codes may never contain it.
pub const KEY_SEPARATOR: &str = "-";

/// Which components make up a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KeyLayout {
    /// scope, pool, event (personal bests).
    Short,
    /// scope, pool, event, category, gender (team and federation records).
    Full,
}

impl KeyLayout {
    pub fn arity(self) -> usize {
        match self {
            KeyLayout::Short => 3,
            KeyLayout::Full => 5,
        }
    }
}

/// Errors raised while encoding a key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("Expected {expected} key components, got {actual}")]
    WrongArity { expected: usize, actual: usize },

    #[error("Key component {position} is empty")]
    EmptyCode { position: usize },

    #[error("Key component contains the separator: {code:?}")]
    ContainsSeparator { code: String },
}

/// An encoded, validated record key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordKey(String);

impl RecordKey {
    /// Encode raw codes for `layout`.
    pub fn encode(layout: KeyLayout, codes: &[&str]) -> Result<Self, KeyError> {
        if codes.len() != layout.arity() {
            return Err(KeyError::WrongArity {
                expected: layout.arity(),
                actual: codes.len(),
            });
        }
        for (position, code) in codes.iter().enumerate() {
            if code.is_empty() {
                return Err(KeyError::EmptyCode { position });
            }
            if code.contains(KEY_SEPARATOR) {
                return Err(KeyError::ContainsSeparator {
                    code: (*code).to_string(),
                });
            }
        }
        Ok(Self(codes.join(KEY_SEPARATOR)))
    }

    /// Encode from optional query codes; category and gender are only
    /// consulted by the full layout.
    pub fn from_codes(
        layout: KeyLayout,
        record_scope_code: &str,
        pool_type_code: &str,
        event_type_code: &str,
        category_type_code: Option<&str>,
        gender_type_code: Option<&str>,
    ) -> Result<Self, KeyError> {
        let mut codes = vec![record_scope_code, pool_type_code, event_type_code];
        codes.extend(category_type_code);
        codes.extend(gender_type_code);
        Self::encode(layout, &codes)
    }

    /// Extract the codes of `result` under `record_scope_code`.
    pub fn for_result(
        layout: KeyLayout,
        result: &SwimResult,
        record_scope_code: &str,
    ) -> Result<Self, KeyError> {
        let mut codes = vec![
            record_scope_code,
            result.pool_type_code.as_str(),
            result.event_type_code.as_str(),
        ];
        if layout == KeyLayout::Full {
            codes.push(result.category_type_code.as_str());
            codes.push(result.gender_type_code.as_str());
        }
        Self::encode(layout, &codes)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The key without its leading scope component.
    pub fn without_scope(&self) -> &str {
        self.0
            .split_once(KEY_SEPARATOR)
            .map_or("", |(_, rest)| rest)
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for RecordKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RecordKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
