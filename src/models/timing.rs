// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Swim timing (minutes, seconds, hundredths).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// A race timing as recorded on a result sheet.
///
/// Ordering compares the total elapsed hundredths, so `1'00"00` and
/// `0'60"00` would compare equal if such a value were ever built.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Timing {
    pub minutes: u32,
    #[validate(range(max = 59))]
    pub seconds: u32,
    #[validate(range(max = 99))]
    pub hundredths: u32,
}

impl Timing {
    pub fn new(minutes: u32, seconds: u32, hundredths: u32) -> Self {
        Self {
            minutes,
            seconds,
            hundredths,
        }
    }

    /// Build a normalized timing from a total count of hundredths.
    pub fn from_hundredths(total: u64) -> Self {
        let hundredths = (total % 100) as u32;
        let total_seconds = total / 100;
        Self {
            minutes: (total_seconds / 60) as u32,
            seconds: (total_seconds % 60) as u32,
            hundredths,
        }
    }

    pub fn to_hundredths(&self) -> u64 {
        (u64::from(self.minutes) * 60 + u64::from(self.seconds)) * 100 + u64::from(self.hundredths)
    }

    /// A zero timing means "no time recorded".
    pub fn is_zero(&self) -> bool {
        self.to_hundredths() == 0
    }
}

impl PartialEq for Timing {
    fn eq(&self, other: &Self) -> bool {
        self.to_hundredths() == other.to_hundredths()
    }
}

impl Eq for Timing {}

impl PartialOrd for Timing {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timing {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_hundredths().cmp(&other.to_hundredths())
    }
}

impl fmt::Display for Timing {
    /// Formats as `m'ss"hh`, e.g. `1'02"34`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}'{:02}\"{:02}",
            self.minutes, self.seconds, self.hundredths
        )
    }
}
