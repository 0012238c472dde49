// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory collection of best performances keyed by [`RecordKey`].
//!
//! The collection is built while walking a swimmer's or team's results:
//! each candidate either opens a new key, replaces a slower best, joins a
//! tie (depending on the [`TiePolicy`]) or is ignored.

use serde::Serialize;
use std::collections::BTreeMap;
use std::marker::PhantomData;

use crate::models::{BestPerformanceRecord, SwimResult};
use crate::records::key::{KeyError, KeyLayout, RecordKey};
use crate::records::policy::{Decision, FirstWins, TiePolicy, TieTracking};

/// Federation/team records: full key, ties retained.
pub type TieTrackingCollection = RecordCollection<TieTracking>;

/// Personal bests: short key, first result found wins a tie.
pub type FirstWinsCollection = RecordCollection<FirstWins>;

/// Best performances per key, under tie policy `P`.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "")]
pub struct RecordCollection<P: TiePolicy> {
    layout: KeyLayout,
    entries: BTreeMap<RecordKey, Vec<BestPerformanceRecord>>,
    #[serde(skip)]
    _policy: PhantomData<P>,
}

impl<P: TiePolicy> Default for RecordCollection<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: TiePolicy> RecordCollection<P> {
    /// Empty collection using the policy's default layout.
    pub fn new() -> Self {
        Self::with_layout(P::DEFAULT_LAYOUT)
    }

    pub fn with_layout(layout: KeyLayout) -> Self {
        Self {
            layout,
            entries: BTreeMap::new(),
            _policy: PhantomData,
        }
    }

    /// Build a collection from zero or more results.
    pub fn from_results<'a, I>(results: I, record_scope_code: &str) -> Result<Self, KeyError>
    where
        I: IntoIterator<Item = &'a SwimResult>,
    {
        let mut collection = Self::new();
        collection.add(results, record_scope_code)?;
        Ok(collection)
    }

    /// Offer one or more results; `Some(&result)` and `None` work too.
    ///
    /// Returns the key of the last entry touched, or `None` when nothing
    /// usable was given. Disqualified and untimed results are skipped.
    /// Every key is encoded before the first insert, so a bad code leaves
    /// the collection unchanged.
    pub fn add<'a, I>(
        &mut self,
        results: I,
        record_scope_code: &str,
    ) -> Result<Option<RecordKey>, KeyError>
    where
        I: IntoIterator<Item = &'a SwimResult>,
    {
        let keyed = results
            .into_iter()
            .filter(|result| self.is_storable(result))
            .map(|result| {
                RecordKey::for_result(self.layout, result, record_scope_code).map(|key| (key, result))
            })
            .collect::<Result<Vec<_>, KeyError>>()?;

        let mut last_key = None;
        for (key, result) in keyed {
            self.store(key.clone(), result, record_scope_code);
            last_key = Some(key);
        }
        Ok(last_key)
    }

    /// Offer a single result.
    pub fn add_result(
        &mut self,
        result: &SwimResult,
        record_scope_code: &str,
    ) -> Result<Option<RecordKey>, KeyError> {
        if !self.is_storable(result) {
            return Ok(None);
        }
        let key = RecordKey::for_result(self.layout, result, record_scope_code)?;
        self.store(key.clone(), result, record_scope_code);
        Ok(Some(key))
    }

    fn is_storable(&self, result: &SwimResult) -> bool {
        let valid = result.is_valid_performance();
        if !valid {
            tracing::debug!(
                result_id = result.id,
                disqualified = result.is_disqualified,
                "Skipping result without a valid timing"
            );
        }
        valid
    }

    fn store(&mut self, key: RecordKey, result: &SwimResult, record_scope_code: &str) {
        let candidate = BestPerformanceRecord::from_result(result, record_scope_code);

        match self.entries.get_mut(&key) {
            None => {
                tracing::debug!(key = %key, timing = %candidate.timing, "New best performance");
                self.entries.insert(key, vec![candidate]);
            }
            Some(existing) => match P::decide(existing, &candidate) {
                Decision::Replace => {
                    tracing::debug!(
                        key = %key,
                        previous = %existing[0].timing,
                        timing = %candidate.timing,
                        "Best performance improved"
                    );
                    *existing = vec![candidate];
                }
                Decision::AppendTie => {
                    tracing::debug!(
                        key = %key,
                        timing = %candidate.timing,
                        result_id = candidate.source_result_id,
                        "Tie-in on best performance"
                    );
                    existing.push(candidate);
                }
                Decision::Keep => {}
            },
        }
    }

    /// Remove the entry for `result`'s key. Returns whether anything was removed.
    pub fn delete(&mut self, result: &SwimResult, record_scope_code: &str) -> bool {
        RecordKey::for_result(self.layout, result, record_scope_code)
            .is_ok_and(|key| self.delete_with_key(key.as_str()))
    }

    pub fn delete_with_key(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// The best record for a key; the first one found when tied.
    pub fn get(
        &self,
        record_scope_code: &str,
        pool_type_code: &str,
        event_type_code: &str,
        category_type_code: Option<&str>,
        gender_type_code: Option<&str>,
    ) -> Option<&BestPerformanceRecord> {
        self.get_all(
            record_scope_code,
            pool_type_code,
            event_type_code,
            category_type_code,
            gender_type_code,
        )
        .first()
    }

    /// Every record sharing the best timing for a key.
    pub fn get_all(
        &self,
        record_scope_code: &str,
        pool_type_code: &str,
        event_type_code: &str,
        category_type_code: Option<&str>,
        gender_type_code: Option<&str>,
    ) -> &[BestPerformanceRecord] {
        RecordKey::from_codes(
            self.layout,
            record_scope_code,
            pool_type_code,
            event_type_code,
            category_type_code,
            gender_type_code,
        )
        .ok()
        .and_then(|key| self.entries.get(&key))
        .map(Vec::as_slice)
        .unwrap_or_default()
    }

    pub fn has(
        &self,
        record_scope_code: &str,
        pool_type_code: &str,
        event_type_code: &str,
        category_type_code: Option<&str>,
        gender_type_code: Option<&str>,
    ) -> bool {
        self.get(
            record_scope_code,
            pool_type_code,
            event_type_code,
            category_type_code,
            gender_type_code,
        )
        .is_some()
    }

    /// Whether any scope holds an entry for the remaining codes.
    pub fn has_any(
        &self,
        pool_type_code: &str,
        event_type_code: &str,
        category_type_code: Option<&str>,
        gender_type_code: Option<&str>,
    ) -> bool {
        // Any non-empty placeholder scope yields the same suffix.
        let Ok(query) = RecordKey::from_codes(
            self.layout,
            "_",
            pool_type_code,
            event_type_code,
            category_type_code,
            gender_type_code,
        ) else {
            return false;
        };
        self.entries
            .keys()
            .any(|key| key.without_scope() == query.without_scope())
    }

    /// Whether more than one result shares the best timing for a key.
    pub fn has_tie_in(
        &self,
        record_scope_code: &str,
        pool_type_code: &str,
        event_type_code: &str,
        category_type_code: Option<&str>,
        gender_type_code: Option<&str>,
    ) -> bool {
        self.get_all(
            record_scope_code,
            pool_type_code,
            event_type_code,
            category_type_code,
            gender_type_code,
        )
        .len()
            > 1
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored records, tie-ins included.
    pub fn count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Number of distinct keys.
    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All `(key, record)` pairs in key order; tied records share a key.
    pub fn iter(&self) -> impl Iterator<Item = (&RecordKey, &BestPerformanceRecord)> {
        self.entries
            .iter()
            .flat_map(|(key, records)| records.iter().map(move |record| (key, record)))
    }

    /// Plain key to best-record mapping (first record of each key).
    pub fn to_map(&self) -> BTreeMap<String, BestPerformanceRecord> {
        self.entries
            .iter()
            .filter_map(|(key, records)| {
                records
                    .first()
                    .map(|record| (key.to_string(), record.clone()))
            })
            .collect()
    }

    /// Plain key to records mapping, tie-ins included.
    pub fn to_tie_map(&self) -> BTreeMap<String, Vec<BestPerformanceRecord>> {
        self.entries
            .iter()
            .map(|(key, records)| (key.to_string(), records.clone()))
            .collect()
    }
}
