// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Season report: workout descriptions, personal bests and records.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::config::Config;
use crate::dataset::Dataset;
use crate::description::{render_friendly_description, render_training, RenderOptions};
use crate::error::Result;
use crate::localization::Localizer;
use crate::models::{BestPerformanceRecord, SwimResult};
use crate::records::{FirstWinsCollection, TieTrackingCollection};
use crate::time_utils::format_utc_rfc3339;

/// Rendered description of one exercise.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ExerciseDescription {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub code: String,
    pub description: String,
}

/// Personal bests of one swimmer, keyed by record key.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SwimmerBests {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub swimmer_id: u64,
    pub bests: BTreeMap<String, BestPerformanceRecord>,
}

/// Record holders for one key.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RecordEntry {
    pub key: String,
    pub holders: Vec<BestPerformanceRecord>,
    pub tie_in: bool,
}

/// Full report.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Report {
    pub generated_at: String,
    pub exercises: Vec<ExerciseDescription>,
    pub training: Vec<String>,
    pub personal_bests: Vec<SwimmerBests>,
    pub records: Vec<RecordEntry>,
}

impl Report {
    /// Build the report for `dataset`.
    pub fn build(
        dataset: &Dataset,
        config: &Config,
        localizer: &dyn Localizer,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let options = RenderOptions::default().with_separator(config.separator.clone());

        let exercises = dataset
            .exercises
            .iter()
            .map(|exercise| ExerciseDescription {
                id: exercise.id,
                code: exercise.code.clone(),
                description: render_friendly_description(exercise, &options, localizer),
            })
            .collect();

        let training = render_training(&dataset.training_rows, &options, localizer);
        let personal_bests = personal_bests(&dataset.results, &config.personal_best_scope)?;
        let records = records(&dataset.results, &config.record_scope)?;

        tracing::info!(
            exercises = dataset.exercises.len(),
            swimmers = personal_bests.len(),
            records = records.len(),
            tie_ins = records.iter().filter(|r| r.tie_in).count(),
            "Report built"
        );

        Ok(Self {
            generated_at: format_utc_rfc3339(now),
            exercises,
            training,
            personal_bests,
            records,
        })
    }
}

/// Personal bests per swimmer, in swimmer id order.
pub fn personal_bests(results: &[SwimResult], scope: &str) -> Result<Vec<SwimmerBests>> {
    let mut by_swimmer: BTreeMap<u64, Vec<&SwimResult>> = BTreeMap::new();
    for result in results {
        by_swimmer.entry(result.swimmer_id).or_default().push(result);
    }

    by_swimmer
        .into_iter()
        .map(|(swimmer_id, results)| -> Result<SwimmerBests> {
            let collection = FirstWinsCollection::from_results(results, scope)?;
            Ok(SwimmerBests {
                swimmer_id,
                bests: collection.to_map(),
            })
        })
        .collect()
}

/// Records across every result, tie-ins kept together.
pub fn records(results: &[SwimResult], scope: &str) -> Result<Vec<RecordEntry>> {
    let collection = TieTrackingCollection::from_results(results, scope)?;
    Ok(collection
        .to_tie_map()
        .into_iter()
        .map(|(key, holders)| RecordEntry {
            key,
            tie_in: holders.len() > 1,
            holders,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Timing;

    fn result(id: u64, swimmer_id: u64, event: &str, seconds: u32) -> SwimResult {
        SwimResult {
            id,
            swimmer_id,
            team_id: 1,
            season_id: 1,
            pool_type_code: "25".to_string(),
            event_type_code: event.to_string(),
            category_type_code: "M30".to_string(),
            gender_type_code: "F".to_string(),
            timing: Timing::new(0, seconds, 50),
            is_disqualified: false,
        }
    }

    #[test]
    fn test_personal_bests_grouped_by_swimmer() {
        let results = vec![
            result(1, 7, "50SL", 31),
            result(2, 7, "50SL", 30),
            result(3, 8, "50DO", 40),
        ];
        let bests = personal_bests(&results, "SPB").expect("valid codes");

        assert_eq!(bests.len(), 2);
        assert_eq!(bests[0].swimmer_id, 7);
        assert_eq!(bests[0].bests["SPB-25-50SL"].source_result_id, 2);
        assert_eq!(bests[1].bests.len(), 1);
    }

    #[test]
    fn test_records_flag_tie_ins() {
        let results = vec![result(1, 7, "50SL", 30), result(2, 8, "50SL", 30)];
        let entries = records(&results, "FOR").expect("valid codes");

        assert_eq!(entries.len(), 1);
        assert!(entries[0].tie_in);
        assert_eq!(entries[0].holders.len(), 2);
    }
}
