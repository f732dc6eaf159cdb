//! Chart-ready pivots.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::types::{ChartDataPoint, PersonStats, PersonTotal, RunnerEntry};

/// Pivot entries into one point per date, ascending.
///
/// Every point carries every runner in `entries`: runners without a run that day are `0.0`.
/// If a runner has several entries on the same date, the last one in input order wins (values
/// are not summed).
pub fn prepare_chart_data(entries: &[RunnerEntry]) -> Vec<ChartDataPoint> {
    let persons: BTreeSet<&str> = entries.iter().map(RunnerEntry::person).collect();

    let mut by_date: BTreeMap<NaiveDate, BTreeMap<String, f64>> = BTreeMap::new();
    for entry in entries {
        by_date
            .entry(entry.date())
            .or_insert_with(|| persons.iter().map(|p| ((*p).to_owned(), 0.0)).collect())
            .insert(entry.person().to_owned(), entry.miles_run());
    }

    by_date
        .into_iter()
        .map(|(date, values)| ChartDataPoint { date, values })
        .collect()
}

/// Total miles per runner, in the order of `stats` (bar-chart series).
pub fn total_by_person(stats: &[PersonStats]) -> Vec<PersonTotal> {
    stats
        .iter()
        .map(|s| PersonTotal {
            name: s.name.clone(),
            miles: s.total_miles,
        })
        .collect()
}
