//! Overall and per-person statistics.

use std::collections::{HashMap, HashSet};

use crate::types::{DateRange, OverallStats, PersonStats, RunnerEntry};

use super::reduce::summarize;

/// Summary statistics over `entries`.
///
/// An empty input yields all-zero numbers and an empty [`DateRange`].
pub fn compute_overall_stats(entries: &[RunnerEntry]) -> OverallStats {
    let Some(summary) = summarize(entries) else {
        return OverallStats::default();
    };

    let unique_runners = entries
        .iter()
        .map(RunnerEntry::person)
        .collect::<HashSet<_>>()
        .len();

    OverallStats {
        total_miles: summary.total(),
        average_miles: summary.average(),
        min_miles: summary.min,
        max_miles: summary.max,
        total_runs: summary.count,
        unique_runners,
        date_range: DateRange {
            start: entries.iter().map(RunnerEntry::date).min(),
            end: entries.iter().map(RunnerEntry::date).max(),
        },
    }
}

/// Per-runner statistics, highest total first.
///
/// Each runner's entries are sorted ascending by date, keeping input order for same-day runs.
/// Runners with equal totals keep first-seen order.
pub fn compute_person_stats(entries: &[RunnerEntry]) -> Vec<PersonStats> {
    let mut stats: Vec<PersonStats> = group_by_person(entries)
        .into_iter()
        .filter_map(|(name, mut runs)| {
            let summary = summarize(&runs)?;
            runs.sort_by_key(RunnerEntry::date);
            Some(PersonStats {
                name: name.to_owned(),
                total_miles: summary.total(),
                average_miles: summary.average(),
                min_miles: summary.min,
                max_miles: summary.max,
                run_count: summary.count,
                entries: runs,
            })
        })
        .collect();

    stats.sort_by(|a, b| b.total_miles.total_cmp(&a.total_miles));
    stats
}

/// Group entries by runner, in first-seen order, keeping input order inside each group.
fn group_by_person(entries: &[RunnerEntry]) -> Vec<(&str, Vec<RunnerEntry>)> {
    let mut groups: Vec<(&str, Vec<RunnerEntry>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        let slot = *index.entry(entry.person()).or_insert_with(|| {
            groups.push((entry.person(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(entry.clone());
    }
    groups
}
