//! Entry filtering.

use crate::types::{OverallStats, RunnerEntry};

use super::stats::compute_overall_stats;

/// Returns the entries for which `predicate` returns `true`, in input order.
pub fn filter_entries<F>(entries: &[RunnerEntry], mut predicate: F) -> Vec<RunnerEntry>
where
    F: FnMut(&RunnerEntry) -> bool,
{
    entries.iter().filter(|e| predicate(*e)).cloned().collect()
}

/// Entries belonging to `person` (exact, case-sensitive match).
pub fn entries_for_person(entries: &[RunnerEntry], person: &str) -> Vec<RunnerEntry> {
    filter_entries(entries, |e| e.person() == person)
}

/// Overall statistics for the whole dataset (`None`) or one selected runner.
pub fn compute_overall_stats_for(entries: &[RunnerEntry], person: Option<&str>) -> OverallStats {
    match person {
        Some(name) => compute_overall_stats(&entries_for_person(entries, name)),
        None => compute_overall_stats(entries),
    }
}
