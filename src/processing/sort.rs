//! Entry ordering for tabular display.

use std::cmp::Ordering;

use crate::types::RunnerEntry;

/// Column to order entries by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Date,
    Person,
    MilesRun,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    /// Newest / largest first.
    #[default]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// A sorted copy of `entries`.
///
/// Sorting is stable in both directions: entries that compare equal keep input order. Names
/// compare case-insensitively first, then by exact text.
pub fn sort_entries(entries: &[RunnerEntry], field: SortField, direction: SortDirection) -> Vec<RunnerEntry> {
    let mut out = entries.to_vec();
    out.sort_by(|a, b| {
        let ord = compare(a, b, field);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    out
}

fn compare(a: &RunnerEntry, b: &RunnerEntry, field: SortField) -> Ordering {
    match field {
        SortField::Date => a.date().cmp(&b.date()),
        SortField::Person => a
            .person()
            .to_lowercase()
            .cmp(&b.person().to_lowercase())
            .then_with(|| a.person().cmp(b.person())),
        SortField::MilesRun => a.miles_run().total_cmp(&b.miles_run()),
    }
}
