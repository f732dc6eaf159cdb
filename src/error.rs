use thiserror::Error;

use crate::types::CanonicalColumn;

/// Convenience result type for ingestion and export operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned by the outer I/O surfaces (reading files, writing exports).
///
/// Parsing CSV text never fails with this type: problems in the text itself are reported as
/// [`ParseIssue`]s inside a [`crate::types::ParseResult`].
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writer error (export).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error (export).
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A problem found while ingesting running-log text.
///
/// The `Display` text of each variant is the user-facing message shown next to the upload, so it
/// must stay stable. Row numbers are 1-based and count the header as row 1.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIssue {
    /// No non-blank lines at all.
    #[error("CSV file is empty")]
    EmptyInput,

    /// One or more canonical columns could not be resolved from the header row.
    #[error(
        "Missing required columns: {}. Expected columns: date, person, miles run",
        join_columns(.missing)
    )]
    MissingRequiredColumns { missing: Vec<CanonicalColumn> },

    /// A data row has too few fields to reach every required column.
    #[error("Row {row}: Incomplete data - expected at least {expected} columns")]
    IncompleteRow { row: usize, expected: usize },

    #[error("Row {row}: Invalid date format \"{raw}\"")]
    InvalidDate { row: usize, raw: String },

    #[error("Row {row}: Person name cannot be empty")]
    EmptyPersonName { row: usize },

    #[error("Row {row}: Invalid miles value \"{raw}\"")]
    InvalidMiles { row: usize, raw: String },

    /// Header present, but no data rows followed it.
    #[error("No valid data rows found in CSV")]
    NoDataRows,
}

impl ParseIssue {
    /// `true` for whole-file failures that stop ingestion before any row is read.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::MissingRequiredColumns { .. })
    }

    /// The offending row number, for row-level issues.
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::IncompleteRow { row, .. }
            | Self::InvalidDate { row, .. }
            | Self::EmptyPersonName { row }
            | Self::InvalidMiles { row, .. } => Some(*row),
            Self::EmptyInput | Self::MissingRequiredColumns { .. } | Self::NoDataRows => None,
        }
    }
}

fn join_columns(columns: &[CanonicalColumn]) -> String {
    columns
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_message_lists_every_column() {
        let issue = ParseIssue::MissingRequiredColumns {
            missing: vec![CanonicalColumn::Person, CanonicalColumn::MilesRun],
        };
        assert_eq!(
            issue.to_string(),
            "Missing required columns: person, miles run. Expected columns: date, person, miles run"
        );
        assert!(issue.is_structural());
        assert_eq!(issue.row(), None);
    }

    #[test]
    fn row_level_messages_quote_the_raw_value() {
        let issue = ParseIssue::InvalidDate {
            row: 3,
            raw: "2024-13-40".to_string(),
        };
        assert_eq!(issue.to_string(), "Row 3: Invalid date format \"2024-13-40\"");
        assert!(!issue.is_structural());
        assert_eq!(issue.row(), Some(3));

        let issue = ParseIssue::InvalidMiles {
            row: 7,
            raw: "abc".to_string(),
        };
        assert_eq!(issue.to_string(), "Row 7: Invalid miles value \"abc\"");
    }

    #[test]
    fn no_data_rows_is_not_structural() {
        assert!(!ParseIssue::NoDataRows.is_structural());
        assert_eq!(ParseIssue::NoDataRows.to_string(), "No valid data rows found in CSV");
    }
}
