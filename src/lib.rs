//! `runlog-stats` turns loosely formatted running logs (date, person, distance) into validated
//! [`types::RunnerEntry`] values, then summarizes them for dashboards and charts.
//!
//! The primary entrypoint is [`ingestion::parse_csv`], which never fails: structural problems
//! (empty input, missing columns) and per-row problems are collected in the returned
//! [`types::ParseResult`] alongside every row that did validate.
//!
//! ## What the ingestion accepts
//!
//! **Headers** (trimmed, case-insensitive, any column order; extra columns are ignored):
//!
//! - `date`: `date`, `run_date`, `rundate`, `day`
//! - `person`: `person`, `name`, `runner`, `athlete`
//! - `miles run`: `miles run`, `miles_run`, `milesrun`, `miles`, `distance`
//!
//! **Dates:** `YYYY-MM-DD`, `MM/DD/YYYY`, `MM-DD-YYYY`, `M/D/YYYY`, plus a few fallback layouts
//! (`YYYY/MM/DD`, ISO date-times, `January 5, 2024`). The calendar day is kept exactly as
//! written; no time-zone conversion happens.
//!
//! **Distances:** anything that reads as a non-negative number once units and separators are
//! stripped (`3.5`, `3.5 mi`, `"1,204.5"`), rounded to 2 decimal places.
//!
//! **Quoting:** fields wrapped in `"` may contain commas. Doubled quotes (`""`) are not treated as
//! escapes.
//!
//! ## Quick example: ingest and summarize
//!
//! ```rust
//! use runlog_stats::ingestion::parse_csv;
//! use runlog_stats::processing::{compute_overall_stats, compute_person_stats};
//!
//! let csv = "Date,Runner,Distance\n\
//!            2024-01-01,Alice,3.5\n\
//!            01/01/2024,Bob,4.2 mi\n\
//!            2024-13-40,Bob,5\n\
//!            2024-01-02,Alice,2.8\n";
//!
//! let result = parse_csv(csv);
//! assert_eq!(result.data().len(), 3);
//! assert_eq!(result.error_messages(), vec!["Row 4: Invalid date format \"2024-13-40\""]);
//! assert!(!result.is_valid());
//!
//! let overall = compute_overall_stats(result.data());
//! assert_eq!(overall.total_miles, 10.5);
//! assert_eq!(overall.date_range.start.map(|d| d.to_string()).as_deref(), Some("2024-01-01"));
//!
//! let people = compute_person_stats(result.data());
//! assert_eq!(people[0].name, "Alice");
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: header/date/distance normalization, line tokenizing, the CSV pipeline, and
//!   observer-based reporting
//! - [`processing`]: overall and per-person statistics, chart pivots, filtering, ordering
//! - [`types`]: entries, parse results, and statistics view models
//! - [`export`]: CSV export of entries, JSON export of view models, sample data
//! - [`error`]: parse issues and I/O error types

pub mod error;
pub mod export;
pub mod ingestion;
pub mod processing;
pub mod types;

pub use error::{IngestionError, IngestionResult, ParseIssue};
