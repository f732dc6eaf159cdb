//! Aggregations over validated entries.
//!
//! The processing layer operates on `&[RunnerEntry]` slices produced by ingestion. Every
//! function here is total and pure: the empty slice is valid input, and outputs depend only on
//! the entries and their order.
//!
//! Currently implemented:
//!
//! - [`compute_overall_stats()`] / [`compute_person_stats()`]: summary statistics
//! - [`prepare_chart_data()`]: date-indexed pivot for time-series charts
//! - [`total_by_person()`]: per-runner totals for bar charts
//! - [`filter_entries()`] / [`entries_for_person()`]: subsetting
//! - [`sort_entries()`]: table ordering
//!
//! ## Example: parse → stats → chart
//!
//! ```rust
//! use runlog_stats::ingestion::parse_csv;
//! use runlog_stats::processing::{compute_overall_stats, compute_person_stats, prepare_chart_data};
//!
//! let result = parse_csv("date,person,miles run\n2024-01-01,Alice,3.5\n2024-01-01,Bob,4.2\n2024-01-02,Alice,2.8\n");
//! assert!(result.is_valid());
//!
//! let overall = compute_overall_stats(result.data());
//! assert_eq!(overall.total_miles, 10.5);
//! assert_eq!(overall.unique_runners, 2);
//!
//! let people = compute_person_stats(result.data());
//! assert_eq!(people[0].name, "Alice");
//! assert_eq!(people[0].total_miles, 6.3);
//!
//! let chart = prepare_chart_data(result.data());
//! assert_eq!(chart.len(), 2);
//! assert_eq!(chart[1].miles_for("Bob"), 0.0);
//! ```

pub mod chart;
pub mod filter;
pub mod reduce;
pub mod sort;
pub mod stats;

pub use chart::{prepare_chart_data, total_by_person};
pub use filter::{compute_overall_stats_for, entries_for_person, filter_entries};
pub use reduce::{summarize, MilesSummary};
pub use sort::{sort_entries, SortDirection, SortField};
pub use stats::{compute_overall_stats, compute_person_stats};
