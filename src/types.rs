//! Core data model: validated entries, the ingestion result, and the statistics view models.
//!
//! Everything here is a plain value type. The view models derive [`serde::Serialize`] with
//! camelCase field names, which is the shape the presentation layer consumes.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::error::ParseIssue;

/// One of the three columns every running log must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CanonicalColumn {
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "person")]
    Person,
    #[serde(rename = "miles run")]
    MilesRun,
}

impl CanonicalColumn {
    /// Required columns, in the order they are reported.
    pub const ALL: [CanonicalColumn; 3] = [Self::Date, Self::Person, Self::MilesRun];

    /// Canonical header text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Person => "person",
            Self::MilesRun => "miles run",
        }
    }

    /// Resolve an already-normalized header name.
    pub fn from_canonical(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for CanonicalColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validated run: who ran, on which calendar day, and how far.
///
/// Invariants (enforced by every constructor):
///
/// - `person` is trimmed and non-empty
/// - `miles_run` is finite, `>= 0`, and rounded to 2 decimal places
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerEntry {
    date: NaiveDate,
    person: String,
    miles_run: f64,
}

impl RunnerEntry {
    /// Build an entry, returning `None` if the person is blank or the distance is negative or
    /// not finite. The distance is rounded to 2 decimal places.
    pub fn new(date: NaiveDate, person: impl AsRef<str>, miles_run: f64) -> Option<Self> {
        let person = person.as_ref().trim();
        if person.is_empty() || !miles_run.is_finite() || miles_run < 0.0 {
            return None;
        }
        Some(Self {
            date,
            person: person.to_owned(),
            miles_run: round2(miles_run),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn person(&self) -> &str {
        &self.person
    }

    pub fn miles_run(&self) -> f64 {
        self.miles_run
    }
}

/// Output of the CSV ingestion pipeline.
///
/// `data` keeps input row order with rejected rows skipped. `errors` keeps encounter order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    data: Vec<RunnerEntry>,
    #[serde(serialize_with = "serialize_issue_messages")]
    errors: Vec<ParseIssue>,
    is_valid: bool,
}

impl ParseResult {
    /// `is_valid` is derived: no errors and at least one entry.
    pub fn new(data: Vec<RunnerEntry>, errors: Vec<ParseIssue>) -> Self {
        let is_valid = errors.is_empty() && !data.is_empty();
        Self {
            data,
            errors,
            is_valid,
        }
    }

    /// A result carrying a single structural failure and no data.
    pub fn failed(issue: ParseIssue) -> Self {
        Self::new(Vec::new(), vec![issue])
    }

    pub fn data(&self) -> &[RunnerEntry] {
        &self.data
    }

    pub fn errors(&self) -> &[ParseIssue] {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Human-readable error strings, in encounter order.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn into_data(self) -> Vec<RunnerEntry> {
        self.data
    }
}

fn serialize_issue_messages<S: Serializer>(issues: &[ParseIssue], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(issues.iter().map(ToString::to_string))
}

/// First and last calendar day covered by a set of entries.
///
/// Both ends are `None` for an empty entry set; they serialize as empty strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    #[serde(serialize_with = "serialize_optional_date")]
    pub start: Option<NaiveDate>,
    #[serde(serialize_with = "serialize_optional_date")]
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

fn serialize_optional_date<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
    match date {
        Some(d) => s.collect_str(d),
        None => s.serialize_str(""),
    }
}

/// Summary statistics over an entry set (the whole dataset or a filtered subset).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub total_miles: f64,
    pub average_miles: f64,
    pub min_miles: f64,
    pub max_miles: f64,
    pub total_runs: usize,
    pub unique_runners: usize,
    pub date_range: DateRange,
}

/// Statistics for one runner.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonStats {
    pub name: String,
    pub total_miles: f64,
    pub average_miles: f64,
    pub min_miles: f64,
    pub max_miles: f64,
    pub run_count: usize,
    /// This runner's entries, ascending by date (stable on input order).
    pub entries: Vec<RunnerEntry>,
}

/// One date in the chart pivot: every runner in the dataset mapped to their miles on that date.
///
/// Runners without an entry on `date` carry `0.0`. Serializes flat, as
/// `{"date": "2024-01-01", "Alice": 3.5, "Bob": 0.0}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataPoint {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

impl ChartDataPoint {
    /// Miles for `person` on this date; `0.0` for names not in the dataset.
    pub fn miles_for(&self, person: &str) -> f64 {
        self.values.get(person).copied().unwrap_or(0.0)
    }
}

/// Bar-chart series item: a runner and their total miles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonTotal {
    pub name: String,
    pub miles: f64,
}

/// Round to 2 decimal places, half away from zero. Normalizes `-0.0` to `0.0`.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn runner_entry_enforces_invariants() {
        let e = RunnerEntry::new(day(2024, 1, 1), "  Alice ", 3.456).unwrap();
        assert_eq!(e.person(), "Alice");
        assert_eq!(e.miles_run(), 3.46);

        assert!(RunnerEntry::new(day(2024, 1, 1), "   ", 1.0).is_none());
        assert!(RunnerEntry::new(day(2024, 1, 1), "Bob", -0.5).is_none());
        assert!(RunnerEntry::new(day(2024, 1, 1), "Bob", f64::NAN).is_none());
        assert!(RunnerEntry::new(day(2024, 1, 1), "Bob", f64::INFINITY).is_none());
    }

    #[test]
    fn parse_result_validity_requires_data_and_no_errors() {
        let entry = RunnerEntry::new(day(2024, 1, 1), "Alice", 1.0).unwrap();

        assert!(ParseResult::new(vec![entry.clone()], vec![]).is_valid());
        assert!(!ParseResult::new(vec![], vec![]).is_valid());
        assert!(!ParseResult::new(vec![entry], vec![ParseIssue::EmptyPersonName { row: 3 }]).is_valid());
        assert!(!ParseResult::failed(ParseIssue::EmptyInput).is_valid());
    }

    #[test]
    fn parse_result_serializes_camel_case_with_message_strings() {
        let entry = RunnerEntry::new(day(2024, 1, 2), "Alice", 2.8).unwrap();
        let result = ParseResult::new(vec![entry], vec![ParseIssue::EmptyPersonName { row: 3 }]);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "data": [{"date": "2024-01-02", "person": "Alice", "milesRun": 2.8}],
                "errors": ["Row 3: Person name cannot be empty"],
                "isValid": false,
            })
        );
    }

    #[test]
    fn empty_date_range_serializes_as_empty_strings() {
        let json = serde_json::to_value(DateRange::default()).unwrap();
        assert_eq!(json, serde_json::json!({"start": "", "end": ""}));
        assert!(DateRange::default().is_empty());
    }

    #[test]
    fn chart_point_serializes_flat() {
        let point = ChartDataPoint {
            date: day(2024, 1, 1),
            values: BTreeMap::from([("Alice".to_string(), 3.5), ("Bob".to_string(), 0.0)]),
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json, serde_json::json!({"date": "2024-01-01", "Alice": 3.5, "Bob": 0.0}));
        assert_eq!(point.miles_for("Carol"), 0.0);
    }

    #[test]
    fn round2_rounds_half_away_from_zero() {
        assert_eq!(round2(1.125), 1.13);
        assert_eq!(round2(10.0), 10.0);
        assert_eq!(round2(-0.001).to_bits(), 0.0f64.to_bits());
    }
}
