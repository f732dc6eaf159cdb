//! Header, date, and distance normalization.
//!
//! Running logs come from spreadsheets, watches, and hand-edited files, so the same column shows
//! up under several names and dates arrive in a handful of layouts. This module maps all of them
//! onto the canonical forms the pipeline validates against.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::types::{CanonicalColumn, round2};

/// Header spellings accepted for each canonical column (compared after trim + lowercase).
const HEADER_SYNONYMS: [(CanonicalColumn, &[&str]); 3] = [
    (CanonicalColumn::Date, &["date", "run_date", "rundate", "day"]),
    (CanonicalColumn::Person, &["person", "name", "runner", "athlete"]),
    (
        CanonicalColumn::MilesRun,
        &["miles run", "miles_run", "milesrun", "miles", "distance"],
    ),
];

/// Date layouts recognized by shape, checked in order. Capture groups are year, month, day.
#[derive(Debug, Clone, Copy)]
enum DateShape {
    /// `YYYY-MM-DD`
    Iso,
    /// `MM/DD/YYYY`
    UsSlash,
    /// `MM-DD-YYYY`
    UsDash,
    /// `M/D/YYYY`
    UsSlashShort,
}

impl DateShape {
    const ALL: [DateShape; 4] = [Self::Iso, Self::UsSlash, Self::UsDash, Self::UsSlashShort];

    fn regex(self) -> &'static Regex {
        match self {
            Self::Iso => &ISO_DATE,
            Self::UsSlash => &US_SLASH_DATE,
            Self::UsDash => &US_DASH_DATE,
            Self::UsSlashShort => &US_SLASH_SHORT_DATE,
        }
    }

    fn year_month_day_groups(self) -> (usize, usize, usize) {
        match self {
            Self::Iso => (1, 2, 3),
            Self::UsSlash | Self::UsDash | Self::UsSlashShort => (3, 1, 2),
        }
    }
}

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid date regex"));
static US_SLASH_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})/(\d{2})/(\d{4})$").expect("valid date regex"));
static US_DASH_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})-(\d{2})-(\d{4})$").expect("valid date regex"));
static US_SLASH_SHORT_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("valid date regex"));

/// Longest leading decimal number, e.g. `3.5` in `3.5.1`.
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(?:\d+(?:\.\d*)?|\.\d+)").expect("valid number regex"));

/// Fallback layouts for dates that match none of the shapes above.
const FALLBACK_DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

const FALLBACK_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Map raw header text to its canonical column name.
///
/// Input is trimmed and lowercased (a leading byte-order mark is dropped). Unrecognized headers
/// come back in that normalized form, so re-normalizing any output is a no-op.
pub fn normalize_header(raw: &str) -> String {
    let normalized = raw.trim().trim_start_matches('\u{feff}').trim().to_lowercase();
    match resolve_column(&normalized) {
        Some(column) => column.as_str().to_owned(),
        None => normalized,
    }
}

/// Resolve raw header text to a canonical column, if it is a known synonym.
pub fn column_for_header(raw: &str) -> Option<CanonicalColumn> {
    CanonicalColumn::from_canonical(&normalize_header(raw))
}

fn resolve_column(normalized: &str) -> Option<CanonicalColumn> {
    HEADER_SYNONYMS
        .iter()
        .find(|(_, synonyms)| synonyms.contains(&normalized))
        .map(|(column, _)| *column)
}

/// Parse a calendar date written in one of the supported layouts.
///
/// Shape-matched layouts are tried first (`YYYY-MM-DD`, `MM/DD/YYYY`, `MM-DD-YYYY`,
/// `M/D/YYYY`); anything else goes through a small set of fallback layouts. Impossible dates
/// (month 13, February 30th) are rejected rather than rolled over. Times and offsets are ignored:
/// the calendar day is taken exactly as written.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();

    for shape in DateShape::ALL {
        let Some(caps) = shape.regex().captures(trimmed) else {
            continue;
        };
        let (y, m, d) = shape.year_month_day_groups();
        let year = caps[y].parse::<i32>().ok();
        let month = caps[m].parse::<u32>().ok();
        let day = caps[d].parse::<u32>().ok();
        if let (Some(year), Some(month), Some(day)) = (year, month, day) {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                return Some(date);
            }
        }
    }

    parse_date_fallback(trimmed)
}

fn parse_date_fallback(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local().date());
    }
    FALLBACK_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            FALLBACK_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Parse a distance in miles.
///
/// Every character other than digits, `.` and `-` is discarded first, so `"3.5 mi"` and
/// `"1,204.5"` both parse. The longest leading number of what remains is used. Negative or
/// unparseable values yield `None`; results are rounded to 2 decimal places.
pub fn parse_miles(raw: &str) -> Option<f64> {
    let stripped: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let number = LEADING_NUMBER.find(&stripped)?;
    let miles = number.as_str().parse::<f64>().ok()?;
    if !miles.is_finite() || miles < 0.0 {
        return None;
    }
    Some(round2(miles))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn header_synonyms_map_to_canonical_names() {
        for raw in ["Date", " RUN_DATE ", "rundate", "Day"] {
            assert_eq!(normalize_header(raw), "date", "{raw}");
        }
        for raw in ["Person", "name", "Runner", "ATHLETE"] {
            assert_eq!(normalize_header(raw), "person", "{raw}");
        }
        for raw in ["Miles Run", "miles_run", "MilesRun", "miles", "Distance"] {
            assert_eq!(normalize_header(raw), "miles run", "{raw}");
        }
    }

    #[test]
    fn unknown_headers_come_back_trimmed_and_lowercased() {
        assert_eq!(normalize_header("  Pace  "), "pace");
        assert_eq!(column_for_header("Pace"), None);
        assert_eq!(column_for_header("Athlete"), Some(CanonicalColumn::Person));
    }

    #[test]
    fn header_normalization_is_idempotent() {
        for raw in ["date", "person", "miles run", "Kilometers", "RUN_DATE"] {
            let once = normalize_header(raw);
            assert_eq!(normalize_header(&once), once);
        }
    }

    #[test]
    fn byte_order_mark_is_ignored() {
        assert_eq!(normalize_header("\u{feff}date"), "date");
    }

    #[test]
    fn parses_each_supported_shape() {
        assert_eq!(parse_date("2024-01-05"), Some(day(2024, 1, 5)));
        assert_eq!(parse_date("01/05/2024"), Some(day(2024, 1, 5)));
        assert_eq!(parse_date("01-05-2024"), Some(day(2024, 1, 5)));
        assert_eq!(parse_date("1/5/2024"), Some(day(2024, 1, 5)));
        assert_eq!(parse_date("  12/31/2023 "), Some(day(2023, 12, 31)));
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        assert_eq!(parse_date("2024-13-40"), None);
        assert_eq!(parse_date("02/30/2024"), None);
        assert_eq!(parse_date("13/01/2024"), None);
        assert_eq!(parse_date("2023-02-29"), None);
        assert_eq!(parse_date("2024-02-29"), Some(day(2024, 2, 29)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2024"), None);
    }

    #[test]
    fn fallback_layouts_keep_the_written_calendar_day() {
        assert_eq!(parse_date("2024/03/09"), Some(day(2024, 3, 9)));
        assert_eq!(parse_date("2024-3-9"), Some(day(2024, 3, 9)));
        assert_eq!(parse_date("January 5, 2024"), Some(day(2024, 1, 5)));
        assert_eq!(parse_date("5 Jan 2024"), Some(day(2024, 1, 5)));
        assert_eq!(parse_date("2024-01-05T23:30:00"), Some(day(2024, 1, 5)));
        assert_eq!(parse_date("2024-01-05T23:30:00-08:00"), Some(day(2024, 1, 5)));
        assert_eq!(parse_date("2024-01-05T00:15:00+09:00"), Some(day(2024, 1, 5)));
    }

    #[test]
    fn iso_output_is_idempotent() {
        let date = parse_date("03/09/2024").unwrap();
        let iso = date.to_string();
        assert_eq!(iso, "2024-03-09");
        assert_eq!(parse_date(&iso).map(|d| d.to_string()), Some(iso));
    }

    #[test]
    fn miles_strip_units_and_separators() {
        assert_eq!(parse_miles("3.5"), Some(3.5));
        assert_eq!(parse_miles(" 3.5 mi "), Some(3.5));
        assert_eq!(parse_miles("1,204.5"), Some(1204.5));
        assert_eq!(parse_miles("0"), Some(0.0));
        assert_eq!(parse_miles(".5"), Some(0.5));
    }

    #[test]
    fn miles_round_to_two_decimals() {
        assert_eq!(parse_miles("2.456"), Some(2.46));
        assert_eq!(parse_miles("1.125"), Some(1.13));
        assert_eq!(parse_miles("7"), Some(7.0));
    }

    #[test]
    fn miles_use_the_leading_number() {
        assert_eq!(parse_miles("3.5.1"), Some(3.5));
        assert_eq!(parse_miles("5-2"), Some(5.0));
    }

    #[test]
    fn miles_reject_negative_and_non_numeric() {
        assert_eq!(parse_miles("-1"), None);
        assert_eq!(parse_miles("-0.25"), None);
        assert_eq!(parse_miles("abc"), None);
        assert_eq!(parse_miles(""), None);
        assert_eq!(parse_miles("-"), None);
        assert_eq!(parse_miles("."), None);
    }

    #[test]
    fn negative_zero_becomes_zero() {
        assert_eq!(parse_miles("-0").map(f64::to_bits), Some(0.0f64.to_bits()));
    }
}
