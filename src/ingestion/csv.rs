//! CSV ingestion pipeline.

use std::io::Read;
use std::path::Path;

use crate::error::{IngestionResult, ParseIssue};
use crate::types::{CanonicalColumn, ParseResult, RunnerEntry};

use super::normalize::{normalize_header, parse_date, parse_miles};
use super::tokenizer::{split_header, split_line};

/// Parse a running log into validated entries.
///
/// Rules:
///
/// - Blank lines are ignored everywhere; the first non-blank line is the header.
/// - The header must resolve (via the known synonyms, case-insensitively, any order) to all of
///   `date`, `person` and `miles run`. Otherwise nothing else is examined.
/// - Each data row is validated independently. A bad row is reported and skipped, and parsing
///   continues with the next one.
///
/// Row numbers in messages are 1-based over non-blank lines, with the header as row 1.
pub fn parse_csv(content: &str) -> ParseResult {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let Some((header_line, rows)) = lines.split_first() else {
        tracing::debug!("rejecting running log: no non-blank lines");
        return ParseResult::failed(ParseIssue::EmptyInput);
    };

    let headers: Vec<String> = split_header(header_line)
        .into_iter()
        .map(normalize_header)
        .collect();

    let layout = match ColumnLayout::resolve(&headers) {
        Ok(layout) => layout,
        Err(missing) => {
            tracing::debug!(?headers, ?missing, "rejecting running log: required columns missing");
            return ParseResult::failed(ParseIssue::MissingRequiredColumns { missing });
        }
    };
    tracing::trace!(?layout, rows = rows.len(), "resolved running log header");

    let mut data = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();
    for (idx, line) in rows.iter().enumerate() {
        // +2: 1-based, and the header is row 1.
        let row = idx + 2;
        match parse_row(row, line, &layout) {
            Ok(entry) => data.push(entry),
            Err(issue) => {
                tracing::debug!(row, "{issue}");
                errors.push(issue);
            }
        }
    }

    if data.is_empty() && errors.is_empty() {
        errors.push(ParseIssue::NoDataRows);
    }

    ParseResult::new(data, errors)
}

/// Read all of `reader` as UTF-8 text, then [`parse_csv`] it.
pub fn parse_csv_from_reader<R: Read>(mut reader: R) -> IngestionResult<ParseResult> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(parse_csv(&content))
}

/// Read a file as UTF-8 text, then [`parse_csv`] it.
pub fn parse_csv_from_path(path: impl AsRef<Path>) -> IngestionResult<ParseResult> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_csv(&content))
}

/// Field positions of the required columns within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnLayout {
    date: usize,
    person: usize,
    miles: usize,
    header_count: usize,
}

impl ColumnLayout {
    /// Locate each canonical column (first occurrence wins), or list the missing ones.
    fn resolve(headers: &[String]) -> Result<Self, Vec<CanonicalColumn>> {
        let position = |column: CanonicalColumn| headers.iter().position(|h| h == column.as_str());

        match (
            position(CanonicalColumn::Date),
            position(CanonicalColumn::Person),
            position(CanonicalColumn::MilesRun),
        ) {
            (Some(date), Some(person), Some(miles)) => Ok(Self {
                date,
                person,
                miles,
                header_count: headers.len(),
            }),
            _ => Err(CanonicalColumn::ALL
                .into_iter()
                .filter(|c| position(*c).is_none())
                .collect()),
        }
    }

    /// Fewest fields a row needs to reach every required column.
    fn min_fields(&self) -> usize {
        self.date.max(self.person).max(self.miles) + 1
    }
}

fn parse_row(row: usize, line: &str, layout: &ColumnLayout) -> Result<RunnerEntry, ParseIssue> {
    let fields = split_line(line);
    if fields.len() < layout.min_fields() {
        return Err(ParseIssue::IncompleteRow {
            row,
            expected: layout.header_count,
        });
    }

    let raw_date = &fields[layout.date];
    let date = parse_date(raw_date).ok_or_else(|| ParseIssue::InvalidDate {
        row,
        raw: raw_date.clone(),
    })?;

    let person = fields[layout.person].trim();
    if person.is_empty() {
        return Err(ParseIssue::EmptyPersonName { row });
    }

    let raw_miles = &fields[layout.miles];
    let invalid_miles = || ParseIssue::InvalidMiles {
        row,
        raw: raw_miles.clone(),
    };
    let miles = parse_miles(raw_miles).ok_or_else(invalid_miles)?;

    RunnerEntry::new(date, person, miles).ok_or_else(invalid_miles)
}
