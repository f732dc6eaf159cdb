//! Export entries to CSV and view models to JSON.
//!
//! The CSV export uses the canonical header (`date,person,miles run`), so an exported file can be
//! fed straight back into [`crate::ingestion::parse_csv`].

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::IngestionResult;
use crate::types::{CanonicalColumn, RunnerEntry};

const SAMPLE_CSV: &str = "date,person,miles run
2024-01-01,Alice,3.5
2024-01-01,Bob,4.2
2024-01-02,Alice,2.8
2024-01-02,Bob,5.1
2024-01-02,Charlie,3.0
2024-01-03,Alice,4.0
2024-01-03,Charlie,2.5
2024-01-04,Bob,6.0
2024-01-04,Charlie,3.8
2024-01-05,Alice,5.2
2024-01-05,Bob,4.5
2024-01-05,Charlie,4.1";

/// A small, valid running log (three runners over five days) for templates and demos.
pub fn sample_csv() -> &'static str {
    SAMPLE_CSV
}

/// Write entries as CSV with the canonical header.
///
/// Names containing commas are quoted. Dates are written as `YYYY-MM-DD`.
pub fn write_entries_csv<W: Write>(writer: W, entries: &[RunnerEntry]) -> IngestionResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CanonicalColumn::ALL.map(CanonicalColumn::as_str))?;
    for entry in entries {
        wtr.write_record([
            entry.date().to_string(),
            entry.person().to_owned(),
            entry.miles_run().to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write entries as CSV to a file at `path` (created or truncated).
pub fn write_entries_csv_to_path(path: impl AsRef<Path>, entries: &[RunnerEntry]) -> IngestionResult<()> {
    let file = File::create(path)?;
    write_entries_csv(file, entries)
}

/// Pretty-print any view model (stats, chart points, parse results) as JSON.
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> IngestionResult<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    Ok(())
}
