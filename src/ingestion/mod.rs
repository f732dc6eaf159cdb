//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`parse_csv`] (from [`csv`]), which turns running-log text into a
//! [`crate::types::ParseResult`]. The building blocks are public as well:
//!
//! - [`normalize`]: header synonyms, date layouts, distance parsing
//! - [`tokenizer`]: quote-aware line splitting
//! - [`unified`]: the same pipeline with [`IngestionOptions`] and observer reporting

pub mod csv;
pub mod normalize;
pub mod observability;
pub mod tokenizer;
pub mod unified;

pub use self::csv::{parse_csv, parse_csv_from_path, parse_csv_from_reader};
pub use normalize::{column_for_header, normalize_header, parse_date, parse_miles};
pub use observability::{
    CompositeObserver, FileObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
    StdErrObserver, TracingObserver,
};
pub use tokenizer::split_line;
pub use unified::{ingest_from_path, ingest_from_str, IngestionOptions, IngestionRequest};
