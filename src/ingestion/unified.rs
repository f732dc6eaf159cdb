//! Observed ingestion entrypoints.
//!
//! [`ingest_from_str`] and [`ingest_from_path`] run the same pipeline as
//! [`super::csv::parse_csv`], and additionally report the outcome to an
//! [`super::observability::IngestionObserver`] when one is configured in [`IngestionOptions`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::IngestionResult;
use crate::types::ParseResult;

use super::csv;
use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};

/// Options controlling observed ingestion.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Parse in-memory text, reporting the outcome under the label `source`.
///
/// When an observer is configured, this function reports:
///
/// - `on_row_rejected` for each rejected row, in row order
/// - `on_success` if at least one entry was produced, with row count stats
/// - `on_failure` otherwise, once per whole-file issue
/// - `on_alert` for a failure whose severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use runlog_stats::ingestion::{ingest_from_str, IngestionOptions, IngestionSeverity, StdErrObserver};
///
/// let opts = IngestionOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     alert_at_or_above: IngestionSeverity::Error,
/// };
///
/// let result = ingest_from_str("date,person,miles\n2024-01-01,Alice,3.5\n", "upload", &opts);
/// assert!(result.is_valid());
/// ```
pub fn ingest_from_str(content: &str, source: &str, options: &IngestionOptions) -> ParseResult {
    let result = csv::parse_csv(content);
    if let Some(obs) = options.observer.as_ref() {
        report(obs.as_ref(), &IngestionContext::new(source), &result, options.alert_at_or_above);
    }
    result
}

/// Read and parse a file, reporting the outcome to the configured observer.
///
/// I/O failures are reported as [`IngestionSeverity::Critical`] and returned as errors; problems
/// in the text itself are reported (see [`ingest_from_str`]) and returned inside the
/// [`ParseResult`].
///
/// ```no_run
/// use runlog_stats::ingestion::{ingest_from_path, IngestionOptions};
///
/// # fn main() -> Result<(), runlog_stats::IngestionError> {
/// let result = ingest_from_path("runs.csv", &IngestionOptions::default())?;
/// for message in result.error_messages() {
///     eprintln!("{message}");
/// }
/// # Ok(())
/// # }
/// ```
pub fn ingest_from_path(path: impl AsRef<Path>, options: &IngestionOptions) -> IngestionResult<ParseResult> {
    let path = path.as_ref();
    let ctx = IngestionContext::new(path.display().to_string());

    let result = csv::parse_csv_from_path(path);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(parsed) => report(obs.as_ref(), &ctx, parsed, options.alert_at_or_above),
            Err(e) => {
                let sev = IngestionSeverity::Critical;
                let message = e.to_string();
                obs.on_failure(&ctx, sev, &message);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, &message);
                }
            }
        }
    }

    result
}

fn report(obs: &dyn IngestionObserver, ctx: &IngestionContext, result: &ParseResult, alert_at: IngestionSeverity) {
    let mut stats = IngestionStats {
        rows_accepted: result.data().len(),
        ..Default::default()
    };

    for issue in result.errors() {
        let sev = IngestionSeverity::of(issue);
        if issue.row().is_some() {
            stats.rows_rejected += 1;
            obs.on_row_rejected(ctx, issue);
        } else {
            let message = issue.to_string();
            obs.on_failure(ctx, sev, &message);
            if sev >= alert_at {
                obs.on_alert(ctx, sev, &message);
            }
        }
    }
    stats.rows_read = stats.rows_accepted + stats.rows_rejected;

    if result.data().is_empty() {
        if stats.rows_rejected > 0 {
            let sev = IngestionSeverity::Error;
            let message = format!("all {} data rows were rejected", stats.rows_rejected);
            obs.on_failure(ctx, sev, &message);
            if sev >= alert_at {
                obs.on_alert(ctx, sev, &message);
            }
        }
    } else {
        obs.on_success(ctx, stats);
    }
}

/// Convenience helper for callers that want an owned request object.
#[derive(Clone)]
pub struct IngestionRequest {
    /// Path to the running log.
    pub path: PathBuf,
    /// Options controlling ingestion.
    pub options: IngestionOptions,
}

impl fmt::Debug for IngestionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionRequest")
            .field("path", &self.path)
            .field("options", &self.options)
            .finish()
    }
}

impl IngestionRequest {
    /// Execute the request by calling [`ingest_from_path`].
    pub fn run(&self) -> IngestionResult<ParseResult> {
        ingest_from_path(&self.path, &self.options)
    }
}
