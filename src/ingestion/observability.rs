use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ParseIssue;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// Informational event.
    Info,
    /// A rejected row; ingestion continued.
    Warning,
    /// Nothing usable came out of the input (empty file, missing columns, no data rows).
    Error,
    /// The input could not be read at all (I/O failure).
    Critical,
}

impl IngestionSeverity {
    /// Severity of a parse issue: row-level issues are warnings, everything else an error.
    pub fn of(issue: &ParseIssue) -> Self {
        if issue.row().is_some() {
            Self::Warning
        } else {
            Self::Error
        }
    }
}

/// Context about an ingestion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionContext {
    /// Where the text came from: a file path, or a caller-supplied label for in-memory text.
    pub source: String,
}

impl IngestionContext {
    pub fn new(source: impl Into<String>) -> Self {
        Self { source: source.into() }
    }
}

/// Row counts reported when ingestion finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestionStats {
    /// Data rows examined (header excluded, blank lines skipped).
    pub rows_read: usize,
    /// Rows that became entries.
    pub rows_accepted: usize,
    /// Rows rejected with a row-level issue.
    pub rows_rejected: usize,
}

/// Observer interface for ingestion outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts. All hooks default to no-ops.
pub trait IngestionObserver: Send + Sync {
    /// Called once per ingestion that produced at least one entry.
    fn on_success(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    /// Called for every rejected row, in row order.
    fn on_row_rejected(&self, _ctx: &IngestionContext, _issue: &ParseIssue) {}

    /// Called when ingestion produced no entries, or the source could not be read.
    ///
    /// `message` is the user-facing error text.
    fn on_failure(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _message: &str) {}

    /// Called when a failure meets the configured alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, message: &str) {
        self.on_failure(ctx, severity, message)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IngestionObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn IngestionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl IngestionObserver for CompositeObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_row_rejected(&self, ctx: &IngestionContext, issue: &ParseIssue) {
        for o in &self.observers {
            o.on_row_rejected(ctx, issue);
        }
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, message: &str) {
        for o in &self.observers {
            o.on_failure(ctx, severity, message);
        }
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, message: &str) {
        for o in &self.observers {
            o.on_alert(ctx, severity, message);
        }
    }
}

/// Logs ingestion events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl IngestionObserver for StdErrObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        eprintln!(
            "[ingest][ok] source={} rows_read={} accepted={} rejected={}",
            ctx.source, stats.rows_read, stats.rows_accepted, stats.rows_rejected
        );
    }

    fn on_row_rejected(&self, ctx: &IngestionContext, issue: &ParseIssue) {
        eprintln!("[ingest][Warning] source={} {issue}", ctx.source);
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, message: &str) {
        eprintln!("[ingest][{severity:?}] source={} err={message}", ctx.source);
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, message: &str) {
        eprintln!("[ALERT][ingest][{severity:?}] source={} err={message}", ctx.source);
    }
}

/// Forwards ingestion events to `tracing`, for hosts that already run a subscriber.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl IngestionObserver for TracingObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        tracing::info!(
            source = %ctx.source,
            rows_read = stats.rows_read,
            rows_accepted = stats.rows_accepted,
            rows_rejected = stats.rows_rejected,
            "running log ingested"
        );
    }

    fn on_row_rejected(&self, ctx: &IngestionContext, issue: &ParseIssue) {
        tracing::warn!(source = %ctx.source, row = issue.row(), "{issue}");
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, message: &str) {
        tracing::error!(source = %ctx.source, ?severity, "{message}");
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, message: &str) {
        tracing::error!(source = %ctx.source, ?severity, alert = true, "{message}");
    }
}

/// Appends ingestion events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl IngestionObserver for FileObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        self.append_line(&format!(
            "{} ok source={} rows_read={} accepted={} rejected={}",
            unix_ts(),
            ctx.source,
            stats.rows_read,
            stats.rows_accepted,
            stats.rows_rejected
        ));
    }

    fn on_row_rejected(&self, ctx: &IngestionContext, issue: &ParseIssue) {
        self.append_line(&format!("{} reject source={} {issue}", unix_ts(), ctx.source));
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, message: &str) {
        self.append_line(&format!(
            "{} fail severity={severity:?} source={} err={message}",
            unix_ts(),
            ctx.source
        ));
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, message: &str) {
        self.append_line(&format!(
            "{} ALERT severity={severity:?} source={} err={message}",
            unix_ts(),
            ctx.source
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
