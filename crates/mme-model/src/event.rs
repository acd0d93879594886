//! Events the engine reports while processing a table.
//!
//! Front ends subscribe to these instead of the engine printing anything
//! itself.

use std::path::PathBuf;

use serde::Serialize;

use crate::log::LogEntry;
use crate::standard::Standard;

/// Running counts at a progress checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    /// Rows fully processed so far.
    pub processed: usize,
    pub total: usize,
    pub errors: usize,
    pub successes: usize,
}

/// Final counts of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub rows: usize,
    pub errors: usize,
    pub successes: usize,
    pub elapsed_ms: u128,
    pub error_log: Option<PathBuf>,
    pub success_log: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    /// The run is about to process its first row.
    Started {
        input: PathBuf,
        root: PathBuf,
        rows: usize,
        started_at: String,
    },
    /// Emitted every `progress_interval` rows, including before the first.
    Progress(ProgressSnapshot),
    /// A delete or write phase is starting on a file.
    Status {
        position: usize,
        total: usize,
        action: String,
        file_name: String,
    },
    /// A row was abandoned.
    RowError { row: usize, entry: LogEntry },
    /// A single tool invocation failed.
    OperationError {
        row: usize,
        standard: Standard,
        entry: LogEntry,
    },
    /// A mapped column is absent from the row.
    MissingKey {
        row: usize,
        standard: Standard,
        column: String,
        entry: LogEntry,
    },
    /// A success log entry was recorded.
    Success { row: usize, entry: LogEntry },
    /// Both logs were written to disk.
    LogsWritten {
        error_log: PathBuf,
        success_log: PathBuf,
    },
    Finished(RunSummary),
}
