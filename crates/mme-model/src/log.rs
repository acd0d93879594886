//! Error and success log entries.
//!
//! Entry wording is stable: archivists grep the persisted logs for these
//! phrases, so constructors here are the only place messages are built.

use std::fmt;
use std::path::Path;

use crate::standard::Standard;

/// Which of the two run logs an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Error,
    Success,
}

impl LogKind {
    /// Prefix used for the persisted log file name.
    #[must_use]
    pub const fn file_prefix(self) -> &'static str {
        match self {
            Self::Error => "error_log",
            Self::Success => "success_log",
        }
    }
}

/// One line of an error or success log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry(String);

impl LogEntry {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn missing_file_name(row: usize) -> Self {
        Self(format!(r#"Row "{row}": No "File Name" column, or empty."#))
    }

    pub fn file_not_found(row: usize, file_name: &str) -> Self {
        Self(format!(
            r#"Row "{row}": File not found in this path: "{file_name}""#
        ))
    }

    pub fn delete_failed(standard: Standard, row: usize, path: &Path, error: &str) -> Self {
        Self(format!(
            r#"On {}: Row: "{row}", filepath: "{}", ERROR: "{error}""#,
            standard.delete_action(),
            path.display()
        ))
    }

    pub fn delete_succeeded(standard: Standard, row: usize, path: &Path, message: &str) -> Self {
        Self(format!(
            r#"On {}: Row: "{row}", filepath: "{}", SUCCESS: "{message}""#,
            standard.delete_action(),
            path.display()
        ))
    }

    pub fn write_failed(
        standard: Standard,
        row: usize,
        path: &Path,
        column: &str,
        error: &str,
    ) -> Self {
        Self(format!(
            r#"On {}: Row: "{row}", filepath: "{}", Row key: {column}, ERROR: "{error}""#,
            standard.write_action(),
            path.display()
        ))
    }

    pub fn missing_key(standard: Standard, row: usize, path: &Path, column: &str) -> Self {
        Self(format!(
            r#"MISSING KEY: {column} - On {}: Row: "{row}", filepath: "{}""#,
            standard.write_action(),
            path.display()
        ))
    }

    pub fn write_completed(standard: Standard, row: usize, path: &Path) -> Self {
        Self(format!(
            r#"On {}: Row: "{row}", filepath: "{}""#,
            standard.write_action(),
            path.display()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two append-only logs of a run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunLog {
    errors: Vec<LogEntry>,
    successes: Vec<LogEntry>,
}

impl RunLog {
    pub fn push(&mut self, kind: LogKind, entry: LogEntry) {
        match kind {
            LogKind::Error => self.errors.push(entry),
            LogKind::Success => self.successes.push(entry),
        }
    }

    pub fn entries(&self, kind: LogKind) -> &[LogEntry] {
        match kind {
            LogKind::Error => &self.errors,
            LogKind::Success => &self.successes,
        }
    }

    pub fn errors(&self) -> &[LogEntry] {
        &self.errors
    }

    pub fn successes(&self) -> &[LogEntry] {
        &self.successes
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn success_count(&self) -> usize {
        self.successes.len()
    }

    /// Newline-joined contents of one log, as persisted.
    pub fn render(&self, kind: LogKind) -> String {
        self.entries(kind)
            .iter()
            .map(LogEntry::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
