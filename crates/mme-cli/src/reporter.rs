//! Console progress for a running tagging job.

use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::{debug, warn};

use mme_core::EventSink;
use mme_model::{ProgressSnapshot, RunEvent};

const BAR_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {bar:32.cyan/blue} {pos}/{len} {wide_msg}";

/// Drives an `indicatif` bar from engine events and forwards failures to
/// the diagnostic log.
///
/// The start banner and progress lines are always written to stderr,
/// above the bar when it is drawn.
pub struct ProgressReporter {
    bar: ProgressBar,
    visible: bool,
    errors: usize,
    successes: usize,
}

impl ProgressReporter {
    /// A reporter drawing to stderr, or drawing nothing when `visible` is
    /// false.
    pub fn new(visible: bool) -> Self {
        let target = if visible {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        let bar = ProgressBar::with_draw_target(None, target);
        if let Ok(style) = ProgressStyle::with_template(BAR_TEMPLATE) {
            bar.set_style(style.progress_chars("=> "));
        }
        Self {
            bar,
            visible,
            errors: 0,
            successes: 0,
        }
    }

    /// Error entries seen so far.
    pub fn errors(&self) -> usize {
        self.errors
    }

    /// Success entries seen so far.
    pub fn successes(&self) -> usize {
        self.successes
    }

    fn announce(&self, line: &str) {
        if self.visible {
            self.bar.println(line);
        } else {
            eprintln!("{line}");
        }
    }
}

pub fn started_line(input: &Path, root: &Path, rows: usize, started_at: &str) -> String {
    format!(
        "Started at {started_at}: {rows} rows from {} (images under {})",
        input.display(),
        root.display()
    )
}

pub fn progress_line(snapshot: &ProgressSnapshot) -> String {
    format!(
        "Progress: {}/{}. Errors: {}, Successes: {}",
        snapshot.processed, snapshot.total, snapshot.errors, snapshot.successes
    )
}

/// Console line shown while a phase runs, e.g. `3/10 - WRITE DC TAGS on a.jpg`.
pub fn status_line(position: usize, total: usize, action: &str, file_name: &str) -> String {
    format!("{}/{total} - {action} on {file_name}", position + 1)
}

impl EventSink for ProgressReporter {
    fn emit(&mut self, event: RunEvent) {
        match event {
            RunEvent::Started {
                input,
                root,
                rows,
                started_at,
            } => {
                self.bar.set_length(rows as u64);
                self.bar.enable_steady_tick(Duration::from_millis(120));
                self.announce(&started_line(&input, &root, rows, &started_at));
            }
            RunEvent::Progress(snapshot) => {
                self.bar.set_position(snapshot.processed as u64);
                self.announce(&progress_line(&snapshot));
            }
            RunEvent::Status {
                position,
                total,
                action,
                file_name,
            } => {
                self.bar.set_position(position as u64);
                self.bar.set_message(format!(
                    "{} (errors: {}, successes: {})",
                    status_line(position, total, &action, &file_name),
                    self.errors,
                    self.successes
                ));
            }
            RunEvent::RowError { row, entry } => {
                self.errors += 1;
                self.bar.suspend(|| warn!(row, "{entry}"));
            }
            RunEvent::OperationError {
                row,
                standard,
                entry,
            } => {
                self.errors += 1;
                self.bar.suspend(|| warn!(row, %standard, "{entry}"));
            }
            RunEvent::MissingKey {
                row,
                standard,
                column,
                entry,
            } => {
                self.errors += 1;
                self.bar
                    .suspend(|| warn!(row, %standard, column = %column, "{entry}"));
            }
            RunEvent::Success { row, entry } => {
                self.successes += 1;
                debug!(row, "{entry}");
            }
            RunEvent::LogsWritten {
                error_log,
                success_log,
            } => {
                debug!(
                    error_log = %error_log.display(),
                    success_log = %success_log.display(),
                    "logs persisted"
                );
            }
            RunEvent::Finished(summary) => {
                self.bar.set_position(summary.rows as u64);
                self.bar.finish_and_clear();
            }
        }
    }
}
