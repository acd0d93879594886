//! Run-scoped state shared by the coordinator and the row processor.

use mme_model::{LogEntry, LogKind, ProgressSnapshot, RunEvent, RunLog, Standard};

/// Receiver for engine events.
///
/// Front ends implement this to drive their own output; the engine never
/// prints.
pub trait EventSink {
    fn emit(&mut self, event: RunEvent);
}

impl<F: FnMut(RunEvent)> EventSink for F {
    fn emit(&mut self, event: RunEvent) {
        self(event);
    }
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: RunEvent) {}
}

/// Owns the error and success logs for one run and forwards every
/// recorded entry to the sink as it happens.
pub struct RunContext<'s> {
    log: RunLog,
    total_rows: usize,
    sink: &'s mut dyn EventSink,
}

impl<'s> RunContext<'s> {
    pub fn new(total_rows: usize, sink: &'s mut dyn EventSink) -> Self {
        Self {
            log: RunLog::default(),
            total_rows,
            sink,
        }
    }

    pub fn log(&self) -> &RunLog {
        &self.log
    }

    pub fn into_log(self) -> RunLog {
        self.log
    }

    pub fn emit(&mut self, event: RunEvent) {
        self.sink.emit(event);
    }

    pub fn progress(&mut self, processed: usize) {
        let snapshot = ProgressSnapshot {
            processed,
            total: self.total_rows,
            errors: self.log.error_count(),
            successes: self.log.success_count(),
        };
        self.emit(RunEvent::Progress(snapshot));
    }

    pub fn status(&mut self, position: usize, action: String, file_name: &str) {
        let total = self.total_rows;
        self.emit(RunEvent::Status {
            position,
            total,
            action,
            file_name: file_name.to_string(),
        });
    }

    pub fn row_error(&mut self, row: usize, entry: LogEntry) {
        self.log.push(LogKind::Error, entry.clone());
        self.emit(RunEvent::RowError { row, entry });
    }

    pub fn operation_error(&mut self, row: usize, standard: Standard, entry: LogEntry) {
        self.log.push(LogKind::Error, entry.clone());
        self.emit(RunEvent::OperationError {
            row,
            standard,
            entry,
        });
    }

    pub fn missing_key(&mut self, row: usize, standard: Standard, column: &str, entry: LogEntry) {
        self.log.push(LogKind::Error, entry.clone());
        self.emit(RunEvent::MissingKey {
            row,
            standard,
            column: column.to_string(),
            entry,
        });
    }

    pub fn success(&mut self, row: usize, entry: LogEntry) {
        self.log.push(LogKind::Success, entry.clone());
        self.emit(RunEvent::Success { row, entry });
    }
}
