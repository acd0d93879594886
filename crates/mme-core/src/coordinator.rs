//! Driving a whole table through the row processor.

use std::path::Path;
use std::time::Instant;

use chrono::Local;
use tracing::{info, info_span};

use mme_exiftool::MetadataTool;
use mme_ingest::{ConfigError, FileResolver, load_mapping_set, load_rows, validate_root};
use mme_model::{MappingSet, Row, RunEvent, RunLog, RunOptions, RunSummary};

use crate::context::{EventSink, RunContext};
use crate::error::Result;
use crate::persist::{DISPLAY_TIMESTAMP_FORMAT, LogFiles, write_logs};
use crate::processor::RowProcessor;

/// Everything a completed run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub summary: RunSummary,
    pub log: RunLog,
    pub log_files: LogFiles,
}

/// Load the mapping file, input table and root named by `options`, then
/// run.
///
/// Configuration is checked in that order and the first problem aborts the
/// run before any file is touched.
pub fn run_from_files<T: MetadataTool>(
    options: &RunOptions,
    mapping_path: &Path,
    tool: T,
    sink: &mut dyn EventSink,
) -> Result<RunReport> {
    let mappings = load_mapping_set(mapping_path)?;
    let rows = load_rows(&options.input)?;
    validate_root(&options.root)?;
    run(options, &mappings, &rows, tool, sink)
}

/// Process every row in order, then persist both logs.
///
/// # Errors
///
/// Returns early, without writing logs, on an invalid progress interval or
/// a broken tool integration. Failing to write the logs is also an error.
pub fn run<T: MetadataTool>(
    options: &RunOptions,
    mappings: &MappingSet,
    rows: &[Row],
    tool: T,
    sink: &mut dyn EventSink,
) -> Result<RunReport> {
    if options.progress_interval == 0 {
        return Err(ConfigError::InvalidProgressInterval {
            value: options.progress_interval,
        }
        .into());
    }
    let span = info_span!("run", input = %options.input.display(), rows = rows.len());
    let _guard = span.enter();

    let started_at = Local::now();
    let clock = Instant::now();
    info!(
        root = %options.root.display(),
        max_depth = options.max_depth,
        "starting run"
    );
    sink.emit(RunEvent::Started {
        input: options.input.clone(),
        root: options.root.clone(),
        rows: rows.len(),
        started_at: started_at.format(DISPLAY_TIMESTAMP_FORMAT).to_string(),
    });

    let resolver = FileResolver::new(&options.root, options.max_depth);
    let mut processor = RowProcessor::new(mappings, &resolver, tool)
        .with_notify_broken_keys(options.notify_broken_keys);
    let mut ctx = RunContext::new(rows.len(), sink);
    for row in rows {
        if row.position() % options.progress_interval == 0 {
            ctx.progress(row.position());
        }
        processor.process_row(row, &mut ctx)?;
    }
    let log = ctx.into_log();

    let log_files = LogFiles::for_run(&options.log_dir, &options.input, &started_at);
    write_logs(&log, &log_files)?;
    sink.emit(RunEvent::LogsWritten {
        error_log: log_files.error_log.clone(),
        success_log: log_files.success_log.clone(),
    });

    let summary = RunSummary {
        rows: rows.len(),
        errors: log.error_count(),
        successes: log.success_count(),
        elapsed_ms: clock.elapsed().as_millis(),
        error_log: Some(log_files.error_log.clone()),
        success_log: Some(log_files.success_log.clone()),
    };
    info!(
        errors = summary.errors,
        successes = summary.successes,
        duration_ms = summary.elapsed_ms,
        "run complete"
    );
    sink.emit(RunEvent::Finished(summary.clone()));

    Ok(RunReport {
        summary,
        log,
        log_files,
    })
}
