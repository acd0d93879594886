//! Row-processing and tag-application engine.
//!
//! [`run`] walks an input table row by row: it resolves each row's image,
//! clears the three standards' namespaces and writes the mapped values.
//! Failures scoped to a row or a single operation are collected into the
//! run's error log. Only configuration problems and a broken tool
//! integration stop the run.

mod context;
mod coordinator;
mod error;
mod persist;
mod processor;

pub use context::{EventSink, NullSink, RunContext};
pub use coordinator::{RunReport, run, run_from_files};
pub use error::{Result, RunError};
pub use persist::{DISPLAY_TIMESTAMP_FORMAT, LogFiles, write_logs};
pub use processor::{RowDisposition, RowProcessor};
