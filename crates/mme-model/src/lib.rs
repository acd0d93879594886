//! Domain types for the archival metadata tagger.
//!
//! Everything here is plain data: the three naming standards, the
//! column-to-tag mappings, input rows, tool outcomes, the two run logs and
//! the events the engine reports while it works.

pub mod event;
pub mod log;
pub mod mapping;
pub mod options;
pub mod outcome;
pub mod row;
pub mod standard;

pub use event::{ProgressSnapshot, RunEvent, RunSummary};
pub use log::{LogEntry, LogKind, RunLog};
pub use mapping::{MappingSet, TagMap};
pub use options::{DEFAULT_MAX_DEPTH, DEFAULT_PROGRESS_INTERVAL, RunOptions};
pub use outcome::OperationOutcome;
pub use row::{FILE_NAME_COLUMN, Row};
pub use standard::Standard;
