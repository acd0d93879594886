//! Run configuration consumed by the engine.

use std::path::PathBuf;

/// Rows between progress notifications.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100;

/// Deepest directory level below the root that is searched for files.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Options controlling a single tagging run.
///
/// Front ends (command line or forms) collapse their inputs into this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Input table with one row per image.
    pub input: PathBuf,
    /// Directory tree holding the images.
    pub root: PathBuf,
    /// Emit a progress event every this many rows. Must be at least 1.
    pub progress_interval: usize,
    /// Record an error entry when a mapped column is missing from a row.
    pub notify_broken_keys: bool,
    /// Deepest directory level (root = 0) searched for files.
    pub max_depth: usize,
    /// Directory the error and success logs are written to.
    pub log_dir: PathBuf,
}

impl RunOptions {
    pub fn new(input: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            root: root.into(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            notify_broken_keys: false,
            max_depth: DEFAULT_MAX_DEPTH,
            log_dir: PathBuf::from("."),
        }
    }

    #[must_use]
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    #[must_use]
    pub fn with_notify_broken_keys(mut self, enable: bool) -> Self {
        self.notify_broken_keys = enable;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    #[must_use]
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }
}
