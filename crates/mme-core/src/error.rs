use std::path::PathBuf;

use mme_exiftool::ToolError;
use mme_ingest::ConfigError;
use thiserror::Error;

/// Conditions that end a run early.
///
/// Row and operation failures never show up here; they are recorded in the
/// run's error log instead.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("failed to create log directory {path}: {source}")]
    LogDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write log {path}: {source}")]
    LogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RunError>;
