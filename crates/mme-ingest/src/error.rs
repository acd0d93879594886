//! Fatal configuration errors.
//!
//! Any of these stops a run before the first row is processed, so no logs
//! are written.

use std::path::PathBuf;

use mme_model::Standard;
use thiserror::Error;

/// Errors in the mapping file, input table, root directory or run options.
#[derive(Debug, Error)]
pub enum ConfigError {
    // === Mapping Configuration ===
    /// Mapping file does not exist.
    #[error("mapping file not found: {path}")]
    MappingNotFound { path: PathBuf },

    /// Mapping file exists but could not be read.
    #[error("failed to read mapping file {path}: {source}")]
    MappingRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Mapping file is not valid JSON of the expected shape.
    #[error("failed to decode mapping file {path}: {source}")]
    MappingParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// One of the three standard sections is absent.
    #[error("mapping file {path} has no '{standard}' section")]
    MissingStandard { path: PathBuf, standard: Standard },

    // === Input Table ===
    /// Input table does not exist.
    #[error("input table not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Input table could not be read or decoded.
    #[error("failed to read input table {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // === Root Directory ===
    #[error("root directory not found: {path} (does the path exist?)")]
    RootNotFound { path: PathBuf },

    #[error("root path is not a directory: {path}")]
    RootNotDirectory { path: PathBuf },

    #[error("root directory has no files or directories: {path}")]
    RootEmpty { path: PathBuf },

    #[error("failed to read root directory {path}: {source}")]
    RootRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Run Options ===
    #[error("progress interval must be at least 1, got {value}")]
    InvalidProgressInterval { value: usize },
}

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::MissingStandard {
            path: PathBuf::from("data/maps.json"),
            standard: Standard::Isadg,
        };
        assert_eq!(
            err.to_string(),
            "mapping file data/maps.json has no 'isadg' section"
        );
    }

    #[test]
    fn test_error_source_chain() {
        let err = ConfigError::MappingRead {
            path: PathBuf::from("maps.json"),
            source: std::io::Error::other("denied"),
        };
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("denied"));
    }
}
