//! Error types for the metadata tool adapter.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that mean the tool integration itself is broken.
///
/// An invocation that merely reports an error on its error channel is not a
/// `ToolError`; it is an ordinary failed outcome.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ToolError {
    /// The tool process could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool printed nothing on either channel.
    #[error("invalid return (no error nor success): on {action}, filepath: \"{path}\"")]
    Anomaly { action: String, path: PathBuf },
}

/// Result type for tool invocations.
pub type Result<T> = std::result::Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anomaly_display() {
        let err = ToolError::Anomaly {
            action: "WRITE DC TAGS".to_string(),
            path: PathBuf::from("a.jpg"),
        };
        assert_eq!(
            err.to_string(),
            "invalid return (no error nor success): on WRITE DC TAGS, filepath: \"a.jpg\""
        );
    }
}
