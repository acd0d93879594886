/// Result of a single delete or write invocation on the metadata tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    /// The tool reported progress on its output channel.
    Success(String),
    /// The tool reported a problem on its error channel.
    Failure(String),
}

impl OperationOutcome {
    /// Classify the two diagnostic channels of an invocation.
    ///
    /// Error text wins over output text. Returns `None` when both channels
    /// are empty, which a working tool never does.
    pub fn from_channels(stdout: &str, stderr: &str) -> Option<Self> {
        if !stderr.is_empty() {
            Some(Self::Failure(stderr.to_string()))
        } else if !stdout.is_empty() {
            Some(Self::Success(stdout.to_string()))
        } else {
            None
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
