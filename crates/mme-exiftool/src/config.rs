//! Where to find the tool and its custom-namespace profiles.

use std::path::PathBuf;

use mme_model::Standard;

/// Default program name, resolved through `PATH`.
pub const DEFAULT_PROGRAM: &str = "exiftool";

/// Default directory holding `vrae.config` and `isadg.config`.
pub const DEFAULT_PROFILE_DIR: &str = "data/exiftool_configs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Executable to invoke.
    pub program: PathBuf,
    /// Directory containing the per-standard profile files.
    pub profile_dir: PathBuf,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            profile_dir: PathBuf::from(DEFAULT_PROFILE_DIR),
        }
    }
}

impl ToolConfig {
    #[must_use]
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    #[must_use]
    pub fn with_profile_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.profile_dir = dir.into();
        self
    }

    /// Profile file for `standard`, or `None` when the tool knows the
    /// namespace natively.
    pub fn profile_path(&self, standard: Standard) -> Option<PathBuf> {
        standard
            .profile_file_name()
            .map(|name| self.profile_dir.join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_paths() {
        let config = ToolConfig::default().with_profile_dir("/opt/mme/profiles");
        assert_eq!(
            config.profile_path(Standard::Vrae),
            Some(PathBuf::from("/opt/mme/profiles/vrae.config"))
        );
        assert_eq!(config.profile_path(Standard::Dc), None);
    }
}
