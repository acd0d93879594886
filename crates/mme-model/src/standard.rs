//! Metadata naming standards.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three metadata schemas a photo collection is tagged with.
///
/// The declaration order is the processing order: deletions and writes
/// always run VRAE first, then ISAD(G), then Dublin Core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Standard {
    /// Primary visual-resources standard (custom XMP namespace).
    Vrae,
    /// Descriptive archival standard (custom XMP namespace).
    Isadg,
    /// Dublin Core, built into the tool.
    Dc,
}

impl Standard {
    /// All standards in processing order.
    pub const ALL: [Standard; 3] = [Standard::Vrae, Standard::Isadg, Standard::Dc];

    /// Key used for this standard in the mapping configuration.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Vrae => "vrae",
            Self::Isadg => "isadg",
            Self::Dc => "dc",
        }
    }

    /// Upper-case label used in log entries.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vrae => "VRAE",
            Self::Isadg => "ISADG",
            Self::Dc => "DC",
        }
    }

    /// XMP group that holds this standard's tags.
    #[must_use]
    pub const fn namespace(self) -> &'static str {
        match self {
            Self::Vrae => "xmp-vrae",
            Self::Isadg => "xmp-isadg",
            Self::Dc => "xmp-dc",
        }
    }

    /// File name of the tool profile defining this standard's custom tags.
    ///
    /// Dublin Core needs no profile.
    #[must_use]
    pub const fn profile_file_name(self) -> Option<&'static str> {
        match self {
            Self::Vrae => Some("vrae.config"),
            Self::Isadg => Some("isadg.config"),
            Self::Dc => None,
        }
    }

    /// Whether writes for this standard must load a profile.
    #[must_use]
    pub const fn requires_profile(self) -> bool {
        self.profile_file_name().is_some()
    }

    /// Action label for the delete phase, e.g. `DELETE VRAE TAGS`.
    #[must_use]
    pub fn delete_action(self) -> String {
        format!("DELETE {} TAGS", self.label())
    }

    /// Action label for the write phase, e.g. `WRITE VRAE TAGS`.
    #[must_use]
    pub fn write_action(self) -> String {
        format!("WRITE {} TAGS", self.label())
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
