//! Loading the per-standard column mappings.
//!
//! The mapping file is JSON with one object per standard:
//!
//! ```json
//! {
//!     "vrae":  { "Screen Name": "Tag Name" },
//!     "isadg": { "Screen Name": "Tag Name" },
//!     "dc":    { "Title": "dc:title" }
//! }
//! ```
//!
//! Every section must be present, though it may be empty. Extra top-level
//! keys are ignored.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use mme_model::{MappingSet, Standard, TagMap};

use crate::error::{ConfigError, Result};

#[derive(Debug, Deserialize)]
struct MappingFile {
    vrae: Option<TagMap>,
    isadg: Option<TagMap>,
    dc: Option<TagMap>,
}

/// Load and validate the mapping file at `path`.
pub fn load_mapping_set(path: &Path) -> Result<MappingSet> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::MappingNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::MappingRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let set = parse_mapping_set(&contents, path)?;
    debug!(
        path = %path.display(),
        vrae = set.get(Standard::Vrae).len(),
        isadg = set.get(Standard::Isadg).len(),
        dc = set.get(Standard::Dc).len(),
        "loaded mapping set"
    );
    Ok(set)
}

/// Parse mapping JSON. `path` is only used in error messages.
pub fn parse_mapping_set(contents: &str, path: &Path) -> Result<MappingSet> {
    let file: MappingFile =
        serde_json::from_str(contents).map_err(|source| ConfigError::MappingParse {
            path: path.to_path_buf(),
            source,
        })?;
    let require = |tags: Option<TagMap>, standard: Standard| {
        tags.ok_or_else(|| ConfigError::MissingStandard {
            path: path.to_path_buf(),
            standard,
        })
    };
    Ok(MappingSet::new(
        require(file.vrae, Standard::Vrae)?,
        require(file.isadg, Standard::Isadg)?,
        require(file.dc, Standard::Dc)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<MappingSet> {
        parse_mapping_set(json, Path::new("maps.json"))
    }

    #[test]
    fn empty_sections_are_allowed() {
        let set = parse(r#"{"vrae": {}, "isadg": {}, "dc": {}}"#).unwrap();
        assert_eq!(set.tag_count(), 0);
    }

    #[test]
    fn missing_section_names_the_standard() {
        let err = parse(r#"{"vrae": {}, "dc": {}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingStandard {
                standard: Standard::Isadg,
                ..
            }
        ));
    }

    #[test]
    fn null_section_counts_as_missing() {
        let err = parse(r#"{"vrae": {}, "isadg": {}, "dc": null}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingStandard {
                standard: Standard::Dc,
                ..
            }
        ));
    }

    #[test]
    fn non_string_tag_is_malformed() {
        let err = parse(r#"{"vrae": {"Author": 3}, "isadg": {}, "dc": {}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::MappingParse { .. }));
    }

    #[test]
    fn extra_keys_are_ignored() {
        let set = parse(r#"{"vrae": {}, "isadg": {}, "dc": {"Title": "dc:title"}, "notes": 1}"#)
            .unwrap();
        assert_eq!(set.tag_count(), 1);
    }
}
