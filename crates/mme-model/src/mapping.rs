//! Column-name to tag-identifier mappings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::standard::Standard;

/// Column name to tag identifier for a single standard.
pub type TagMap = BTreeMap<String, String>;

/// The three per-standard mappings, loaded once and read-only for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingSet {
    vrae: TagMap,
    isadg: TagMap,
    dc: TagMap,
}

impl MappingSet {
    pub fn new(vrae: TagMap, isadg: TagMap, dc: TagMap) -> Self {
        Self { vrae, isadg, dc }
    }

    /// Replace the mapping for one standard.
    #[must_use]
    pub fn with_standard(mut self, standard: Standard, tags: TagMap) -> Self {
        *self.get_mut(standard) = tags;
        self
    }

    /// Mapping for a standard. May be empty.
    pub fn get(&self, standard: Standard) -> &TagMap {
        match standard {
            Standard::Vrae => &self.vrae,
            Standard::Isadg => &self.isadg,
            Standard::Dc => &self.dc,
        }
    }

    fn get_mut(&mut self, standard: Standard) -> &mut TagMap {
        match standard {
            Standard::Vrae => &mut self.vrae,
            Standard::Isadg => &mut self.isadg,
            Standard::Dc => &mut self.dc,
        }
    }

    /// Total number of mapped columns across all standards.
    pub fn tag_count(&self) -> usize {
        Standard::ALL.iter().map(|s| self.get(*s).len()).sum()
    }
}
