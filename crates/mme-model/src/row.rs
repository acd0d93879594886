//! Input table rows.

use std::collections::BTreeMap;

/// Column that names the image file a row describes.
pub const FILE_NAME_COLUMN: &str = "File Name";

/// One data row of the input table, bound to the header's column names.
///
/// Values are kept exactly as read: no trimming and no type coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    position: usize,
    values: BTreeMap<String, String>,
}

impl Row {
    /// Create a row. `position` is the 0-based index among data rows.
    pub fn new(position: usize, values: BTreeMap<String, String>) -> Self {
        Self { position, values }
    }

    pub fn from_pairs<I, K, V>(position: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::new(position, values)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Line number of this row in the source table, counting the header as
    /// line 1.
    pub fn diagnostic_index(&self) -> usize {
        self.position + 2
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    /// The row's file name, if the column is present and non-empty.
    pub fn file_name(&self) -> Option<&str> {
        self.get(FILE_NAME_COLUMN).filter(|name| !name.is_empty())
    }
}
