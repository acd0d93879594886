//! Reading the input table into rows.

use std::collections::BTreeMap;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use mme_model::Row;

use crate::error::{ConfigError, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').to_string()
}

/// Load every data row of the table at `path`.
///
/// The first line names the columns. Cell values are kept verbatim. A row
/// shorter than the header simply lacks the trailing columns; cells beyond
/// the header are dropped. Whether a `File Name` column exists is not
/// checked here.
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    if !path.is_file() {
        return Err(ConfigError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let read_error = |source| ConfigError::InputRead {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(read_error)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(read_error)?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    for (position, record) in reader.records().enumerate() {
        let record = record.map_err(read_error)?;
        let values: BTreeMap<String, String> = headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(Row::new(position, values));
    }
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "loaded input table"
    );
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mme_model::FILE_NAME_COLUMN;
    use tempfile::TempDir;

    fn write_table(contents: &str) -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("photos.csv");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn test_header_binds_values() {
        let (_dir, path) = write_table("File Name,Title\na.jpg,Foo\nb.jpg,\n");
        let rows = load_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get(FILE_NAME_COLUMN), Some("a.jpg"));
        assert_eq!(rows[0].get("Title"), Some("Foo"));
        assert_eq!(rows[1].get("Title"), Some(""));
        assert_eq!(rows[1].diagnostic_index(), 3);
    }

    #[test]
    fn test_values_are_verbatim() {
        let (_dir, path) = write_table("File Name,Title\na.jpg,\"  Foo, Bar \"\n");
        let rows = load_rows(&path).unwrap();
        assert_eq!(rows[0].get("Title"), Some("  Foo, Bar "));
    }

    #[test]
    fn test_short_row_lacks_trailing_columns() {
        let (_dir, path) = write_table("File Name,Title,Date\na.jpg,Foo\n");
        let rows = load_rows(&path).unwrap();
        assert!(rows[0].contains("Title"));
        assert!(!rows[0].contains("Date"));
    }

    #[test]
    fn test_byte_order_mark_is_stripped() {
        let (_dir, path) = write_table("\u{feff}File Name,Title\na.jpg,Foo\n");
        let rows = load_rows(&path).unwrap();
        assert_eq!(rows[0].file_name(), Some("a.jpg"));
    }

    #[test]
    fn test_missing_file_name_column_is_not_an_error() {
        let (_dir, path) = write_table("Title\nFoo\n");
        let rows = load_rows(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].file_name(), None);
    }

    #[test]
    fn test_missing_table() {
        let dir = TempDir::new().unwrap();
        let err = load_rows(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, ConfigError::InputNotFound { .. }));
    }
}
