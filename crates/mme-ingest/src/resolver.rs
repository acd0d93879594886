//! Locating image files under the root directory.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::{ConfigError, Result};

/// A row's file name together with where it was found, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub file_name: String,
    pub path: Option<PathBuf>,
}

/// Searches a directory tree for files by exact name.
///
/// No index is kept between lookups; each call walks the tree again.
#[derive(Debug, Clone)]
pub struct FileResolver {
    root: PathBuf,
    max_depth: usize,
}

impl FileResolver {
    pub fn new(root: impl Into<PathBuf>, max_depth: usize) -> Self {
        Self {
            root: root.into(),
            max_depth,
        }
    }

    pub fn resolve(&self, file_name: &str) -> ResolvedFile {
        ResolvedFile {
            file_name: file_name.to_string(),
            path: resolve_file(&self.root, file_name, self.max_depth),
        }
    }
}

/// Files before directories, then by name.
///
/// A directory's own files are therefore checked before any of its
/// subdirectories are entered.
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Find the first file named `file_name` under `root`.
///
/// Symbolic links are followed. Directories are searched down to
/// `max_depth` levels below `root` (the root itself is level 0); deeper
/// directories are neither searched nor entered. When the name occurs more
/// than once, the first one in traversal order wins.
pub fn resolve_file(root: &Path, file_name: &str, max_depth: usize) -> Option<PathBuf> {
    // Entries inside a directory at level N sit at walk depth N + 1.
    let walk = WalkDir::new(root)
        .follow_links(true)
        .min_depth(1)
        .max_depth(max_depth.saturating_add(1))
        .sort_by(files_first);

    for entry in walk {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!(root = %root.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_dir() && entry.file_name() == file_name {
            return Some(entry.into_path());
        }
    }
    None
}

/// Check the root exists, is a directory and is not empty.
pub fn validate_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(ConfigError::RootNotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(ConfigError::RootNotDirectory {
            path: root.to_path_buf(),
        });
    }
    let mut entries = std::fs::read_dir(root).map_err(|e| ConfigError::RootRead {
        path: root.to_path_buf(),
        source: e,
    })?;
    if entries.next().is_none() {
        return Err(ConfigError::RootEmpty {
            path: root.to_path_buf(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) -> PathBuf {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"jpg").unwrap();
        path
    }

    #[test]
    fn test_files_before_subdirectories() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a/dup.jpg");
        let top = touch(dir.path(), "dup.jpg");
        assert_eq!(resolve_file(dir.path(), "dup.jpg", 3), Some(top));
    }

    #[test]
    fn test_sibling_directories_in_name_order() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b/dup.jpg");
        let first = touch(dir.path(), "a/dup.jpg");
        assert_eq!(resolve_file(dir.path(), "dup.jpg", 3), Some(first));
    }

    #[test]
    fn test_name_must_match_exactly() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "A.JPG");
        touch(dir.path(), "a.jpg.bak");
        assert_eq!(resolve_file(dir.path(), "a.jpg", 3), None);
    }

    #[test]
    fn test_directory_with_matching_name_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a.jpg")).unwrap();
        assert_eq!(resolve_file(dir.path(), "a.jpg", 3), None);
    }

    #[test]
    fn test_validate_root() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            validate_root(dir.path()),
            Err(ConfigError::RootEmpty { .. })
        ));
        let file = touch(dir.path(), "a.jpg");
        assert!(validate_root(dir.path()).is_ok());
        assert!(matches!(
            validate_root(&file),
            Err(ConfigError::RootNotDirectory { .. })
        ));
        assert!(matches!(
            validate_root(&dir.path().join("missing")),
            Err(ConfigError::RootNotFound { .. })
        ));
    }
}
