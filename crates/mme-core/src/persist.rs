//! Writing the error and success logs at the end of a run.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::info;

use mme_model::{LogKind, RunLog};

use crate::error::{Result, RunError};

/// Timestamp format used in log file names (no colons, for portability).
const FILE_TIMESTAMP_FORMAT: &str = "%Y-%-m-%-d %H-%M-%S";

/// Human-readable timestamp used in banners.
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%-m-%-d %H:%M:%S";

/// Destination paths for one run's logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFiles {
    pub error_log: PathBuf,
    pub success_log: PathBuf,
}

impl LogFiles {
    /// Paths named after the input table and the run's start time, e.g.
    /// `error_log_photos-2024-3-7 09-15-02.txt`.
    pub fn for_run(log_dir: &Path, input: &Path, started_at: &DateTime<Local>) -> Self {
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = name.strip_suffix(".csv").unwrap_or(&name);
        let stamp = started_at.format(FILE_TIMESTAMP_FORMAT);
        let path_for = |kind: LogKind| {
            log_dir.join(format!("{}_{stem}-{stamp}.txt", kind.file_prefix()))
        };
        Self {
            error_log: path_for(LogKind::Error),
            success_log: path_for(LogKind::Success),
        }
    }

    pub fn path(&self, kind: LogKind) -> &Path {
        match kind {
            LogKind::Error => &self.error_log,
            LogKind::Success => &self.success_log,
        }
    }
}

/// Write both logs, creating the log directory if needed. Empty logs still
/// produce (empty) files.
pub fn write_logs(log: &RunLog, files: &LogFiles) -> Result<()> {
    for kind in [LogKind::Error, LogKind::Success] {
        let path = files.path(kind);
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| RunError::LogDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, log.render(kind)).map_err(|source| RunError::LogWrite {
            path: path.to_path_buf(),
            source,
        })?;
    }
    info!(
        error_log = %files.error_log.display(),
        success_log = %files.success_log.display(),
        "wrote run logs"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn names_follow_input_and_start_time() {
        let started = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap();
        let files = LogFiles::for_run(Path::new("logs"), Path::new("in/photos.csv"), &started);
        assert_eq!(
            files.error_log,
            PathBuf::from("logs/error_log_photos-2024-3-7 09-05-02.txt")
        );
        assert_eq!(
            files.success_log,
            PathBuf::from("logs/success_log_photos-2024-3-7 09-05-02.txt")
        );
    }

    #[test]
    fn non_csv_extension_is_kept() {
        let started = Local.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        let files = LogFiles::for_run(Path::new(""), Path::new("photos.tsv"), &started);
        assert_eq!(
            files.error_log,
            PathBuf::from("error_log_photos.tsv-2024-12-31 23-59-59.txt")
        );
    }
}
