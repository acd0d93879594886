//! Per-row tagging pipeline.
//!
//! Each row goes through four stages:
//!
//! 1. **File name**: read `File Name`; abandon the row if empty
//! 2. **Resolve**: find the file under the root; abandon the row if absent
//! 3. **Delete**: clear each standard's namespace
//! 4. **Write**: set every mapped column present in the row
//!
//! A failed delete only affects its own standard. A failed write stops the
//! remaining tags of that standard but not the next standard.

use std::path::{Path, PathBuf};

use tracing::debug;

use mme_exiftool::{MetadataTool, ToolError};
use mme_ingest::FileResolver;
use mme_model::{LogEntry, MappingSet, OperationOutcome, Row, Standard};

use crate::context::RunContext;

/// How far a row got through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowDisposition {
    /// No usable `File Name` value.
    MissingFileName,
    /// The named file is not under the root within the depth bound.
    FileNotFound { file_name: String },
    /// Delete and write phases ran against this file.
    Tagged { path: PathBuf },
}

pub struct RowProcessor<'a, T> {
    mappings: &'a MappingSet,
    resolver: &'a FileResolver,
    tool: T,
    notify_broken_keys: bool,
}

impl<'a, T: MetadataTool> RowProcessor<'a, T> {
    pub fn new(mappings: &'a MappingSet, resolver: &'a FileResolver, tool: T) -> Self {
        Self {
            mappings,
            resolver,
            tool,
            notify_broken_keys: false,
        }
    }

    /// Record mapped columns that a row lacks in the error log.
    #[must_use]
    pub fn with_notify_broken_keys(mut self, enable: bool) -> Self {
        self.notify_broken_keys = enable;
        self
    }

    /// Run one row through the pipeline.
    ///
    /// # Errors
    ///
    /// Only a broken tool integration is returned; every other failure is
    /// recorded in `ctx` and the row counts as handled.
    pub fn process_row(
        &mut self,
        row: &Row,
        ctx: &mut RunContext<'_>,
    ) -> Result<RowDisposition, ToolError> {
        let index = row.diagnostic_index();
        let Some(file_name) = row.file_name() else {
            ctx.row_error(index, LogEntry::missing_file_name(index));
            return Ok(RowDisposition::MissingFileName);
        };
        let Some(path) = self.resolver.resolve(file_name).path else {
            ctx.row_error(index, LogEntry::file_not_found(index, file_name));
            return Ok(RowDisposition::FileNotFound {
                file_name: file_name.to_string(),
            });
        };
        debug!(row = index, path = %path.display(), "resolved file");

        for standard in Standard::ALL {
            ctx.status(row.position(), standard.delete_action(), file_name);
            self.delete_standard(standard, index, &path, ctx)?;
        }

        for standard in Standard::ALL {
            ctx.status(row.position(), standard.write_action(), file_name);
            if self.write_standard(standard, row, &path, ctx)? {
                ctx.success(index, LogEntry::write_completed(standard, index, &path));
            }
        }

        Ok(RowDisposition::Tagged { path })
    }

    fn delete_standard(
        &mut self,
        standard: Standard,
        index: usize,
        path: &Path,
        ctx: &mut RunContext<'_>,
    ) -> Result<(), ToolError> {
        match self.tool.delete_namespace(standard, path)? {
            OperationOutcome::Success(message) => {
                ctx.success(
                    index,
                    LogEntry::delete_succeeded(standard, index, path, &message),
                );
            }
            OperationOutcome::Failure(error) => {
                debug!(row = index, %standard, "namespace deletion failed");
                ctx.operation_error(
                    index,
                    standard,
                    LogEntry::delete_failed(standard, index, path, &error),
                );
            }
        }
        Ok(())
    }

    /// Returns `false` when a write failed and the standard was abandoned.
    fn write_standard(
        &mut self,
        standard: Standard,
        row: &Row,
        path: &Path,
        ctx: &mut RunContext<'_>,
    ) -> Result<bool, ToolError> {
        let index = row.diagnostic_index();
        let mappings: &'a MappingSet = self.mappings;
        for (column, tag) in mappings.get(standard) {
            let Some(value) = row.get(column) else {
                if self.notify_broken_keys {
                    ctx.missing_key(
                        index,
                        standard,
                        column,
                        LogEntry::missing_key(standard, index, path, column),
                    );
                }
                continue;
            };
            if let OperationOutcome::Failure(error) =
                self.tool.write_tag(standard, tag, value, path)?
            {
                debug!(row = index, %standard, column = %column, "tag write failed");
                ctx.operation_error(
                    index,
                    standard,
                    LogEntry::write_failed(standard, index, path, column, &error),
                );
                return Ok(false);
            }
        }
        Ok(true)
    }
}
