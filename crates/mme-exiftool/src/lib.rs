//! Adapter around the external metadata writer.
//!
//! The engine talks to the tool only through [`MetadataTool`]. The
//! production implementation, [`ExifTool`], spawns one `exiftool` process
//! per operation and classifies its output:
//!
//! - text on stderr: failed outcome carrying that text
//! - otherwise text on stdout: successful outcome (status phrases prettified)
//! - both empty: [`ToolError::Anomaly`], fatal for the run

mod config;
mod error;
mod tool;

pub use config::{DEFAULT_PROFILE_DIR, DEFAULT_PROGRAM, ToolConfig};
pub use error::{Result, ToolError};
pub use tool::{ExifTool, MetadataTool, prettify_status, tag_assignment};
