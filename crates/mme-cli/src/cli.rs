//! CLI argument definitions for the archival metadata tagger.

use std::path::PathBuf;

use clap::builder::TypedValueParser;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use mme_exiftool::{DEFAULT_PROFILE_DIR, DEFAULT_PROGRAM, ToolConfig};
use mme_model::{DEFAULT_MAX_DEPTH, DEFAULT_PROGRESS_INTERVAL, RunOptions};

#[derive(Parser)]
#[command(
    name = "mme",
    version,
    about = "Write archival metadata from a CSV table into image files",
    long_about = "Write archival metadata from a CSV table into image files.\n\n\
                  Each row names an image by its \"File Name\" column. The image is\n\
                  located under IMAGES_ROOT, its VRAE, ISAD(G) and Dublin Core tags\n\
                  are cleared, and the mapped columns are written back with exiftool."
)]
pub struct Cli {
    /// CSV table with one row per image and a "File Name" column.
    #[arg(value_name = "CSV_PATH")]
    pub csv_path: PathBuf,

    /// Directory tree holding the images.
    #[arg(value_name = "IMAGES_ROOT")]
    pub images_root: PathBuf,

    /// Report progress every N rows.
    #[arg(
        short = 'r',
        long = "row-progress-notify",
        value_name = "N",
        default_value_t = DEFAULT_PROGRESS_INTERVAL,
        value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize)
    )]
    pub row_progress_notify: usize,

    /// Log mapped columns that are missing from a row as errors.
    #[arg(short = 'n', long = "notify-broken-keys")]
    pub notify_broken_keys: bool,

    /// Deepest directory level below IMAGES_ROOT searched for files.
    #[arg(short = 'm', long = "max-depth", value_name = "DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// JSON file mapping CSV columns to tags for each standard.
    #[arg(long = "maps", value_name = "PATH", default_value = "data/maps.json")]
    pub maps: PathBuf,

    /// Directory holding the vrae.config and isadg.config exiftool profiles.
    #[arg(long = "profiles", value_name = "DIR", default_value = DEFAULT_PROFILE_DIR)]
    pub profiles: PathBuf,

    /// exiftool executable to run.
    #[arg(long = "exiftool", value_name = "PATH", default_value = DEFAULT_PROGRAM)]
    pub exiftool: PathBuf,

    /// Directory the error and success logs are written to.
    #[arg(long = "log-dir", value_name = "DIR", default_value = ".")]
    pub log_dir: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write diagnostics to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        RunOptions::new(&self.csv_path, &self.images_root)
            .with_progress_interval(self.row_progress_notify)
            .with_notify_broken_keys(self.notify_broken_keys)
            .with_max_depth(self.max_depth)
            .with_log_dir(&self.log_dir)
    }

    pub fn tool_config(&self) -> ToolConfig {
        ToolConfig::default()
            .with_program(&self.exiftool)
            .with_profile_dir(&self.profiles)
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
