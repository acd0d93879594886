//! Archival metadata tagger CLI.

use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use mme_cli::cli::{Cli, LogFormatArg, LogLevelArg};
use mme_cli::logging::{LogConfig, LogFormat, init_logging};
use mme_cli::reporter::ProgressReporter;
use mme_cli::summary::{print_summary, print_summary_json};
use mme_core::run_from_files;
use mme_exiftool::ExifTool;
use mme_model::RunSummary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(summary) => match report(&cli, &summary) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<RunSummary> {
    let options = cli.run_options();
    let tool = ExifTool::new(cli.tool_config());
    let show_progress = io::stderr().is_terminal() && cli.log_format != LogFormatArg::Json;
    let mut reporter = ProgressReporter::new(show_progress);
    let report = run_from_files(&options, &cli.maps, tool, &mut reporter)
        .with_context(|| format!("run on {} aborted", options.input.display()))?;
    Ok(report.summary)
}

fn report(cli: &Cli, summary: &RunSummary) -> anyhow::Result<()> {
    if cli.log_format == LogFormatArg::Json {
        print_summary_json(summary).context("failed to serialize run summary")?;
    } else {
        print_summary(summary);
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
