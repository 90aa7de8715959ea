//! CLI argument definitions for the inflammation tool.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "inflammation",
    version,
    about = "Summarise and normalise patient inflammation readings",
    long_about = "Summarise and normalise patient inflammation readings.\n\n\
                  Input files are headerless CSV: one patient per line, one reading per day.\n\
                  Missing readings may be written as `nan`."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow patient readings to appear in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Result format written to stdout.
    #[arg(long = "format", value_enum, default_value = "table", global = true)]
    pub format: OutputFormatArg,
}

impl Cli {
    /// Build logging configuration from CLI flags with consistent precedence.
    pub fn log_config(&self) -> LogConfig {
        let mut config = LogConfig {
            level_filter: self.verbosity.tracing_level_filter(),
            ..LogConfig::default()
        };
        config.use_env_filter = !(self.verbosity.is_present() || self.log_level.is_some());
        if let Some(level) = self.log_level {
            config.level_filter = match level {
                LogLevelArg::Error => LevelFilter::ERROR,
                LogLevelArg::Warn => LevelFilter::WARN,
                LogLevelArg::Info => LevelFilter::INFO,
                LogLevelArg::Debug => LevelFilter::DEBUG,
                LogLevelArg::Trace => LevelFilter::TRACE,
            };
        }
        config.format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        config.with_timestamps = self.log_timestamps;
        config.with_target = self.log_target;
        config.log_file = self.log_file.clone();
        config.log_data = self.log_data;
        config.with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        config
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Daily mean, max and min across all patients.
    Stats(TableArgs),

    /// Mean, max and min of each patient's readings.
    Patients(TableArgs),

    /// Show one patient's readings and summary.
    Patient(PatientArgs),

    /// Normalise each patient's readings against their own peak.
    Normalise(TableArgs),

    /// Run a SQL statement against a SQLite database and print the rows.
    Query(QueryArgs),
}

#[derive(Parser)]
pub struct TableArgs {
    /// Path to the inflammation CSV file.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Decimal places shown for readings.
    #[arg(long = "precision", default_value_t = 2)]
    pub precision: usize,
}

#[derive(Parser)]
pub struct PatientArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Zero-based patient row.
    #[arg(value_name = "INDEX", allow_negative_numbers = true)]
    pub index: isize,
}

#[derive(Parser)]
pub struct QueryArgs {
    /// SQLite database file (created if missing).
    #[arg(value_name = "DATABASE")]
    pub database: PathBuf,

    /// SQL statement to execute.
    #[arg(value_name = "SQL")]
    pub sql: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Aligned terminal tables; `normalise` writes plain CSV rows instead.
    Table,
    /// Pretty-printed JSON.
    Json,
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
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
