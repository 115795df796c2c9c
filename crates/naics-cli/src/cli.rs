//! CLI argument definitions for the NAICS code-set checker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "naics-check",
    version,
    about = "NAICS code-set checker - validate columns against NAICS industry codes",
    long_about = "Validate tabular columns against the North American Industry \
                  Classification System code set.\n\n\
                  Ships a built-in 2022 sector/subsector set; full editions can be \
                  loaded from CSV. The diagnose command runs the rule's bundled \
                  example fixtures as a self-test."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the rule's example fixtures and print a diagnostic checklist.
    Diagnose(DiagnoseArgs),

    /// Validate a CSV column against the reference code set.
    Check(CheckArgs),

    /// List the reference code set.
    Codes(CodesArgs),
}

#[derive(Parser)]
pub struct DiagnoseArgs {
    /// Rule configuration file (TOML). Defaults to the built-in rule.
    #[arg(long = "rule-config", value_name = "PATH")]
    pub rule_config: Option<PathBuf>,

    /// Load the reference set from a CSV file with code,title columns.
    #[arg(long = "codes-csv", value_name = "PATH")]
    pub codes_csv: Option<PathBuf>,

    /// Write a JSON self-check report into this directory.
    #[arg(long = "report-dir", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// CSV file containing the column to validate.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Column holding the classification codes.
    #[arg(long = "column", value_name = "NAME")]
    pub column: String,

    /// Rule configuration file (TOML). Defaults to the built-in rule.
    #[arg(long = "rule-config", value_name = "PATH")]
    pub rule_config: Option<PathBuf>,

    /// Load the reference set from a CSV file with code,title columns.
    #[arg(long = "codes-csv", value_name = "PATH")]
    pub codes_csv: Option<PathBuf>,

    /// Write a JSON check report into this directory.
    #[arg(long = "report-dir", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,

    /// Maximum offending rows to print (0 prints none).
    #[arg(long = "max-rows", value_name = "N", default_value_t = 10)]
    pub max_rows: usize,
}

#[derive(Parser)]
pub struct CodesArgs {
    /// Rule configuration file (TOML). Defaults to the built-in rule.
    #[arg(long = "rule-config", value_name = "PATH")]
    pub rule_config: Option<PathBuf>,

    /// Load the reference set from a CSV file with code,title columns.
    #[arg(long = "codes-csv", value_name = "PATH")]
    pub codes_csv: Option<PathBuf>,
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
