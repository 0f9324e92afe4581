//! CLI argument definitions for the OSM address auditor.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "osm-audit",
    version,
    about = "Audit and normalize address tags in an OpenStreetMap XML export",
    long_about = "Audit and normalize address tags in an OpenStreetMap XML export.\n\n\
                  Scans node and way tags for postcodes, state codes, and street names,\n\
                  reports values that do not conform, and rewrites street-type suffixes."
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

    /// Prefix each log line with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report values whose extracted token is not in the audit's vocabulary.
    Audit(AuditArgs),

    /// Audit a file, then rewrite the flagged values through the correction table.
    Normalize(NormalizeArgs),

    /// Count tag keys by shape (lower, lower_colon, problemchars, other).
    Keys(KeysArgs),

    /// List the configured audits.
    Audits(ConfigArgs),
}

#[derive(Args)]
pub struct ConfigArgs {
    /// TOML file defining extra audits or overriding the built-in ones.
    #[arg(long = "config", value_name = "TOML")]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct AuditArgs {
    /// OSM XML export to scan.
    #[arg(value_name = "OSM_FILE")]
    pub osm_file: PathBuf,

    /// Audit to run; repeat for several. Runs every configured audit when omitted.
    #[arg(long = "audit", value_name = "NAME")]
    pub audits: Vec<String>,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Print JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct NormalizeArgs {
    /// OSM XML export to scan.
    #[arg(value_name = "OSM_FILE")]
    pub osm_file: PathBuf,

    /// Audit whose corrections are applied.
    #[arg(long = "audit", value_name = "NAME", default_value = "street")]
    pub audit: String,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Only list values that were rewritten.
    #[arg(long = "changed-only")]
    pub changed_only: bool,

    /// Print JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct KeysArgs {
    /// OSM XML export to scan.
    #[arg(value_name = "OSM_FILE")]
    pub osm_file: PathBuf,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
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
