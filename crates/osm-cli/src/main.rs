//! OSM address audit CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use serde::Serialize;
use tracing::level_filters::LevelFilter;

use osm_cli::commands::{load_config, run_audits, run_keys, run_normalize};
use osm_cli::logging::{LogConfig, LogFormat, init_logging};
use osm_cli::summary::{audits_table, key_types_table, print_audit_reports, print_normalize_report};

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli.command) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Audit(args) => {
            let config = load_config(args.config.config.as_deref())?;
            let reports = run_audits(&args.osm_file, &args.audits, &config)?;
            if args.json {
                print_json(&reports)?;
            } else {
                print_audit_reports(&reports);
            }
        }
        Command::Normalize(args) => {
            let config = load_config(args.config.config.as_deref())?;
            let report = run_normalize(&args.osm_file, &args.audit, &config)?;
            if args.json {
                print_json(&report)?;
            } else {
                print_normalize_report(&report, args.changed_only);
            }
        }
        Command::Keys(args) => {
            let counts = run_keys(&args.osm_file)?;
            if args.json {
                print_json(&counts)?;
            } else {
                println!("{}", key_types_table(&counts));
            }
        }
        Command::Audits(args) => {
            let config = load_config(args.config.as_deref())?;
            println!("{}", audits_table(&config));
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
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
    config.with_timestamps = cli.log_timestamps;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
