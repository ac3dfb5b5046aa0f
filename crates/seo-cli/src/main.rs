//! SEO provider response validator CLI.

use clap::{ColorChoice, Parser};
use seo_cli::commands::{run_check, run_overview};
use seo_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, OutputArg};
use crate::summary::{print_check, print_json, print_kinds, print_overview};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Check(args) => match run_check(&args.response, args.kind) {
            Ok(outcome) => {
                let printed = match args.output {
                    OutputArg::Table => {
                        print_check(&outcome);
                        Ok(())
                    }
                    OutputArg::Json => print_json(&outcome),
                };
                exit_code_for(printed, outcome.has_errors())
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Overview(args) => match run_overview(&args.bundle, args.keyword.as_deref()) {
            Ok(outcome) => {
                let printed = match args.output {
                    OutputArg::Table => {
                        print_overview(&outcome);
                        Ok(())
                    }
                    OutputArg::Json => print_json(&outcome),
                };
                exit_code_for(printed, outcome.has_errors())
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Kinds => {
            print_kinds();
            0
        }
    };
    std::process::exit(exit_code);
}

fn exit_code_for(printed: anyhow::Result<()>, has_errors: bool) -> i32 {
    match printed {
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
        Ok(()) if has_errors => 1,
        Ok(()) => 0,
    }
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
