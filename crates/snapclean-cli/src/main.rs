//! snapclean CLI.

use clap::{ColorChoice, Parser};
use snapclean_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg, ValidateArgs};
use snapclean_cli::commands::{ValidationReport, run_clean, run_validate, run_view};
use snapclean_cli::logging::{LogConfig, LogFormat, init_logging};
use snapclean_cli::summary::{print_clean_summary, print_page, print_validation};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Clean(args) => match run_clean(&args) {
            Ok(outcome) => {
                print_clean_summary(&outcome.summary, &outcome.steps);
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Validate(args) => match run_validate(&args) {
            Ok(report) => match print_report(&args, &report) {
                Ok(()) => 0,
                Err(error) => report_error(&error),
            },
            Err(error) => report_error(&error),
        },
        Command::View(args) => match run_view(&args) {
            Ok(page) => {
                print_page(&page.table, page.rows, page.columns);
                0
            }
            Err(error) => report_error(&error),
        },
    };
    std::process::exit(exit_code);
}

fn print_report(args: &ValidateArgs, report: &ValidationReport) -> anyhow::Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print_validation(
            &report.result,
            &report.headers,
            &report.missing_by_column,
            &report.duplicate_rows,
        );
    }
    Ok(())
}

fn report_error(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
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
