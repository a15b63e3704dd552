//! BoardMedic CLI.

use boardmedic_cli::logging::{LogConfig, LogFormat, init_logging};
use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use boardmedic_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use boardmedic_cli::commands::{
    run_diagnose, run_import_package, run_package, run_similar, run_stats,
};
use boardmedic_cli::summary::{
    print_diagnosis, print_import, print_matches, print_package, print_patterns, print_stats,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Command::Diagnose(args) => {
            let outcome = run_diagnose(args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&outcome.result)?);
            } else {
                print_diagnosis(&outcome);
            }
        }
        Command::Similar(args) => {
            let matches = run_similar(args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                print_matches(&matches);
            }
        }
        Command::Stats(args) => {
            let outcome = run_stats(args)?;
            print_stats(&outcome);
        }
        Command::Patterns => {
            print_patterns(&boardmedic_rules::KnowledgeBase::builtin());
        }
        Command::Package(args) => {
            let outcome = run_package(args)?;
            print_package(&outcome);
        }
        Command::ImportPackage(args) => {
            let outcome = run_import_package(args)?;
            print_import(&outcome);
        }
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
