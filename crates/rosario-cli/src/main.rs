//! Rosario prayer companion CLI.

use clap::{ColorChoice, Parser};
use rosario_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command};
use crate::commands::{open_store, run_beads, run_pray, run_settings};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut location = open_store(cli.config.as_deref(), cli.ephemeral)?;
    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Beads(args) => run_beads(&location, &args, &mut stdout),
        Command::Settings(command) => run_settings(&mut location, &command, &mut stdout),
        Command::Pray(args) => {
            run_pray(location, &args, io::stdin().lock(), &mut stdout).map(|_| ())
        }
    }
}

/// Build logging configuration from CLI flags.
///
/// An explicit `--log-level` beats `-v`/`-q`, and either one disables
/// `RUST_LOG`. File logs carry timestamps and never ANSI colors.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level = cli
        .log_level
        .map_or_else(|| cli.verbosity.tracing_level_filter(), LevelFilter::from);
    let ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    let mut config = LogConfig::default()
        .with_level(level)
        .with_format(LogFormat::from(cli.log_format))
        .with_timestamps(cli.log_file.is_some())
        .with_ansi(ansi)
        .with_log_file(cli.log_file.clone());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config
}
