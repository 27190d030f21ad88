//! CLI argument definitions for the Rosario prayer companion.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use rosario_cli::logging::LogFormat;
use rosario_model::{DisplayMode, Language, NavigationMode, PrayerLocation, PrayerType};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "rosario",
    version,
    about = "Rosario - pray the rosary, chaplet or Jesus prayer bead by bead",
    long_about = "Walk through the beads of a devotional prayer.\n\n\
                  Supports the Rosary, the Chaplet of Divine Mercy and the Jesus prayer.\n\
                  Preferences are kept in a settings file between sessions."
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

    /// Settings file to use instead of the platform default.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Keep settings in memory only; nothing is read from or written to disk.
    #[arg(long = "ephemeral", global = true, conflicts_with = "config")]
    pub ephemeral: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the bead sequence of a prayer.
    Beads(BeadsArgs),

    /// Show or change stored preferences.
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Pray interactively, one bead per line of input.
    Pray(PrayArgs),
}

#[derive(Args)]
pub struct BeadsArgs {
    /// Prayer to list (defaults to the stored prayer type).
    #[arg(long = "prayer", value_name = "TYPE")]
    pub prayer: Option<PrayerType>,

    /// Plain text output without table borders.
    #[arg(long = "plain")]
    pub plain: bool,
}

#[derive(Args)]
pub struct PrayArgs {
    /// Switch to this prayer before starting (the choice is saved).
    #[arg(long = "prayer", value_name = "TYPE")]
    pub prayer: Option<PrayerType>,
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Print the current preferences.
    Show,

    /// Change one or more preferences.
    Set(SetArgs),

    /// Restore the defaults.
    Reset,
}

#[derive(Args, Default)]
pub struct SetArgs {
    #[arg(long = "language", value_name = "CODE")]
    pub language: Option<Language>,

    #[arg(long = "navigation-mode", value_name = "MODE")]
    pub navigation_mode: Option<NavigationMode>,

    #[arg(long = "prayer", value_name = "TYPE")]
    pub prayer: Option<PrayerType>,

    #[arg(long = "display-mode", value_name = "MODE")]
    pub display_mode: Option<DisplayMode>,

    #[arg(long = "allow-rewind", value_name = "BOOL", action = ArgAction::Set)]
    pub allow_rewind: Option<bool>,

    #[arg(long = "prayer-location", value_name = "LOCATION")]
    pub prayer_location: Option<PrayerLocation>,

    #[arg(long = "show-bead-number", value_name = "BOOL", action = ArgAction::Set)]
    pub show_bead_number: Option<bool>,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_settings_set() {
        let cli = Cli::try_parse_from([
            "rosario",
            "settings",
            "set",
            "--prayer",
            "divine-mercy",
            "--allow-rewind",
            "false",
        ])
        .unwrap();
        let Command::Settings(SettingsCommand::Set(args)) = cli.command else {
            panic!("expected settings set");
        };
        assert_eq!(args.prayer, Some(PrayerType::DivineMercy));
        assert_eq!(args.allow_rewind, Some(false));
    }

    #[test]
    fn ephemeral_conflicts_with_config() {
        let result = Cli::try_parse_from([
            "rosario",
            "--ephemeral",
            "--config",
            "settings.toml",
            "beads",
        ]);
        assert!(result.is_err());
    }
}
