//! Command definitions for the zentools CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::types::Mode;

// ============================================================================
// CLI Structure
// ============================================================================

/// Zen Tools - focus timer, stopwatch, unit converter and quick budget
#[derive(Parser, Debug)]
#[command(
    name = "zentools",
    version,
    about = "A small terminal toolbox for focused work",
    long_about = "A pomodoro timer with a stopwatch, a unit converter and a quick budget list.\n\
                  Preferences (theme, plan, timer durations) are kept in a small JSON file.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Preference file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub prefs: Option<PathBuf>,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive tabbed shell
    Shell,

    /// Run one countdown session in the foreground
    Timer {
        /// Session to run
        #[arg(short, long, value_enum, default_value_t = ModeArg::Work)]
        mode: ModeArg,
    },

    /// Run the stopwatch until Enter is pressed
    Stopwatch,

    /// Convert an amount between two units
    Convert {
        /// Amount to convert
        #[arg(allow_negative_numbers = true)]
        amount: String,

        /// Source unit (e.g. km, lb, C)
        from: String,

        /// Target unit
        to: String,
    },

    /// Show or change stored timer durations
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Show or change the color theme
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },

    /// Show or change the Pro plan flag
    Pro {
        #[arg(value_enum, default_value_t = ProAction::Show)]
        action: ProAction,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// `settings` subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum SettingsCommand {
    /// Print stored preferences
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Store timer durations (clamped to 1-120 work, 1-60 break)
    Set(SetArgs),
}

/// Arguments for `settings set`
#[derive(Args, Debug, Clone, Default)]
pub struct SetArgs {
    /// Work minutes
    #[arg(short, long, allow_hyphen_values = true)]
    pub work: Option<String>,

    /// Break minutes
    #[arg(short, long = "break", allow_hyphen_values = true)]
    pub break_minutes: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Work,
    Break,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Work => Mode::Work,
            ModeArg::Break => Mode::Break,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
    Dark,
    Light,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProAction {
    Show,
    Toggle,
    On,
    Off,
}

// ============================================================================
// Tests
// ============================================================================
