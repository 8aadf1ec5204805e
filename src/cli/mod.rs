//! CLI module for zentools.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `display`: Output formatting and display logic

pub mod commands;
pub mod display;

pub use commands::{Cli, Commands, ModeArg, ProAction, SetArgs, SettingsCommand, ThemeAction};
pub use display::Display;
