//! Zen Tools Library
//!
//! This library provides the core functionality for the zentools CLI.
//! It includes:
//! - Countdown (work/break) and stopwatch engines with scoped tickers
//! - Persisted preferences (theme, plan, timer durations)
//! - Unit conversion for length, weight and temperature
//! - An in-memory budget list
//! - The interactive tabbed shell and CLI display utilities

pub mod budget;
pub mod cli;
pub mod converter;
pub mod prefs;
pub mod shell;
pub mod timer;
pub mod types;

// Re-export commonly used types for convenience
pub use budget::{BudgetError, BudgetItem, BudgetList};
pub use converter::{Category, ConvertError, UnitConverter};
pub use prefs::{
    JsonFileStore, MemoryStore, MockPreferenceStore, PreferenceSnapshot, PreferenceStore,
    Preferences, StoreError,
};
pub use shell::{App, Flow, ShellCommand};
pub use timer::{
    Clock, CountdownEngine, CountdownEvent, CountdownPhase, ManualClock, MonotonicClock,
    SettingsEditor, StopwatchEngine, Ticker,
};
pub use types::{
    CountdownState, Mode, SessionSettings, StopwatchState, Tab, Theme, ToolMode,
};
