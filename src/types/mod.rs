//! Core data types shared across the tools.
//!
//! This module defines:
//! - Countdown modes and session duration settings with clamping
//! - Theme and navigation enums
//! - Serializable snapshots of the timer engines

use serde::{Deserialize, Serialize};

// ============================================================================
// Duration bounds
// ============================================================================

/// Default work duration in minutes.
pub const DEFAULT_WORK_MINUTES: u32 = 25;

/// Default break duration in minutes.
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// Lower bound shared by both durations.
pub const MIN_MINUTES: u32 = 1;

/// Upper bound for the work duration.
pub const MAX_WORK_MINUTES: u32 = 120;

/// Upper bound for the break duration.
pub const MAX_BREAK_MINUTES: u32 = 60;

/// Clamps a work duration to `[1, 120]`.
pub fn clamp_work_minutes(minutes: i64) -> u32 {
    minutes.clamp(MIN_MINUTES as i64, MAX_WORK_MINUTES as i64) as u32
}

/// Clamps a break duration to `[1, 60]`.
pub fn clamp_break_minutes(minutes: i64) -> u32 {
    minutes.clamp(MIN_MINUTES as i64, MAX_BREAK_MINUTES as i64) as u32
}

/// Parses the leading integer of a text input.
///
/// Surrounding whitespace and an optional sign are accepted; anything after
/// the digits is ignored. Returns `None` when there is no leading integer
/// or it does not fit in an `i64`.
pub fn leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end].parse::<i64>().ok().map(|value| sign * value)
}

/// Parses a typed minute value. Text without a leading integer yields 0.
pub fn parse_minutes(input: &str) -> i64 {
    leading_integer(input).unwrap_or(0)
}

// ============================================================================
// Mode
// ============================================================================

/// Which countdown session is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Focused work session
    #[default]
    Work,
    /// Break between work sessions
    Break,
}

impl Mode {
    /// Returns the string representation of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Work => "work",
            Mode::Break => "break",
        }
    }

    /// Returns the label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Work => "Work",
            Mode::Break => "Break",
        }
    }
}

// ============================================================================
// SessionSettings
// ============================================================================

/// Work and break durations, always within their bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    work_minutes: u32,
    break_minutes: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            work_minutes: DEFAULT_WORK_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

impl SessionSettings {
    /// Builds settings from raw values, clamping each to its bound.
    pub fn clamped(work_minutes: i64, break_minutes: i64) -> Self {
        Self {
            work_minutes: clamp_work_minutes(work_minutes),
            break_minutes: clamp_break_minutes(break_minutes),
        }
    }

    /// Work duration in minutes.
    pub fn work_minutes(&self) -> u32 {
        self.work_minutes
    }

    /// Break duration in minutes.
    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// Configured length of a session in seconds.
    pub fn duration_seconds(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Work => self.work_minutes * 60,
            Mode::Break => self.break_minutes * 60,
        }
    }
}

// ============================================================================
// Theme
// ============================================================================

/// Color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to the preference store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// Top-level tabs of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Timer,
    Converter,
    Budget,
    Settings,
}

impl Tab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Timer => "timer",
            Tab::Converter => "converter",
            Tab::Budget => "budget",
            Tab::Settings => "settings",
        }
    }

    /// Parses a tab name as typed in the shell.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "timer" => Some(Tab::Timer),
            "converter" | "convert" => Some(Tab::Converter),
            "budget" => Some(Tab::Budget),
            "settings" => Some(Tab::Settings),
            _ => None,
        }
    }
}

/// Which timing tool is visible inside the timer tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    #[default]
    Pomodoro,
    Stopwatch,
}

// ============================================================================
// Engine snapshots
// ============================================================================

/// Point-in-time view of the countdown engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownState {
    pub mode: Mode,
    #[serde(rename = "remainingSeconds")]
    pub remaining_seconds: u32,
    pub running: bool,
}

/// Point-in-time view of the stopwatch engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StopwatchState {
    #[serde(rename = "elapsedMilliseconds")]
    pub elapsed_ms: u64,
    pub running: bool,
}

// ============================================================================
// Tests
// ============================================================================
