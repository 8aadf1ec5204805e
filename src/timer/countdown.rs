//! Countdown engine for work/break sessions.
//!
//! This module provides:
//! - Start/pause/toggle of the running flag
//! - One-second ticks that stop at zero
//! - Reset and mode switching, both recomputing the remaining time
//! - Applying new durations (clamped and persisted)

use tracing::debug;

use crate::prefs::Preferences;
use crate::types::{CountdownState, Mode, SessionSettings};

// ============================================================================
// CountdownEvent
// ============================================================================

/// Result of a tick that changed the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    /// One second elapsed
    Ticked {
        /// Remaining seconds
        remaining_seconds: u32,
    },
    /// The session reached zero and stopped
    Expired {
        /// Mode that finished
        mode: Mode,
    },
}

/// Observable lifecycle of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownPhase {
    Idle,
    Running,
    Expired,
}

// ============================================================================
// CountdownEngine
// ============================================================================

/// Work/break countdown.
#[derive(Debug, Clone)]
pub struct CountdownEngine {
    mode: Mode,
    remaining_seconds: u32,
    running: bool,
    settings: SessionSettings,
}

impl CountdownEngine {
    /// Creates an idle engine in work mode with a full session.
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            mode: Mode::Work,
            remaining_seconds: settings.duration_seconds(Mode::Work),
            running: false,
            settings,
        }
    }

    /// Starts counting down.
    ///
    /// Returns false (and does nothing) if already running or nothing remains.
    pub fn start(&mut self) -> bool {
        if self.running || self.remaining_seconds == 0 {
            return false;
        }
        self.running = true;
        debug!(mode = self.mode.as_str(), remaining = self.remaining_seconds, "countdown started");
        true
    }

    /// Stops counting down, keeping the remaining time.
    pub fn pause(&mut self) {
        if self.running {
            self.running = false;
            debug!(remaining = self.remaining_seconds, "countdown paused");
        }
    }

    /// Starts when paused, pauses when running. Returns the new running flag.
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
        self.running
    }

    /// Advances the countdown by one second.
    ///
    /// Returns `None` when the engine is not running.
    pub fn tick(&mut self) -> Option<CountdownEvent> {
        if !self.running {
            return None;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);

        if self.remaining_seconds == 0 {
            self.running = false;
            debug!(mode = self.mode.as_str(), "countdown expired");
            return Some(CountdownEvent::Expired { mode: self.mode });
        }

        Some(CountdownEvent::Ticked {
            remaining_seconds: self.remaining_seconds,
        })
    }

    /// Stops and refills the current mode's session.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_seconds = self.settings.duration_seconds(self.mode);
        debug!(mode = self.mode.as_str(), remaining = self.remaining_seconds, "countdown reset");
    }

    /// Stops and selects `mode` with a full session.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset();
    }

    /// Clamps and saves new durations, then resets.
    pub fn apply_settings(
        &mut self,
        work_minutes: i64,
        break_minutes: i64,
        prefs: &mut Preferences,
    ) -> SessionSettings {
        let settings = SessionSettings::clamped(work_minutes, break_minutes);
        prefs.save_session(settings);
        self.settings = settings;
        self.reset();
        settings
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    pub fn phase(&self) -> CountdownPhase {
        if self.running {
            CountdownPhase::Running
        } else if self.remaining_seconds == 0 {
            CountdownPhase::Expired
        } else {
            CountdownPhase::Idle
        }
    }

    /// Share of the current session already elapsed, in percent.
    pub fn progress(&self) -> f64 {
        let total = self.settings.duration_seconds(self.mode);
        if total == 0 {
            return 0.0;
        }
        f64::from(total.saturating_sub(self.remaining_seconds)) / f64::from(total) * 100.0
    }

    pub fn state(&self) -> CountdownState {
        CountdownState {
            mode: self.mode,
            remaining_seconds: self.remaining_seconds,
            running: self.running,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
