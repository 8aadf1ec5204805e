//! Focus timer: pomodoro countdown and stopwatch.
//!
//! - `countdown`: work/break countdown engine
//! - `stopwatch`: wall-clock stopwatch engine
//! - `editor`: draft editing of session durations
//! - `ticker`: periodic tick sources owned by the running engines
//! - `clock`: time sources for the stopwatch

pub mod clock;
pub mod countdown;
pub mod editor;
pub mod stopwatch;
pub mod ticker;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use countdown::{CountdownEngine, CountdownEvent, CountdownPhase};
pub use editor::SettingsEditor;
pub use stopwatch::StopwatchEngine;
pub use ticker::{Ticker, COUNTDOWN_PERIOD, STOPWATCH_PERIOD};
