//! Stopwatch engine.
//!
//! Elapsed time is recomputed from the clock on every sample instead of
//! adding up tick periods, so late or skipped samples never introduce drift.

use tracing::debug;

use super::clock::{Clock, MonotonicClock};
use crate::types::StopwatchState;

/// Start/stop stopwatch with millisecond resolution.
#[derive(Debug, Clone)]
pub struct StopwatchEngine<C: Clock = MonotonicClock> {
    clock: C,
    elapsed_ms: u64,
    /// Clock reading that corresponds to zero elapsed time while running.
    start_reference: Option<i64>,
}

impl StopwatchEngine<MonotonicClock> {
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl Default for StopwatchEngine<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> StopwatchEngine<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            elapsed_ms: 0,
            start_reference: None,
        }
    }

    /// Starts or resumes from the current elapsed value. No-op when running.
    pub fn start(&mut self) {
        if self.start_reference.is_some() {
            return;
        }
        let now = self.clock.now_ms() as i64;
        self.start_reference = Some(now - self.elapsed_ms as i64);
        debug!(elapsed_ms = self.elapsed_ms, "stopwatch started");
    }

    /// Recomputes elapsed time from the clock. Ignored when stopped.
    pub fn sample(&mut self) -> u64 {
        if let Some(reference) = self.start_reference {
            let now = self.clock.now_ms() as i64;
            let elapsed = (now - reference).max(0) as u64;
            self.elapsed_ms = self.elapsed_ms.max(elapsed);
        }
        self.elapsed_ms
    }

    /// Stops, keeping the last sampled value.
    pub fn stop(&mut self) {
        if self.start_reference.take().is_some() {
            debug!(elapsed_ms = self.elapsed_ms, "stopwatch stopped");
        }
    }

    /// Starts when stopped, stops when running. Returns the new running flag.
    pub fn toggle(&mut self) -> bool {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
        self.is_running()
    }

    /// Stops and clears.
    pub fn reset(&mut self) {
        self.start_reference = None;
        self.elapsed_ms = 0;
        debug!("stopwatch reset");
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn is_running(&self) -> bool {
        self.start_reference.is_some()
    }

    pub fn state(&self) -> StopwatchState {
        StopwatchState {
            elapsed_ms: self.elapsed_ms,
            running: self.is_running(),
        }
    }
}
