//! Periodic tick source that exists only while its engine runs.
//!
//! A [`Ticker`] is armed by [`Ticker::sync`] when its engine enters the
//! running state and disarmed on every other call. Disarming drops the
//! underlying interval, so no tick can be delivered afterwards.

use std::future::pending;

use tokio::time::{interval_at, Duration, Instant, Interval, MissedTickBehavior};
use tracing::trace;

/// Period of the countdown ticker.
pub const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

/// Period of the stopwatch sampler.
pub const STOPWATCH_PERIOD: Duration = Duration::from_millis(10);

/// An optionally armed interval.
#[derive(Debug)]
pub struct Ticker {
    name: &'static str,
    period: Duration,
    interval: Option<Interval>,
}

impl Ticker {
    pub fn new(name: &'static str, period: Duration) -> Self {
        Self {
            name,
            period,
            interval: None,
        }
    }

    /// Arms the ticker when `running` and it is idle; disarms it when not.
    pub fn sync(&mut self, running: bool) {
        match (running, self.interval.is_some()) {
            (true, false) => {
                // First tick one period from now, not immediately.
                let mut interval = interval_at(Instant::now() + self.period, self.period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
                self.interval = Some(interval);
                trace!(ticker = self.name, "armed");
            }
            (false, true) => self.disarm(),
            _ => {}
        }
    }

    /// Drops the interval.
    pub fn disarm(&mut self) {
        if self.interval.take().is_some() {
            trace!(ticker = self.name, "disarmed");
        }
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    /// Waits for the next tick. Never resolves while disarmed.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[test]
    fn test_new_ticker_is_disarmed() {
        let ticker = Ticker::new("test", COUNTDOWN_PERIOD);
        assert!(!ticker.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sync_arms_and_disarms() {
        let mut ticker = Ticker::new("test", COUNTDOWN_PERIOD);

        ticker.sync(true);
        assert!(ticker.is_armed());

        ticker.sync(true);
        assert!(ticker.is_armed());

        ticker.sync(false);
        assert!(!ticker.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let mut ticker = Ticker::new("test", COUNTDOWN_PERIOD);
        ticker.sync(true);
        let started = Instant::now();

        ticker.tick().await;

        assert_eq!(started.elapsed(), COUNTDOWN_PERIOD);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disarmed_ticker_never_fires() {
        let mut ticker = Ticker::new("test", STOPWATCH_PERIOD);
        ticker.sync(true);
        ticker.sync(false);

        let result = timeout(Duration::from_secs(5), ticker.tick()).await;

        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_follow_period() {
        let mut ticker = Ticker::new("test", STOPWATCH_PERIOD);
        ticker.sync(true);
        let started = Instant::now();

        for _ in 0..5 {
            ticker.tick().await;
        }

        assert_eq!(started.elapsed(), Duration::from_millis(50));
    }
}
