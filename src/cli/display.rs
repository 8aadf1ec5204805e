//! Display utilities for the terminal front end.
//!
//! This module formats:
//! - Countdown and stopwatch readouts
//! - Converter results and budget listings
//! - Stored preferences and help text

use crate::budget::BudgetList;
use crate::converter::UnitConverter;
use crate::prefs::PreferenceSnapshot;
use crate::timer::{Clock, CountdownEngine, StopwatchEngine};
use crate::types::{Tab, Theme};

// ============================================================================
// Display
// ============================================================================

/// Formatting helpers for CLI output.
pub struct Display;

impl Display {
    /// Formats seconds as `MM:SS`.
    pub fn format_countdown(total_seconds: u32) -> String {
        format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
    }

    /// Formats milliseconds as `MM:SS.cc`.
    pub fn format_stopwatch(ms: u64) -> String {
        let minutes = ms / 60_000;
        let seconds = (ms % 60_000) / 1000;
        let centis = (ms % 1000) / 10;
        format!("{:02}:{:02}.{:02}", minutes, seconds, centis)
    }

    /// One-line countdown readout, e.g. `Work 24:59 Active (0%)`.
    pub fn countdown_line(countdown: &CountdownEngine) -> String {
        format!(
            "{} {} {} ({:.0}%)",
            countdown.mode().label(),
            Self::format_countdown(countdown.remaining_seconds()),
            if countdown.is_running() { "Active" } else { "Paused" },
            countdown.progress()
        )
    }

    /// One-line stopwatch readout, e.g. `Stopwatch 00:01.23 Running`.
    pub fn stopwatch_line<C: Clock>(stopwatch: &StopwatchEngine<C>) -> String {
        format!(
            "Stopwatch {} {}",
            Self::format_stopwatch(stopwatch.elapsed_ms()),
            if stopwatch.is_running() { "Running" } else { "Stopped" }
        )
    }

    /// Converter readout, e.g. `1 m = 3.2808 ft`.
    pub fn converter_line(converter: &UnitConverter) -> String {
        let (from, to) = converter.units();
        format!(
            "[{}] {} {} = {} {}",
            converter.category().as_str(),
            converter.amount(),
            from,
            converter.result(),
            to
        )
    }

    /// Numbered budget listing followed by the total.
    pub fn budget_lines(budget: &BudgetList) -> Vec<String> {
        let mut lines: Vec<String> = budget
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{:>3}. {:<24} {:>10.2}", i + 1, item.name, item.amount))
            .collect();

        if lines.is_empty() {
            lines.push("Your list is empty".to_string());
        }
        lines.push(format!(
            "Total: {:.2} ({} items in list)",
            budget.total(),
            budget.len()
        ));
        lines
    }

    /// Stored preferences, one per line.
    pub fn settings_lines(snapshot: &PreferenceSnapshot) -> Vec<String> {
        vec![
            format!("Theme: {}", Self::theme_label(snapshot.theme)),
            format!(
                "Plan: {}",
                if snapshot.pro { "Pro" } else { "Free" }
            ),
            format!("Work: {} min", snapshot.work_minutes),
            format!("Break: {} min", snapshot.break_minutes),
        ]
    }

    pub fn theme_label(theme: Theme) -> &'static str {
        match theme {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Shell help for the active tab.
    pub fn help_lines(tab: Tab) -> Vec<String> {
        let mut lines = vec![
            "Tabs: timer, converter, budget, settings (type a name or 'tab <name>')".to_string(),
            "Anywhere: status, theme, help, quit".to_string(),
        ];
        let specific: &[&str] = match tab {
            Tab::Timer => &[
                "tool pomodoro|stopwatch   switch timing tool",
                "start | pause | toggle    control the visible tool",
                "reset                     reset the visible tool",
                "work | break              switch countdown mode",
                "edit                      edit durations (then: set work N, set break N, save, cancel)",
            ],
            Tab::Converter => &[
                "category length|weight|temperature",
                "amount X | from UNIT | to UNIT",
            ],
            Tab::Budget => &[
                "add NAME AMOUNT           add an item",
                "remove N                  remove item number N",
                "clear                     remove all items",
                "list                      show the list",
            ],
            Tab::Settings => &[
                "pro                       toggle the Pro plan",
                "timers WORK BREAK         save timer durations (Pro)",
            ],
        };
        lines.extend(specific.iter().map(|s| format!("  {}", s)));
        lines
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("error: {}", message);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualClock;
    use crate::types::SessionSettings;

    mod format_tests {
        use super::*;

        #[test]
        fn test_format_countdown() {
            assert_eq!(Display::format_countdown(0), "00:00");
            assert_eq!(Display::format_countdown(45), "00:45");
            assert_eq!(Display::format_countdown(1500), "25:00");
            assert_eq!(Display::format_countdown(120 * 60), "120:00");
        }

        #[test]
        fn test_format_stopwatch() {
            assert_eq!(Display::format_stopwatch(0), "00:00.00");
            assert_eq!(Display::format_stopwatch(1234), "00:01.23");
            assert_eq!(Display::format_stopwatch(61_999), "01:01.99");
        }
    }

    mod line_tests {
        use super::*;

        #[test]
        fn test_countdown_line() {
            let countdown = CountdownEngine::new(SessionSettings::default());
            assert_eq!(Display::countdown_line(&countdown), "Work 25:00 Paused (0%)");
        }

        #[test]
        fn test_stopwatch_line() {
            let clock = ManualClock::new();
            let mut stopwatch = StopwatchEngine::with_clock(clock.clone());
            stopwatch.start();
            clock.set(1234);
            stopwatch.sample();

            assert_eq!(
                Display::stopwatch_line(&stopwatch),
                "Stopwatch 00:01.23 Running"
            );
        }

        #[test]
        fn test_converter_line() {
            let converter = UnitConverter::new();
            assert_eq!(
                Display::converter_line(&converter),
                "[length] 1 m = 3.2808 ft"
            );
        }

        #[test]
        fn test_budget_lines_empty() {
            let lines = Display::budget_lines(&BudgetList::new());
            assert_eq!(lines[0], "Your list is empty");
            assert_eq!(lines[1], "Total: 0.00 (0 items in list)");
        }

        #[test]
        fn test_budget_lines_with_items() {
            let mut budget = BudgetList::new();
            budget.add("Coffee", "3.5").unwrap();

            let lines = Display::budget_lines(&budget);
            assert!(lines[0].contains("1. Coffee"));
            assert!(lines[0].ends_with("3.50"));
            assert_eq!(lines[1], "Total: 3.50 (1 items in list)");
        }

        #[test]
        fn test_help_mentions_tab_commands() {
            let lines = Display::help_lines(Tab::Budget);
            assert!(lines.iter().any(|l| l.contains("add NAME AMOUNT")));
            assert!(!lines.iter().any(|l| l.contains("tool pomodoro")));
        }
    }
}
