//! Interactive tabbed shell.
//!
//! - `input`: parsing of typed lines into [`ShellCommand`]s
//! - `runner`: the event loop that feeds input lines and ticks into [`App`]
//!
//! The timer tab's state lives in a [`TimerView`] that exists only while the
//! tab is selected. Leaving the tab drops it, which also stops both engines.

pub mod input;
pub mod runner;

use tracing::debug;

use crate::budget::BudgetList;
use crate::cli::Display;
use crate::converter::UnitConverter;
use crate::prefs::Preferences;
use crate::timer::{Clock, CountdownEngine, CountdownEvent, MonotonicClock, SettingsEditor, StopwatchEngine};
use crate::types::{Mode, Tab, ToolMode};

pub use input::{parse, InputError, ShellCommand};
pub use runner::{run_countdown, run_shell, run_stopwatch};

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print these lines and keep reading.
    Continue(Vec<String>),
    /// Leave the shell.
    Quit,
}

impl Flow {
    fn line(line: impl Into<String>) -> Self {
        Flow::Continue(vec![line.into()])
    }
}

// ============================================================================
// TimerView
// ============================================================================

/// State of the mounted timer tab.
#[derive(Debug)]
pub struct TimerView<C: Clock = MonotonicClock> {
    tool: ToolMode,
    countdown: CountdownEngine,
    stopwatch: StopwatchEngine<C>,
    editor: Option<SettingsEditor>,
}

impl<C: Clock> TimerView<C> {
    fn mount(prefs: &Preferences, clock: C) -> Self {
        debug!("timer view mounted");
        Self {
            tool: ToolMode::Pomodoro,
            countdown: CountdownEngine::new(prefs.session()),
            stopwatch: StopwatchEngine::with_clock(clock),
            editor: None,
        }
    }

    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    pub fn countdown(&self) -> &CountdownEngine {
        &self.countdown
    }

    pub fn stopwatch(&self) -> &StopwatchEngine<C> {
        &self.stopwatch
    }

    pub fn editor(&self) -> Option<&SettingsEditor> {
        self.editor.as_ref()
    }

    fn status_line(&self) -> String {
        match self.tool {
            ToolMode::Pomodoro => Display::countdown_line(&self.countdown),
            ToolMode::Stopwatch => Display::stopwatch_line(&self.stopwatch),
        }
    }
}

impl<C: Clock> Drop for TimerView<C> {
    fn drop(&mut self) {
        debug!("timer view unmounted");
    }
}

// ============================================================================
// App
// ============================================================================

/// All shell state.
pub struct App<C: Clock + Clone = MonotonicClock> {
    prefs: Preferences,
    clock: C,
    tab: Tab,
    timer: Option<TimerView<C>>,
    converter: UnitConverter,
    budget: BudgetList,
}

impl App<MonotonicClock> {
    pub fn new(prefs: Preferences) -> Self {
        Self::with_clock(prefs, MonotonicClock::new())
    }
}

impl<C: Clock + Clone> App<C> {
    /// Creates the shell on the timer tab.
    pub fn with_clock(prefs: Preferences, clock: C) -> Self {
        let timer = Some(TimerView::mount(&prefs, clock.clone()));
        Self {
            prefs,
            clock,
            tab: Tab::Timer,
            timer,
            converter: UnitConverter::new(),
            budget: BudgetList::new(),
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    pub fn timer(&self) -> Option<&TimerView<C>> {
        self.timer.as_ref()
    }

    pub fn converter(&self) -> &UnitConverter {
        &self.converter
    }

    pub fn budget(&self) -> &BudgetList {
        &self.budget
    }

    pub fn countdown_running(&self) -> bool {
        self.timer
            .as_ref()
            .is_some_and(|view| view.countdown.is_running())
    }

    pub fn stopwatch_running(&self) -> bool {
        self.timer
            .as_ref()
            .is_some_and(|view| view.stopwatch.is_running())
    }

    /// Prompt shown before each input line.
    pub fn prompt(&self) -> String {
        format!("{}> ", self.tab.as_str())
    }

    /// Greeting printed when the shell starts.
    pub fn banner(&self) -> Vec<String> {
        vec![
            format!(
                "zentools ({} theme). Type 'help' for commands.",
                Display::theme_label(self.prefs.theme()).to_lowercase()
            ),
            self.status_line(),
        ]
    }

    /// Advances the countdown by one second.
    pub fn on_countdown_tick(&mut self) -> Vec<String> {
        let Some(view) = self.timer.as_mut() else {
            return Vec::new();
        };
        match view.countdown.tick() {
            Some(CountdownEvent::Expired { mode }) => {
                vec![format!("{} session complete", mode.label())]
            }
            Some(CountdownEvent::Ticked { .. }) | None => Vec::new(),
        }
    }

    /// Resamples the stopwatch.
    pub fn on_stopwatch_sample(&mut self) {
        if let Some(view) = self.timer.as_mut() {
            view.stopwatch.sample();
        }
    }

    /// Applies one command.
    pub fn handle(&mut self, command: ShellCommand) -> Flow {
        match command {
            ShellCommand::Tab(tab) => self.switch_tab(tab),
            ShellCommand::Help => Flow::Continue(Display::help_lines(self.tab)),
            ShellCommand::Status => Flow::line(self.status_line()),
            ShellCommand::Theme => {
                let theme = self.prefs.toggle_theme();
                Flow::line(format!("Theme: {}", Display::theme_label(theme)))
            }
            ShellCommand::Quit => Flow::Quit,

            ShellCommand::Tool(_)
            | ShellCommand::Start
            | ShellCommand::Pause
            | ShellCommand::Toggle
            | ShellCommand::Reset
            | ShellCommand::SwitchMode(_)
            | ShellCommand::Edit
            | ShellCommand::SetWork(_)
            | ShellCommand::SetBreak(_)
            | ShellCommand::Save
            | ShellCommand::Cancel => self.handle_timer(command),

            ShellCommand::Category(_)
            | ShellCommand::Amount(_)
            | ShellCommand::From(_)
            | ShellCommand::To(_) => self.handle_converter(command),

            ShellCommand::Add { .. }
            | ShellCommand::Remove(_)
            | ShellCommand::Clear { .. }
            | ShellCommand::List => self.handle_budget(command),

            ShellCommand::Pro | ShellCommand::Timers { .. } => self.handle_settings(command),
        }
    }

    fn switch_tab(&mut self, tab: Tab) -> Flow {
        if tab != Tab::Timer {
            // Unmounting stops both engines; the loop then drops their tickers.
            self.timer = None;
        } else if self.timer.is_none() {
            self.timer = Some(TimerView::mount(&self.prefs, self.clock.clone()));
        }
        self.tab = tab;
        Flow::line(self.status_line())
    }

    fn status_line(&self) -> String {
        match self.tab {
            Tab::Timer => self
                .timer
                .as_ref()
                .map(TimerView::status_line)
                .unwrap_or_default(),
            Tab::Converter => Display::converter_line(&self.converter),
            Tab::Budget => format!(
                "Budget: {:.2} ({} items in list)",
                self.budget.total(),
                self.budget.len()
            ),
            Tab::Settings => Display::settings_lines(&self.prefs.snapshot()).join(", "),
        }
    }

    fn wrong_tab(&self, tab: Tab) -> Flow {
        Flow::line(format!(
            "That command belongs to the {} tab (you are on {})",
            tab.as_str(),
            self.tab.as_str()
        ))
    }

    fn handle_timer(&mut self, command: ShellCommand) -> Flow {
        let Some(view) = self.timer.as_mut() else {
            return self.wrong_tab(Tab::Timer);
        };

        match command {
            ShellCommand::Tool(tool) => {
                view.tool = tool;
                view.editor = None;
            }
            ShellCommand::Start => match view.tool {
                ToolMode::Pomodoro => {
                    view.countdown.start();
                }
                ToolMode::Stopwatch => view.stopwatch.start(),
            },
            ShellCommand::Pause => match view.tool {
                ToolMode::Pomodoro => view.countdown.pause(),
                ToolMode::Stopwatch => view.stopwatch.stop(),
            },
            ShellCommand::Toggle => match view.tool {
                ToolMode::Pomodoro => {
                    view.countdown.toggle();
                }
                ToolMode::Stopwatch => {
                    view.stopwatch.toggle();
                }
            },
            ShellCommand::Reset => match view.tool {
                ToolMode::Pomodoro => view.countdown.reset(),
                ToolMode::Stopwatch => view.stopwatch.reset(),
            },
            ShellCommand::SwitchMode(mode) => {
                if view.tool != ToolMode::Pomodoro {
                    return Flow::line("Switch to the pomodoro tool first ('tool pomodoro')");
                }
                view.countdown.switch_mode(mode);
            }
            ShellCommand::Edit => {
                if view.tool != ToolMode::Pomodoro {
                    return Flow::line("Switch to the pomodoro tool first ('tool pomodoro')");
                }
                let editor = SettingsEditor::open(view.countdown.settings());
                let (work, brk) = editor.draft();
                view.editor = Some(editor);
                return Flow::line(format!(
                    "Editing durations: work {} min, break {} min",
                    work, brk
                ));
            }
            ShellCommand::SetWork(value) => {
                return Self::edit_draft(view, |editor| editor.set_work_input(&value));
            }
            ShellCommand::SetBreak(value) => {
                return Self::edit_draft(view, |editor| editor.set_break_input(&value));
            }
            ShellCommand::Save => {
                let Some(editor) = view.editor.take() else {
                    return Flow::line("Nothing to save");
                };
                let saved = editor.save(&mut self.prefs, &mut view.countdown);
                return Flow::Continue(vec![
                    format!(
                        "Saved: work {} min, break {} min",
                        saved.work_minutes(),
                        saved.break_minutes()
                    ),
                    view.status_line(),
                ]);
            }
            ShellCommand::Cancel => {
                if let Some(editor) = view.editor.take() {
                    editor.cancel();
                }
            }
            _ => {}
        }

        Flow::line(view.status_line())
    }

    fn edit_draft(view: &mut TimerView<C>, apply: impl FnOnce(&mut SettingsEditor)) -> Flow {
        let Some(editor) = view.editor.as_mut() else {
            return Flow::line("Type 'edit' first");
        };
        apply(editor);
        let (work, brk) = editor.draft();
        Flow::line(format!("Draft: work {} min, break {} min", work, brk))
    }

    fn handle_converter(&mut self, command: ShellCommand) -> Flow {
        if self.tab != Tab::Converter {
            return self.wrong_tab(Tab::Converter);
        }

        let result = match command {
            ShellCommand::Category(category) => {
                self.converter.set_category(category);
                Ok(())
            }
            ShellCommand::Amount(amount) => {
                self.converter.set_amount(&amount);
                Ok(())
            }
            ShellCommand::From(unit) => self.converter.set_from(&unit),
            ShellCommand::To(unit) => self.converter.set_to(&unit),
            _ => Ok(()),
        };

        match result {
            Ok(()) => Flow::line(Display::converter_line(&self.converter)),
            Err(e) => Flow::Continue(vec![
                e.to_string(),
                format!(
                    "Units: {}",
                    self.converter.category().units().join(", ")
                ),
            ]),
        }
    }

    fn handle_budget(&mut self, command: ShellCommand) -> Flow {
        if self.tab != Tab::Budget {
            return self.wrong_tab(Tab::Budget);
        }

        match command {
            ShellCommand::Add { name, amount } => match self.budget.add(&name, &amount) {
                Ok(item) => Flow::line(format!("Added {} ({:.2})", item.name, item.amount)),
                Err(e) => Flow::line(format!("Not added: {}", e)),
            },
            ShellCommand::Remove(number) => {
                let id = self.budget.items().get(number - 1).map(|item| item.id);
                match id.and_then(|id| self.budget.remove(id)) {
                    Some(item) => Flow::line(format!("Removed {}", item.name)),
                    None => Flow::line(format!("No item number {}", number)),
                }
            }
            ShellCommand::Clear { confirmed } => {
                if !self.budget.is_empty() && !confirmed {
                    return Flow::line(format!(
                        "Type 'clear yes' to remove all {} items",
                        self.budget.len()
                    ));
                }
                self.budget.clear();
                Flow::line("List cleared")
            }
            _ => Flow::Continue(Display::budget_lines(&self.budget)),
        }
    }

    fn handle_settings(&mut self, command: ShellCommand) -> Flow {
        if self.tab != Tab::Settings {
            return self.wrong_tab(Tab::Settings);
        }

        match command {
            ShellCommand::Pro => {
                if self.prefs.toggle_pro() {
                    Flow::line("You're Pro! All features unlocked.")
                } else {
                    Flow::line("Back on the Free plan")
                }
            }
            ShellCommand::Timers {
                work,
                break_minutes,
            } => {
                if !self.prefs.is_pro() {
                    return Flow::line("Custom durations need Pro ('pro' to upgrade)");
                }
                let mut editor = SettingsEditor::open(self.prefs.session());
                editor.set_work_input(&work);
                editor.set_break_input(&break_minutes);
                let saved = editor.commit(&mut self.prefs);
                Flow::line(format!(
                    "Timer settings saved (work {} min, break {} min). They apply to the next timer session.",
                    saved.work_minutes(),
                    saved.break_minutes()
                ))
            }
            _ => Flow::line(self.status_line()),
        }
    }

    /// Mode of the mounted countdown, if the timer tab is open.
    pub fn countdown_mode(&self) -> Option<Mode> {
        self.timer.as_ref().map(|view| view.countdown.mode())
    }
}
