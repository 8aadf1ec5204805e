//! Parsing of shell input lines into commands.

use thiserror::Error;

use crate::converter::Category;
use crate::types::{Mode, Tab, ToolMode};

/// Errors produced while parsing a shell line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Blank line.
    #[error("empty input")]
    Empty,

    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),

    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("'{value}' is not a valid {what}")]
    InvalidArgument { value: String, what: &'static str },
}

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    // Global
    Tab(Tab),
    Help,
    Status,
    Theme,
    Quit,

    // Timer tab
    Tool(ToolMode),
    Start,
    Pause,
    Toggle,
    Reset,
    SwitchMode(Mode),
    Edit,
    SetWork(String),
    SetBreak(String),
    Save,
    Cancel,

    // Converter tab
    Category(Category),
    Amount(String),
    From(String),
    To(String),

    // Budget tab
    Add { name: String, amount: String },
    Remove(usize),
    Clear { confirmed: bool },
    List,

    // Settings tab
    Pro,
    Timers { work: String, break_minutes: String },
}

/// Parses one input line.
pub fn parse(line: &str) -> Result<ShellCommand, InputError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(InputError::Empty);
    };
    let rest: Vec<&str> = words.collect();
    let arg = |command: &'static str, what: &'static str| -> Result<String, InputError> {
        rest.first()
            .map(|s| s.to_string())
            .ok_or(InputError::MissingArgument { command, what })
    };

    if let Some(tab) = Tab::from_name(head) {
        return Ok(ShellCommand::Tab(tab));
    }

    let command = match head {
        "tab" => {
            let name = arg("tab", "a tab name")?;
            let tab = Tab::from_name(&name).ok_or(InputError::InvalidArgument {
                value: name,
                what: "tab",
            })?;
            ShellCommand::Tab(tab)
        }
        "help" | "?" => ShellCommand::Help,
        "status" => ShellCommand::Status,
        "theme" => ShellCommand::Theme,
        "quit" | "exit" | "q" => ShellCommand::Quit,

        "tool" => match arg("tool", "pomodoro or stopwatch")?.as_str() {
            "pomodoro" => ShellCommand::Tool(ToolMode::Pomodoro),
            "stopwatch" => ShellCommand::Tool(ToolMode::Stopwatch),
            other => {
                return Err(InputError::InvalidArgument {
                    value: other.to_string(),
                    what: "tool",
                })
            }
        },
        "start" => ShellCommand::Start,
        "pause" | "stop" => ShellCommand::Pause,
        "toggle" => ShellCommand::Toggle,
        "reset" => ShellCommand::Reset,
        "work" => ShellCommand::SwitchMode(Mode::Work),
        "break" => ShellCommand::SwitchMode(Mode::Break),
        "edit" => ShellCommand::Edit,
        "set" => {
            let field = arg("set", "'work' or 'break' and a value")?;
            // A missing value is treated like a cleared input field.
            let value = rest.get(1).map(|s| s.to_string()).unwrap_or_default();
            match field.as_str() {
                "work" => ShellCommand::SetWork(value),
                "break" => ShellCommand::SetBreak(value),
                _ => {
                    return Err(InputError::InvalidArgument {
                        value: field,
                        what: "setting (work or break)",
                    })
                }
            }
        }
        "save" => ShellCommand::Save,
        "cancel" => ShellCommand::Cancel,

        "category" => {
            let name = arg("category", "length, weight or temperature")?;
            let category = Category::from_name(&name).ok_or(InputError::InvalidArgument {
                value: name,
                what: "category",
            })?;
            ShellCommand::Category(category)
        }
        "amount" => ShellCommand::Amount(rest.join(" ")),
        "from" => ShellCommand::From(arg("from", "a unit")?),
        "to" => ShellCommand::To(arg("to", "a unit")?),

        "add" => {
            if rest.len() < 2 {
                return Err(InputError::MissingArgument {
                    command: "add",
                    what: "a name and an amount",
                });
            }
            let last = rest.len() - 1;
            ShellCommand::Add {
                name: rest[..last].join(" "),
                amount: rest[last].to_string(),
            }
        }
        "remove" | "rm" => {
            let value = arg("remove", "an item number")?;
            let index = value
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(InputError::InvalidArgument {
                    value,
                    what: "item number",
                })?;
            ShellCommand::Remove(index)
        }
        "clear" => ShellCommand::Clear {
            confirmed: matches!(rest.first(), Some(&"yes") | Some(&"y")),
        },
        "list" | "ls" => ShellCommand::List,

        "pro" | "upgrade" => ShellCommand::Pro,
        "timers" => {
            if rest.len() < 2 {
                return Err(InputError::MissingArgument {
                    command: "timers",
                    what: "work and break minutes",
                });
            }
            ShellCommand::Timers {
                work: rest[0].to_string(),
                break_minutes: rest[1].to_string(),
            }
        }

        other => return Err(InputError::Unknown(other.to_string())),
    };

    Ok(command)
}
