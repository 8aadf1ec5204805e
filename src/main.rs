//! Zen Tools CLI - a small terminal toolbox
//!
//! - Pomodoro countdown with work/break modes and a stopwatch
//! - Length, weight and temperature conversion
//! - A quick budget list with a running total

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tokio::io::BufReader;
use tracing::{debug, info, warn};

use zentools::cli::{Cli, Commands, Display, ProAction, SetArgs, SettingsCommand, ThemeAction};
use zentools::converter;
use zentools::prefs::{
    default_prefs_path, detect_system_theme, JsonFileStore, MemoryStore, PreferenceStore,
    Preferences,
};
use zentools::shell::{self, App};
use zentools::timer::{CountdownEngine, SettingsEditor, StopwatchEngine};
use zentools::types::Theme;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Err(e) = execute(cli).await {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// `RUST_LOG` wins; otherwise `warn`, or `debug` with `--verbose`.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

/// Opens the preference store and loads preferences from it.
fn open_preferences(path: Option<PathBuf>) -> Preferences {
    let store: Box<dyn PreferenceStore> = match path.or_else(default_prefs_path) {
        Some(path) => {
            debug!(path = %path.display(), "using preference file");
            Box::new(JsonFileStore::new(path))
        }
        None => {
            info!("no config directory; preferences last for this run only");
            Box::new(MemoryStore::new())
        }
    };
    Preferences::load(store, detect_system_theme)
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let Some(command) = cli.command else {
        // No command provided, show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut prefs = open_preferences(cli.prefs);
    let mut stdout = io::stdout();

    match command {
        Commands::Shell => {
            let mut app = App::new(prefs);
            let input = BufReader::new(tokio::io::stdin());
            let interrupted = tokio::select! {
                result = shell::run_shell(&mut app, input, &mut stdout) => {
                    result.context("interactive shell stopped")?;
                    false
                }
                _ = tokio::signal::ctrl_c() => true,
            };
            if interrupted {
                writeln!(stdout)?;
                exit_interrupted();
            }
        }
        Commands::Timer { mode } => {
            let mut countdown = CountdownEngine::new(prefs.session());
            countdown.switch_mode(mode.into());
            let interrupted = tokio::select! {
                result = shell::run_countdown(&mut countdown, &mut stdout) => {
                    result.context("countdown stopped")?;
                    false
                }
                _ = tokio::signal::ctrl_c() => true,
            };
            if interrupted {
                writeln!(stdout)?;
                writeln!(
                    stdout,
                    "Stopped at {}",
                    Display::format_countdown(countdown.remaining_seconds())
                )?;
            }
        }
        Commands::Stopwatch => {
            let mut stopwatch = StopwatchEngine::new();
            let input = BufReader::new(tokio::io::stdin());
            writeln!(stdout, "Press Enter to stop")?;
            let interrupted = tokio::select! {
                result = shell::run_stopwatch(&mut stopwatch, input, &mut stdout) => {
                    result.context("stopwatch stopped")?;
                    false
                }
                _ = tokio::signal::ctrl_c() => true,
            };
            if interrupted {
                stopwatch.stop();
                writeln!(stdout)?;
                writeln!(stdout, "{}", Display::stopwatch_line(&stopwatch))?;
                exit_interrupted();
            }
        }
        Commands::Convert { amount, from, to } => {
            let result = converter::convert(&amount, &from, &to)
                .context("conversion failed")?;
            writeln!(stdout, "{} {} = {} {}", amount.trim(), from, result, to)?;
        }
        Commands::Settings(SettingsCommand::Show { json }) => {
            if json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&prefs.snapshot())?)?;
            } else {
                for line in Display::settings_lines(&prefs.snapshot()) {
                    writeln!(stdout, "{}", line)?;
                }
            }
        }
        Commands::Settings(SettingsCommand::Set(args)) => {
            set_durations(&mut prefs, args);
            for line in Display::settings_lines(&prefs.snapshot()) {
                writeln!(stdout, "{}", line)?;
            }
        }
        Commands::Theme { action } => {
            let theme = match action {
                ThemeAction::Show => prefs.theme(),
                ThemeAction::Toggle => prefs.toggle_theme(),
                ThemeAction::Dark => {
                    prefs.set_theme(Theme::Dark);
                    Theme::Dark
                }
                ThemeAction::Light => {
                    prefs.set_theme(Theme::Light);
                    Theme::Light
                }
            };
            writeln!(stdout, "Theme: {}", Display::theme_label(theme))?;
        }
        Commands::Pro { action } => {
            let pro = match action {
                ProAction::Show => prefs.is_pro(),
                ProAction::Toggle => prefs.toggle_pro(),
                ProAction::On => {
                    prefs.set_pro(true);
                    true
                }
                ProAction::Off => {
                    prefs.set_pro(false);
                    false
                }
            };
            writeln!(stdout, "Plan: {}", if pro { "Pro" } else { "Free" })?;
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
        }
    }

    Ok(())
}

/// Exits after Ctrl-C while stdin is being read.
///
/// A pending stdin read holds a blocking thread that runtime shutdown would wait on.
fn exit_interrupted() -> ! {
    flush_or_warn(&mut io::stdout());
    std::process::exit(130);
}

/// Flushes `out`, logging a failure. Returns whether the flush succeeded.
fn flush_or_warn<W: Write>(out: &mut W) -> bool {
    match out.flush() {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "failed to flush output");
            false
        }
    }
}

/// Stores the given durations; missing ones keep their current value.
fn set_durations(prefs: &mut Preferences, args: SetArgs) {
    let mut editor = SettingsEditor::open(prefs.session());
    if let Some(work) = args.work.as_deref() {
        editor.set_work_input(work);
    }
    if let Some(brk) = args.break_minutes.as_deref() {
        editor.set_break_input(brk);
    }
    editor.commit(prefs);
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
