//! Integration tests across preferences, engines and the shell.
//!
//! These tests exercise complete flows through the public library API:
//! - Durations saved from the editor survive a reload from the preference file
//! - Theme and plan flags round-trip through the file store
//! - Broken preference files fall back to defaults
//! - Shell scripts driven on paused time

use std::fs;
use std::path::{Path, PathBuf};

use tokio::io::{duplex, AsyncWriteExt, BufReader};
use tokio::time::{sleep, Duration};

use zentools::prefs::{JsonFileStore, Preferences, BREAK_MINUTES_KEY, WORK_MINUTES_KEY};
use zentools::shell::{run_shell, App};
use zentools::timer::{CountdownEngine, SettingsEditor};
use zentools::types::{Mode, SessionSettings, Tab, Theme};

// ============================================================================
// Test Helpers
// ============================================================================

fn prefs_path(dir: &Path) -> PathBuf {
    dir.join("zentools").join("preferences.json")
}

fn load(path: &Path, system: Theme) -> Preferences {
    Preferences::load(Box::new(JsonFileStore::new(path)), move || system)
}

// ============================================================================
// Preference Persistence Tests
// ============================================================================

#[test]
fn test_saved_durations_survive_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = prefs_path(dir.path());

    let mut prefs = load(&path, Theme::Light);
    let mut countdown = CountdownEngine::new(prefs.session());
    let mut editor = SettingsEditor::open(countdown.settings());
    editor.set_work_input("45");
    editor.set_break_input("15");
    editor.save(&mut prefs, &mut countdown);

    let reloaded = load(&path, Theme::Light);
    assert_eq!(reloaded.session(), SessionSettings::clamped(45, 15));

    let fresh = CountdownEngine::new(reloaded.session());
    assert_eq!(fresh.remaining_seconds(), 45 * 60);
}

#[test]
fn test_out_of_range_durations_are_stored_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = prefs_path(dir.path());

    let mut prefs = load(&path, Theme::Light);
    let mut countdown = CountdownEngine::new(prefs.session());
    countdown.apply_settings(0, 200, &mut prefs);

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw[WORK_MINUTES_KEY], "1");
    assert_eq!(raw[BREAK_MINUTES_KEY], "60");
}

#[test]
fn test_hand_edited_durations_are_clamped_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = prefs_path(dir.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, r#"{"zen_work_min":"999","zen_break_min":"-4"}"#).unwrap();

    let prefs = load(&path, Theme::Light);

    assert_eq!(prefs.session(), SessionSettings::clamped(120, 1));
}

#[test]
fn test_theme_and_plan_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = prefs_path(dir.path());

    let mut prefs = load(&path, Theme::Light);
    assert_eq!(prefs.toggle_theme(), Theme::Dark);
    assert!(prefs.toggle_pro());

    // The system theme no longer matters once a theme is stored.
    let reloaded = load(&path, Theme::Light);
    assert_eq!(reloaded.theme(), Theme::Dark);
    assert!(reloaded.is_pro());
}

#[test]
fn test_missing_file_uses_system_theme_and_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = prefs_path(dir.path());

    let prefs = load(&path, Theme::Dark);

    assert_eq!(prefs.theme(), Theme::Dark);
    assert!(!prefs.is_pro());
    assert_eq!(prefs.session(), SessionSettings::default());
    assert!(!path.exists());
}

#[test]
fn test_corrupt_file_falls_back_and_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = prefs_path(dir.path());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ not json").unwrap();

    let mut prefs = load(&path, Theme::Dark);
    assert_eq!(prefs.theme(), Theme::Light);
    assert_eq!(prefs.session(), SessionSettings::default());

    prefs.set_pro(true);

    let reloaded = load(&path, Theme::Light);
    assert!(reloaded.is_pro());
}

// ============================================================================
// Shell Flow Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_shell_settings_apply_on_next_timer_mount() {
    let dir = tempfile::tempdir().unwrap();
    let path = prefs_path(dir.path());
    let mut app = App::new(load(&path, Theme::Light));
    let (mut client, server) = duplex(1024);
    let mut out = Vec::new();

    let script = async move {
        client
            .write_all(b"settings\npro\ntimers 2 1\ntimer\nbreak\nstart\n")
            .await
            .unwrap();
        sleep(Duration::from_millis(61_500)).await;
        drop(client);
    };
    let (_, result) = tokio::join!(script, run_shell(&mut app, BufReader::new(server), &mut out));
    result.unwrap();

    let countdown = app.timer().unwrap().countdown();
    assert_eq!(countdown.mode(), Mode::Break);
    assert_eq!(countdown.remaining_seconds(), 0);
    assert!(!countdown.is_running());

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Break session complete"));

    let reloaded = load(&path, Theme::Light);
    assert_eq!(reloaded.session(), SessionSettings::clamped(2, 1));
}

#[tokio::test(start_paused = true)]
async fn test_shell_budget_and_converter_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::new(load(&prefs_path(dir.path()), Theme::Light));
    let input: &[u8] = b"budget\nadd rice 3.20\nadd beans 1.80\nlist\nconverter\ncategory temperature\namount 100\nquit\n";
    let mut out = Vec::new();

    run_shell(&mut app, BufReader::new(input), &mut out).await.unwrap();

    assert_eq!(app.tab(), Tab::Converter);
    assert_eq!(app.budget().len(), 2);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Total: 5.00 (2 items in list)"));
    assert!(text.contains("[temperature] 100 C = 212.00 F"));
}
