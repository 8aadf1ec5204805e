//! Draft editing of session durations.
//!
//! Inputs are taken as typed text. Nothing is stored until [`SettingsEditor::save`]
//! or [`SettingsEditor::commit`]; [`SettingsEditor::cancel`] drops the draft.

use tracing::debug;

use super::countdown::CountdownEngine;
use crate::prefs::Preferences;
use crate::types::{parse_minutes, SessionSettings};

/// Draft work/break durations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsEditor {
    work_minutes: i64,
    break_minutes: i64,
}

impl SettingsEditor {
    /// Opens a draft holding the current durations.
    pub fn open(current: SessionSettings) -> Self {
        Self {
            work_minutes: i64::from(current.work_minutes()),
            break_minutes: i64::from(current.break_minutes()),
        }
    }

    /// Replaces the work draft with the leading integer of `input` (0 if none).
    pub fn set_work_input(&mut self, input: &str) {
        self.work_minutes = parse_minutes(input);
    }

    /// Replaces the break draft with the leading integer of `input` (0 if none).
    pub fn set_break_input(&mut self, input: &str) {
        self.break_minutes = parse_minutes(input);
    }

    /// Raw draft values, before clamping.
    pub fn draft(&self) -> (i64, i64) {
        (self.work_minutes, self.break_minutes)
    }

    /// What saving now would store.
    pub fn clamped(&self) -> SessionSettings {
        SessionSettings::clamped(self.work_minutes, self.break_minutes)
    }

    /// Saves the clamped draft and resets `countdown` to the new durations.
    pub fn save(self, prefs: &mut Preferences, countdown: &mut CountdownEngine) -> SessionSettings {
        let settings = self.clamped();
        debug!(?settings, "saving timer settings");
        countdown.apply_settings(
            i64::from(settings.work_minutes()),
            i64::from(settings.break_minutes()),
            prefs,
        )
    }

    /// Saves the clamped draft without a running countdown to reset.
    pub fn commit(self, prefs: &mut Preferences) -> SessionSettings {
        let settings = self.clamped();
        prefs.save_session(settings);
        settings
    }

    /// Discards the draft.
    pub fn cancel(self) {
        debug!("timer settings edit cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{JsonFileStore, MockPreferenceStore, PreferenceStore, WORK_MINUTES_KEY};
    use crate::types::{Mode, Theme};

    fn create_prefs() -> Preferences {
        Preferences::load(Box::new(MockPreferenceStore::new()), || Theme::Light)
    }

    #[test]
    fn test_open_uses_current_values() {
        let editor = SettingsEditor::open(SessionSettings::clamped(40, 12));
        assert_eq!(editor.draft(), (40, 12));
    }

    #[test]
    fn test_inputs_are_parsed_leniently() {
        let mut editor = SettingsEditor::open(SessionSettings::default());

        editor.set_work_input("45 minutes");
        editor.set_break_input("abc");

        assert_eq!(editor.draft(), (45, 0));
        assert_eq!(editor.clamped(), SessionSettings::clamped(45, 1));
    }

    #[test]
    fn test_save_clamps_and_resets_countdown() {
        let mut prefs = create_prefs();
        let mut countdown = CountdownEngine::new(prefs.session());
        countdown.start();
        countdown.tick();

        let mut editor = SettingsEditor::open(prefs.session());
        editor.set_work_input("0");
        editor.set_break_input("200");
        let saved = editor.save(&mut prefs, &mut countdown);

        assert_eq!(saved, SessionSettings::clamped(1, 60));
        assert_eq!(prefs.session(), saved);
        assert_eq!(countdown.mode(), Mode::Work);
        assert_eq!(countdown.remaining_seconds(), 60);
        assert!(!countdown.is_running());
    }

    #[test]
    fn test_commit_stores_without_countdown() {
        let mut prefs = create_prefs();
        let mut editor = SettingsEditor::open(prefs.session());
        editor.set_work_input("130");

        let saved = editor.commit(&mut prefs);

        assert_eq!(saved.work_minutes(), 120);
        assert_eq!(prefs.session().work_minutes(), 120);
    }

    #[test]
    fn test_cancel_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let prefs = Preferences::load(Box::new(JsonFileStore::new(&path)), || Theme::Light);
        let countdown = CountdownEngine::new(prefs.session());

        let mut editor = SettingsEditor::open(prefs.session());
        editor.set_work_input("90");
        editor.cancel();

        assert_eq!(prefs.session(), SessionSettings::default());
        assert_eq!(countdown.remaining_seconds(), 1500);
        let store = JsonFileStore::new(&path);
        assert_eq!(store.get(WORK_MINUTES_KEY).unwrap(), None);
    }
}
