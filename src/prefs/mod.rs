//! Persisted user preferences.
//!
//! [`Preferences`] is built once at startup from a [`PreferenceStore`] and
//! passed by reference to whatever needs it. Every change is written through
//! an explicit save method. Store failures never reach the caller: reads fall
//! back to the built-in defaults (25/5 minutes, light theme) and writes are
//! logged and dropped.

pub mod error;
pub mod store;

use serde::Serialize;
use tracing::{debug, warn};

pub use error::StoreError;
pub use store::{default_prefs_path, JsonFileStore, MemoryStore, MockPreferenceStore, PreferenceStore};

use crate::types::{
    leading_integer, SessionSettings, Theme, DEFAULT_BREAK_MINUTES, DEFAULT_WORK_MINUTES,
};

/// Key of the dark/light flag.
pub const THEME_KEY: &str = "zen_theme";

/// Key of the upgrade flag.
pub const PRO_KEY: &str = "zen_pro";

/// Key of the work duration in minutes.
pub const WORK_MINUTES_KEY: &str = "zen_work_min";

/// Key of the break duration in minutes.
pub const BREAK_MINUTES_KEY: &str = "zen_break_min";

/// Reads the operating system color scheme.
///
/// Anything other than an explicit dark mode counts as light.
pub fn detect_system_theme() -> Theme {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => Theme::Dark,
        Ok(dark_light::Mode::Light | dark_light::Mode::Unspecified) | Err(_) => Theme::Light,
    }
}

/// Serializable view of the loaded preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreferenceSnapshot {
    pub theme: Theme,
    pub pro: bool,
    #[serde(rename = "workMinutes")]
    pub work_minutes: u32,
    #[serde(rename = "breakMinutes")]
    pub break_minutes: u32,
}

/// Loaded preferences plus the store they are saved to.
pub struct Preferences {
    theme: Theme,
    pro: bool,
    session: SessionSettings,
    store: Box<dyn PreferenceStore>,
}

impl std::fmt::Debug for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences")
            .field("theme", &self.theme)
            .field("pro", &self.pro)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl Preferences {
    /// Loads preferences from `store`.
    ///
    /// `system_theme` is consulted only when no theme has been stored.
    pub fn load(store: Box<dyn PreferenceStore>, system_theme: impl FnOnce() -> Theme) -> Self {
        let theme = match read(store.as_ref(), THEME_KEY) {
            Ok(Some(value)) if value == Theme::Dark.as_str() => Theme::Dark,
            Ok(Some(_)) => Theme::Light,
            Ok(None) => system_theme(),
            Err(()) => Theme::default(),
        };

        let pro = matches!(read(store.as_ref(), PRO_KEY), Ok(Some(value)) if value == "true");

        let work = read_minutes(store.as_ref(), WORK_MINUTES_KEY, DEFAULT_WORK_MINUTES);
        let brk = read_minutes(store.as_ref(), BREAK_MINUTES_KEY, DEFAULT_BREAK_MINUTES);
        let session = SessionSettings::clamped(work, brk);

        debug!(?theme, pro, ?session, "preferences loaded");

        Self {
            theme,
            pro,
            session,
            store,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_pro(&self) -> bool {
        self.pro
    }

    pub fn session(&self) -> SessionSettings {
        self.session
    }

    pub fn snapshot(&self) -> PreferenceSnapshot {
        PreferenceSnapshot {
            theme: self.theme,
            pro: self.pro,
            work_minutes: self.session.work_minutes(),
            break_minutes: self.session.break_minutes(),
        }
    }

    /// Sets and saves the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.write(THEME_KEY, theme.as_str());
    }

    /// Flips and saves the theme, returning the new one.
    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    /// Sets and saves the upgrade flag.
    pub fn set_pro(&mut self, pro: bool) {
        self.pro = pro;
        self.write(PRO_KEY, if pro { "true" } else { "false" });
    }

    /// Flips and saves the upgrade flag, returning the new value.
    pub fn toggle_pro(&mut self) -> bool {
        self.set_pro(!self.pro);
        self.pro
    }

    /// Saves session durations. Values are already within bounds.
    pub fn save_session(&mut self, session: SessionSettings) {
        self.session = session;
        self.write(WORK_MINUTES_KEY, &session.work_minutes().to_string());
        self.write(BREAK_MINUTES_KEY, &session.break_minutes().to_string());
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            warn!(key, error = %e, "failed to save preference");
        }
    }
}

fn read(store: &dyn PreferenceStore, key: &str) -> Result<Option<String>, ()> {
    store.get(key).map_err(|e| {
        warn!(key, error = %e, "failed to read preference, using default");
    })
}

fn read_minutes(store: &dyn PreferenceStore, key: &str, default: u32) -> i64 {
    match read(store, key) {
        Ok(Some(value)) => leading_integer(&value).unwrap_or(default as i64),
        Ok(None) | Err(()) => default as i64,
    }
}

// ============================================================================
// Tests
// ============================================================================
