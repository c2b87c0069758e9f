//! # Settings Store
//!
//! The app settings blob: one JSON value under one key, with defaults for
//! first launch and recovery for corrupt blobs.
//!
//! ## Thread Safety
//! Settings are read once at startup and written on change from the settings
//! screen; the host serializes access, so no locking lives here.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::StoreResult;
use crate::kv::KeyValueStore;

/// Key the settings blob is stored under.
const SETTINGS_KEY: &str = "scanforge.settings";

// =============================================================================
// Settings
// =============================================================================

/// User-facing app settings.
///
/// ## Fields
/// Every field has a first-launch default; unknown future fields in a stored
/// blob deserialize with defaults too, so downgrades do not wipe settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Play a sound when a scan lands.
    pub beep_on_scan: bool,

    /// Vibrate when a scan lands.
    pub vibrate_on_scan: bool,

    /// Copy scanned values to the clipboard automatically.
    pub auto_copy: bool,

    /// Record scans and generates into history.
    pub save_history: bool,

    /// Light/dark/system appearance.
    pub theme: Theme,

    /// BCP 47 language tag for the UI (lookup happens host-side).
    pub language: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            beep_on_scan: true,
            vibrate_on_scan: true,
            auto_copy: false,
            save_history: true,
            theme: Theme::System,
            language: "en".to_string(),
        }
    }
}

/// App appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow the OS setting.
    #[default]
    System,
    Light,
    Dark,
}

// =============================================================================
// Settings Store
// =============================================================================

/// Repository for the settings blob.
///
/// ## Usage
/// ```rust
/// use scanforge_store::{MemoryStore, Settings, SettingsStore};
///
/// let mut settings = SettingsStore::new(MemoryStore::new());
///
/// // First launch: defaults
/// assert_eq!(settings.load().unwrap(), Settings::default());
///
/// let mut s = settings.load().unwrap();
/// s.auto_copy = true;
/// settings.save(&s).unwrap();
/// assert!(settings.load().unwrap().auto_copy);
/// ```
#[derive(Debug)]
pub struct SettingsStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SettingsStore<S> {
    /// Creates a settings store over an injected backend.
    pub fn new(store: S) -> Self {
        SettingsStore { store }
    }

    /// Loads settings, falling back to defaults when the blob is absent or
    /// unreadable. Corruption is logged, never fatal.
    pub fn load(&self) -> StoreResult<Settings> {
        let Some(raw) = self.store.get(SETTINGS_KEY)? else {
            return Ok(Settings::default());
        };

        match serde_json::from_str(&raw) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                warn!(error = %e, "Settings blob is corrupt, using defaults");
                Ok(Settings::default())
            }
        }
    }

    /// Persists the whole settings blob.
    pub fn save(&mut self, settings: &Settings) -> StoreResult<()> {
        debug!("Saving settings");
        let raw = serde_json::to_string(settings)?;
        self.store.set(SETTINGS_KEY, &raw)
    }

    /// Hands the backend back.
    pub fn into_inner(self) -> S {
        self.store
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
