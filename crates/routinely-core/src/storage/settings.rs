//! Theme settings persisted under the `@theme_settings` key.
//!
//! A primary color (HSL triple, usually from the preset palette) and a
//! light/dark/system mode.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{KvStore, THEME_SETTINGS_KEY};
use crate::error::StorageError;

/// Named color presets, as `"H S% L%"` strings.
pub const COLOR_PRESETS: &[(&str, &str)] = &[
    ("blue", "214 100% 59%"),
    ("purple", "262 83% 58%"),
    ("green", "142 76% 36%"),
    ("orange", "25 95% 53%"),
    ("pink", "330 81% 60%"),
    ("red", "0 84% 60%"),
];

/// Look up a preset color by name.
pub fn preset_color(name: &str) -> Option<&'static str> {
    COLOR_PRESETS
        .iter()
        .find(|(preset, _)| preset.eq_ignore_ascii_case(name))
        .map(|(_, hsl)| *hsl)
}

/// Light/dark preference, with "system" deferring to the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    System,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::System
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme mode '{other}'")),
        }
    }
}

/// Persisted theme preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default)]
    pub theme: ThemeMode,
}

fn default_primary_color() -> String {
    "214 100% 59%".to_string() // blue preset
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            primary_color: default_primary_color(),
            theme: ThemeMode::System,
        }
    }
}

/// Theme settings persistence over a [`KvStore`].
pub struct SettingsStore<S: KvStore> {
    kv: S,
}

impl<S: KvStore> SettingsStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Load settings, falling back to defaults when the key is absent or
    /// the payload cannot be read or parsed.
    pub fn load(&self) -> ThemeSettings {
        let payload = match self.kv.get(THEME_SETTINGS_KEY) {
            Ok(Some(payload)) => payload,
            Ok(None) => return ThemeSettings::default(),
            Err(e) => {
                warn!(key = THEME_SETTINGS_KEY, error = %e, "failed to read theme settings, using defaults");
                return ThemeSettings::default();
            }
        };
        match serde_json::from_str(&payload) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(key = THEME_SETTINGS_KEY, error = %e, "corrupt theme settings, using defaults");
                ThemeSettings::default()
            }
        }
    }

    /// Persist settings.
    ///
    /// # Errors
    /// Returns an error if serialization or the underlying write fails.
    pub fn save(&self, settings: &ThemeSettings) -> Result<(), StorageError> {
        let payload =
            serde_json::to_string(settings).map_err(|e| StorageError::CorruptPayload {
                key: THEME_SETTINGS_KEY.to_string(),
                message: e.to_string(),
            })?;
        self.kv.set(THEME_SETTINGS_KEY, &payload)
    }
}
