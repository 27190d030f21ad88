//! Typed access to `Settings` on top of a preference store.
//!
//! Each settings field lives under its own key. Reads never fail: a missing,
//! mistyped or unknown value falls back to that field's default, and a
//! backend failure falls back to `Settings::default()`.

use std::str::FromStr;

use rosario_model::Settings;

use crate::error::Result;
use crate::preferences::{PreferenceStore, PreferenceValue, Preferences};

pub const LANGUAGE: &str = "language";
pub const NAVIGATION_MODE: &str = "navigation_mode";
pub const PRAYER_TYPE: &str = "prayer_type";
pub const DISPLAY_MODE: &str = "display_mode";
pub const ALLOW_REWIND: &str = "allow_rewind";
pub const PRAYER_LOCATION: &str = "prayer_location";
pub const SHOW_BEAD_NUMBER: &str = "show_bead_number";

/// All keys written for a `Settings` value.
pub const SETTINGS_KEYS: [&str; 7] = [
    LANGUAGE,
    NAVIGATION_MODE,
    PRAYER_TYPE,
    DISPLAY_MODE,
    ALLOW_REWIND,
    PRAYER_LOCATION,
    SHOW_BEAD_NUMBER,
];

#[derive(Debug, Clone, Default)]
pub struct SettingsStore<P> {
    backend: P,
}

impl<P: PreferenceStore> SettingsStore<P> {
    pub fn new(backend: P) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &P {
        &self.backend
    }

    /// Read settings, falling back to defaults on any failure.
    pub fn read(&self) -> Settings {
        match self.backend.load() {
            Ok(preferences) => {
                let settings = settings_from_preferences(&preferences);
                tracing::debug!(?settings, "loaded settings");
                settings
            }
            Err(error) => {
                tracing::warn!(error = ?error, "failed to read settings, using defaults");
                Settings::default()
            }
        }
    }

    /// Persist every settings field.
    ///
    /// Keys the store holds that are not settings fields are kept.
    pub fn write(&mut self, settings: &Settings) -> Result<()> {
        let mut preferences = self.backend.load().unwrap_or_else(|error| {
            tracing::warn!(error = ?error, "could not read existing preferences before write");
            Preferences::new()
        });
        preferences.extend(settings_to_preferences(settings));

        if let Err(error) = self.backend.save(&preferences) {
            tracing::error!(error = ?error, "failed to write settings");
            return Err(error);
        }
        tracing::info!(?settings, "saved settings");
        Ok(())
    }
}

/// Encode settings as one preference per field.
pub fn settings_to_preferences(settings: &Settings) -> Preferences {
    let mut preferences = Preferences::new();
    preferences.insert(LANGUAGE.to_string(), settings.language.as_str().into());
    preferences.insert(
        NAVIGATION_MODE.to_string(),
        settings.navigation_mode.as_str().into(),
    );
    preferences.insert(PRAYER_TYPE.to_string(), settings.prayer_type.as_str().into());
    preferences.insert(DISPLAY_MODE.to_string(), settings.display_mode.as_str().into());
    preferences.insert(ALLOW_REWIND.to_string(), settings.allow_rewind.into());
    preferences.insert(
        PRAYER_LOCATION.to_string(),
        settings.prayer_location.as_str().into(),
    );
    preferences.insert(SHOW_BEAD_NUMBER.to_string(), settings.show_bead_number.into());
    preferences
}

/// Decode settings, applying the per-field fallback.
pub fn settings_from_preferences(preferences: &Preferences) -> Settings {
    let defaults = Settings::default();
    Settings {
        language: enum_field(preferences, LANGUAGE, defaults.language),
        navigation_mode: enum_field(preferences, NAVIGATION_MODE, defaults.navigation_mode),
        prayer_type: enum_field(preferences, PRAYER_TYPE, defaults.prayer_type),
        display_mode: enum_field(preferences, DISPLAY_MODE, defaults.display_mode),
        allow_rewind: bool_field(preferences, ALLOW_REWIND, defaults.allow_rewind),
        prayer_location: enum_field(preferences, PRAYER_LOCATION, defaults.prayer_location),
        show_bead_number: bool_field(preferences, SHOW_BEAD_NUMBER, defaults.show_bead_number),
    }
}

fn enum_field<T: FromStr + Copy>(preferences: &Preferences, key: &str, default: T) -> T {
    let Some(value) = preferences.get(key) else {
        return default;
    };
    let Some(text) = value.as_text() else {
        tracing::warn!(key, found = value.type_name(), "expected a string, using default");
        return default;
    };
    text.parse().unwrap_or_else(|_| {
        tracing::warn!(key, value = text, "unknown stored value, using default");
        default
    })
}

fn bool_field(preferences: &Preferences, key: &str, default: bool) -> bool {
    match preferences.get(key) {
        None => default,
        Some(PreferenceValue::Bool(flag)) => *flag,
        // Older stores may hold booleans as text.
        Some(PreferenceValue::Text(text)) => text.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %text, "expected a boolean, using default");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosario_model::{Language, NavigationMode, PrayerType};

    fn prefs(entries: &[(&str, PreferenceValue)]) -> Preferences {
        entries
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn empty_preferences_decode_to_defaults() {
        assert_eq!(settings_from_preferences(&Preferences::new()), Settings::default());
    }

    #[test]
    fn encoding_covers_every_key() {
        let encoded = settings_to_preferences(&Settings::default());
        for key in SETTINGS_KEYS {
            assert!(encoded.contains_key(key), "missing {key}");
        }
        assert_eq!(encoded.len(), SETTINGS_KEYS.len());
    }

    #[test]
    fn fallback_is_per_field() {
        let decoded = settings_from_preferences(&prefs(&[
            (LANGUAGE, "KLINGON".into()),
            (NAVIGATION_MODE, "BOTH".into()),
            (PRAYER_TYPE, true.into()),
            (ALLOW_REWIND, "maybe".into()),
            (SHOW_BEAD_NUMBER, "true".into()),
        ]));
        assert_eq!(decoded.language, Language::En);
        assert_eq!(decoded.navigation_mode, NavigationMode::Both);
        assert_eq!(decoded.prayer_type, PrayerType::Rosary);
        assert!(decoded.allow_rewind);
        assert!(decoded.show_bead_number);
    }
}
