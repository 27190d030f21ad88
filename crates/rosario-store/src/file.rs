//! TOML-file preference backend.
//!
//! Preferences are stored as a flat TOML table in the platform-specific
//! configuration folder:
//! - macOS: ~/Library/Application Support/org.rosario.Rosario/
//! - Windows: %APPDATA%/rosario/Rosario/config/
//! - Linux: ~/.config/rosario/

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{Result, StoreError};
use crate::preferences::{PreferenceStore, PreferenceValue, Preferences};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "rosario";
const APP_NAME: &str = "Rosario";
const CONFIG_FILENAME: &str = "settings.toml";

/// Get the default path of the preference file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

#[derive(Debug, Clone)]
pub struct TomlPreferences {
    path: PathBuf,
}

impl TomlPreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store located in the platform configuration directory.
    pub fn at_default_location() -> Result<Self> {
        default_settings_path()
            .map(Self::new)
            .ok_or(StoreError::NoConfigDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for TomlPreferences {
    fn load(&self) -> Result<Preferences> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no preference file yet");
                return Ok(Preferences::new());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let table: toml::Table = toml::from_str(&content)?;
        let mut preferences = Preferences::new();
        for (key, value) in table {
            match value {
                toml::Value::String(text) => {
                    preferences.insert(key, PreferenceValue::Text(text));
                }
                toml::Value::Boolean(flag) => {
                    preferences.insert(key, PreferenceValue::Bool(flag));
                }
                other => {
                    // Dropped here so the typed reader falls back for this key only.
                    tracing::warn!(
                        key = %key,
                        found = other.type_str(),
                        "ignoring preference with unsupported type"
                    );
                }
            }
        }
        Ok(preferences)
    }

    fn save(&mut self, preferences: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let content = toml::to_string_pretty(preferences)?;

        // Write then rename so a crash never leaves a half-written file.
        let staging = self.path.with_extension("toml.tmp");
        fs::write(&staging, content).map_err(|e| StoreError::io(&staging, e))?;
        fs::rename(&staging, &self.path).map_err(|e| StoreError::io(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), keys = preferences.len(), "saved preferences");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_ends_with_file_name() {
        if let Some(path) = default_settings_path() {
            assert!(path.ends_with(CONFIG_FILENAME));
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlPreferences::new(dir.path().join("absent.toml"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        let mut store = TomlPreferences::new(&path);

        let mut prefs = Preferences::new();
        prefs.insert("prayer_type".to_string(), "ROSARY".into());
        prefs.insert("allow_rewind".to_string(), true.into());
        store.save(&prefs).unwrap();

        assert!(path.exists());
        assert_eq!(store.load().unwrap(), prefs);
    }

    #[test]
    fn unsupported_values_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "language = \"FR\"\nallow_rewind = 3\n").unwrap();

        let prefs = TomlPreferences::new(&path).load().unwrap();
        assert_eq!(prefs.get("language"), Some(&PreferenceValue::from("FR")));
        assert!(!prefs.contains_key("allow_rewind"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "language = = \n").unwrap();

        let err = TomlPreferences::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }
}
