//! Settings persistence for the Rosario prayer companion.
//!
//! [`SettingsStore`] maps `Settings` onto any [`PreferenceStore`] backend,
//! one key per field. [`TomlPreferences`] keeps the map in a TOML file,
//! [`MemoryPreferences`] in memory.

pub mod error;
pub mod file;
pub mod preferences;
pub mod settings_store;

pub use error::{Result, StoreError};
pub use file::{TomlPreferences, default_settings_path};
pub use preferences::{MemoryPreferences, PreferenceStore, PreferenceValue, Preferences};
pub use settings_store::{SettingsStore, settings_from_preferences, settings_to_preferences};
