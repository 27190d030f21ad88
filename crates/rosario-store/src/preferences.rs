//! Key-value preference store abstraction.
//!
//! A store holds a flat map of string keys to string or boolean values, the
//! same shape as a mobile preference data store. Backends load and save the
//! whole map; callers edit a copy and write it back.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferenceValue {
    Bool(bool),
    Text(String),
}

impl PreferenceValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Bool(_) => None,
        }
    }

    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Text(_) => "string",
        }
    }
}

impl From<bool> for PreferenceValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for PreferenceValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PreferenceValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Ordered so that serialized files are stable.
pub type Preferences = BTreeMap<String, PreferenceValue>;

/// Backend that persists a preference map.
pub trait PreferenceStore {
    /// Load the full map. A store that has never been written returns an
    /// empty map, not an error.
    fn load(&self) -> Result<Preferences>;

    /// Replace the stored map.
    fn save(&mut self, preferences: &Preferences) -> Result<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn load(&self) -> Result<Preferences> {
        (**self).load()
    }

    fn save(&mut self, preferences: &Preferences) -> Result<()> {
        (**self).save(preferences)
    }
}

/// In-memory store, used for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: Preferences,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing values.
    pub fn with_values(values: Preferences) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &Preferences {
        &self.values
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self) -> Result<Preferences> {
        Ok(self.values.clone())
    }

    fn save(&mut self, preferences: &Preferences) -> Result<()> {
        self.values = preferences.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_replaces_values() {
        let mut store = MemoryPreferences::new();
        assert!(store.load().unwrap().is_empty());

        let mut prefs = Preferences::new();
        prefs.insert("language".to_string(), "PL".into());
        prefs.insert("allow_rewind".to_string(), false.into());
        store.save(&prefs).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.get("language"), Some(&PreferenceValue::from("PL")));
        assert_eq!(loaded.get("allow_rewind").and_then(PreferenceValue::as_bool), Some(false));
    }

    #[test]
    fn value_accessors_check_type() {
        let text = PreferenceValue::from("TAP");
        assert_eq!(text.as_text(), Some("TAP"));
        assert_eq!(text.as_bool(), None);
        assert_eq!(PreferenceValue::Bool(true).as_text(), None);
        assert_eq!(PreferenceValue::Bool(true).type_name(), "bool");
    }
}
