//! User preferences.
//!
//! `Settings` is a value: edits produce a new instance through the `with_*`
//! methods and the whole value is persisted at once.

use serde::{Deserialize, Serialize};

use crate::enums::{DisplayMode, Language, NavigationMode, PrayerLocation, PrayerType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: Language,
    pub navigation_mode: NavigationMode,
    pub prayer_type: PrayerType,
    pub display_mode: DisplayMode,
    /// Whether stepping back to the previous bead is allowed.
    pub allow_rewind: bool,
    /// Placement of the prayer text panel.
    pub prayer_location: PrayerLocation,
    /// Show the 1-based step number over the beads.
    pub show_bead_number: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::En,
            navigation_mode: NavigationMode::Tap,
            prayer_type: PrayerType::Rosary,
            display_mode: DisplayMode::System,
            allow_rewind: true,
            prayer_location: PrayerLocation::Bottom,
            show_bead_number: false,
        }
    }
}

impl Settings {
    /// Defaults with the language taken from the process locale.
    pub fn for_system() -> Self {
        Self::default().with_language(Language::system())
    }

    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    #[must_use]
    pub fn with_navigation_mode(mut self, mode: NavigationMode) -> Self {
        self.navigation_mode = mode;
        self
    }

    #[must_use]
    pub fn with_prayer_type(mut self, prayer_type: PrayerType) -> Self {
        self.prayer_type = prayer_type;
        self
    }

    #[must_use]
    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    #[must_use]
    pub fn with_allow_rewind(mut self, allow: bool) -> Self {
        self.allow_rewind = allow;
        self
    }

    #[must_use]
    pub fn with_prayer_location(mut self, location: PrayerLocation) -> Self {
        self.prayer_location = location;
        self
    }

    #[must_use]
    pub fn with_show_bead_number(mut self, show: bool) -> Self {
        self.show_bead_number = show;
        self
    }
}
