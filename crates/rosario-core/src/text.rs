//! Resolution of prayer references to display text.

use rosario_model::{Language, Prayer, PrayerType};

/// Source of localized strings.
///
/// Implementations backed by translation catalogues live with the front end.
pub trait PrayerTextResolver {
    fn prayer_title(&self, prayer: Prayer, language: Language) -> String;

    fn prayer_type_title(&self, prayer_type: PrayerType, language: Language) -> String;
}

/// Resolver that answers in English whatever the requested language.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishTitles;

impl PrayerTextResolver for EnglishTitles {
    fn prayer_title(&self, prayer: Prayer, _language: Language) -> String {
        prayer.title().to_string()
    }

    fn prayer_type_title(&self, prayer_type: PrayerType, _language: Language) -> String {
        prayer_type.display_name().to_string()
    }
}
