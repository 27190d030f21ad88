//! Tests for rosario-model types.

use std::collections::HashSet;

use rosario_model::{
    Bead, BeadType, DisplayMode, Language, NavigationMode, Prayer, PrayerLocation, PrayerType,
    Settings,
};

// --- Bead tests ---

#[test]
fn bead_keeps_its_properties() {
    let bead = Bead::with_prayer(5, BeadType::BeadSmall, Prayer::HailMary);
    assert_eq!(bead.index, 5);
    assert_eq!(bead.bead_type, BeadType::BeadSmall);
    assert_eq!(bead.prayer, Some(Prayer::HailMary));
    assert!(bead.has_prayer());
}

#[test]
fn bead_without_prayer() {
    let bead = Bead::new(3, BeadType::BeadLarge);
    assert_eq!(bead.prayer, None);
    assert!(!bead.has_prayer());
}

#[test]
fn bead_value_equality() {
    let a = Bead::with_prayer(1, BeadType::Cross, Prayer::InTheName);
    assert_eq!(a, Bead::with_prayer(1, BeadType::Cross, Prayer::InTheName));
    assert_ne!(a, Bead::with_prayer(2, BeadType::Cross, Prayer::InTheName));
    assert_ne!(a, Bead::with_prayer(1, BeadType::BeadSmall, Prayer::InTheName));
    assert_ne!(a, Bead::with_prayer(1, BeadType::Cross, Prayer::OurFather));

    let set: HashSet<Bead> = [a, a, Bead::new(1, BeadType::Cross)].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn bead_serializes_type_field() {
    let bead = Bead::with_prayer(0, BeadType::Cross, Prayer::InTheName);
    let value = serde_json::to_value(bead).expect("serialize bead");
    assert_eq!(value["type"], "CROSS");
    assert_eq!(value["prayer"], "in_the_name");
    assert_eq!(value["index"], 0);
}

// --- Settings tests ---

#[test]
fn default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.language, Language::En);
    assert_eq!(settings.navigation_mode, NavigationMode::Tap);
    assert_eq!(settings.prayer_type, PrayerType::Rosary);
    assert_eq!(settings.display_mode, DisplayMode::System);
    assert!(settings.allow_rewind);
    assert_eq!(settings.prayer_location, PrayerLocation::Bottom);
    assert!(!settings.show_bead_number);
}

#[test]
fn builder_replaces_single_fields() {
    let original = Settings::default();
    let modified = original
        .with_language(Language::Pl)
        .with_navigation_mode(NavigationMode::Button)
        .with_prayer_type(PrayerType::DivineMercy)
        .with_display_mode(DisplayMode::Dark)
        .with_allow_rewind(false)
        .with_prayer_location(PrayerLocation::Top)
        .with_show_bead_number(true);

    assert_eq!(modified.language, Language::Pl);
    assert_eq!(modified.navigation_mode, NavigationMode::Button);
    assert_eq!(modified.prayer_type, PrayerType::DivineMercy);
    assert_eq!(modified.display_mode, DisplayMode::Dark);
    assert!(!modified.allow_rewind);
    assert_eq!(modified.prayer_location, PrayerLocation::Top);
    assert!(modified.show_bead_number);
    // the original value is untouched
    assert_eq!(original, Settings::default());
}

#[test]
fn system_settings_use_a_supported_language() {
    let settings = Settings::for_system();
    assert!(Language::all().contains(&settings.language));
    assert_eq!(settings.prayer_type, PrayerType::Rosary);
}

#[test]
fn settings_deserialize_missing_fields_as_defaults() {
    let settings: Settings =
        serde_json::from_str(r#"{"prayer_type":"DIVINE_MERCY"}"#).expect("deserialize");
    assert_eq!(settings.prayer_type, PrayerType::DivineMercy);
    assert!(settings.allow_rewind);
    assert_eq!(settings.navigation_mode, NavigationMode::Tap);
}

#[test]
fn default_settings_serialize_by_storage_name() {
    insta::assert_json_snapshot!(Settings::default(), @r#"
{
  "language": "EN",
  "navigation_mode": "TAP",
  "prayer_type": "ROSARY",
  "display_mode": "SYSTEM",
  "allow_rewind": true,
  "prayer_location": "BOTTOM",
  "show_bead_number": false
}
"#);
}
