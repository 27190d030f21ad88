use std::path::Path;

use rosario_cli::render::{plain_listing, settings_table};
use rosario_core::generate_beads;
use rosario_model::{PrayerType, Settings};

#[test]
fn jesus_prayer_listing_starts_with_silent_beads() {
    let beads = generate_beads(PrayerType::JesusPrayer);
    let listing = plain_listing(&beads[..7]);
    insta::assert_snapshot!(listing, @r"
1   0   CROSS       -
2   1   TAIL_LARGE  -
3   2   TAIL_SMALL  -
4   3   TAIL_SMALL  -
5   4   TAIL_SMALL  -
6   5   BEAD_LARGE  -
7   6   BEAD_SMALL  Lord Jesus Christ, Son of God
");
}

#[test]
fn plain_listing_has_a_line_per_step() {
    for prayer_type in PrayerType::all() {
        let beads = generate_beads(*prayer_type);
        assert_eq!(plain_listing(&beads).lines().count(), beads.len());
    }
}

#[test]
fn settings_table_shows_values_and_file() {
    let settings = Settings::default().with_prayer_type(PrayerType::DivineMercy);
    let rendered = settings_table(&settings, Some(Path::new("/tmp/rosario/settings.toml"))).to_string();
    assert!(rendered.contains("Chaplet of Divine Mercy"));
    assert!(rendered.contains("Allow rewind"));
    assert!(rendered.contains("settings.toml"));
}
