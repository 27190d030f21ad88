//! Properties shared by every bead sequence.

use rosario_core::generate_beads;
use rosario_model::{BeadType, Prayer, PrayerType};

#[test]
fn every_sequence_is_non_empty_and_starts_with_a_cross() {
    for prayer_type in PrayerType::all() {
        let beads = generate_beads(*prayer_type);
        assert!(!beads.is_empty(), "{prayer_type} has no beads");
        assert_eq!(beads[0].bead_type, BeadType::Cross, "{prayer_type}");
    }
}

#[test]
fn generation_is_deterministic() {
    for prayer_type in PrayerType::all() {
        assert_eq!(generate_beads(*prayer_type), generate_beads(*prayer_type));
    }
}

#[test]
fn rosary_has_fifty_hail_marys() {
    let beads = generate_beads(PrayerType::Rosary);
    let hail_marys = beads
        .iter()
        .filter(|bead| bead.prayer == Some(Prayer::HailMary))
        .count();
    assert_eq!(hail_marys, 50);
}

#[test]
fn every_sequence_uses_large_and_small_beads() {
    for prayer_type in PrayerType::all() {
        let beads = generate_beads(*prayer_type);
        assert!(beads.iter().any(|bead| bead.bead_type == BeadType::BeadLarge));
        assert!(beads.iter().any(|bead| bead.bead_type == BeadType::BeadSmall));
        assert!(beads.iter().any(|bead| bead.bead_type.is_tail()));
    }
}

#[test]
fn only_the_jesus_prayer_has_many_silent_beads() {
    let silent = |prayer_type| {
        generate_beads(prayer_type)
            .iter()
            .filter(|bead| !bead.has_prayer())
            .count()
    };
    assert_eq!(silent(PrayerType::Rosary), 0);
    assert_eq!(silent(PrayerType::DivineMercy), 1);
    assert_eq!(silent(PrayerType::JesusPrayer), 10);
}
