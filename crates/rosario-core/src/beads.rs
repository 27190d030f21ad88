//! Bead sequence generation.
//!
//! Each prayer type maps to a fixed list of steps. A step names the bead it is
//! prayed on and, if anything is prayed there, which prayer. The lists are
//! rebuilt on demand; nothing here is stateful.

use rosario_model::{Bead, BeadType, Prayer, PrayerType};

/// Decades on every supported string.
pub const DECADES: usize = 5;
/// Small beads in one decade.
pub const BEADS_PER_DECADE: usize = 10;
/// Physical index of the first bead of the loop, right after the tail.
pub const LOOP_START: usize = 5;

/// Build the step sequence for a prayer type.
pub fn generate_beads(prayer_type: PrayerType) -> Vec<Bead> {
    let beads = match prayer_type {
        PrayerType::Rosary => rosary_beads(),
        PrayerType::DivineMercy => divine_mercy_beads(),
        PrayerType::JesusPrayer => jesus_prayer_beads(),
    };
    tracing::trace!(%prayer_type, steps = beads.len(), "generated bead sequence");
    beads
}

/// Number of distinct physical beads a sequence is drawn on.
pub fn physical_bead_count(beads: &[Bead]) -> usize {
    beads.iter().map(|bead| bead.index + 1).max().unwrap_or(0)
}

fn rosary_beads() -> Vec<Bead> {
    use BeadType::{BeadLarge, BeadSmall, Cross, TailLarge, TailSmall};

    let mut beads = vec![
        Bead::with_prayer(0, Cross, Prayer::InTheName),
        Bead::with_prayer(0, Cross, Prayer::ApostlesCreed),
        Bead::with_prayer(1, TailLarge, Prayer::OurFather),
        Bead::with_prayer(2, TailSmall, Prayer::Faith),
        Bead::with_prayer(3, TailSmall, Prayer::Hope),
        Bead::with_prayer(4, TailSmall, Prayer::Love),
        Bead::with_prayer(LOOP_START, BeadLarge, Prayer::GloryBe),
        Bead::with_prayer(LOOP_START, BeadLarge, Prayer::OMyJesus),
    ];

    let mut index = LOOP_START;
    for decade in 0..DECADES {
        beads.push(Bead::with_prayer(index, BeadLarge, Prayer::OurFather));
        index += 1;
        for _ in 0..BEADS_PER_DECADE {
            beads.push(Bead::with_prayer(index, BeadSmall, Prayer::HailMary));
            index += 1;
        }
        // The large bead that opens the next decade also closes this one.
        if decade < DECADES - 1 {
            beads.push(Bead::with_prayer(index, BeadLarge, Prayer::GloryBe));
            beads.push(Bead::with_prayer(index, BeadLarge, Prayer::OMyJesus));
        }
    }

    beads.extend([
        Bead::with_prayer(LOOP_START, BeadLarge, Prayer::GloryBe),
        Bead::with_prayer(LOOP_START, BeadLarge, Prayer::OMyJesus),
        Bead::with_prayer(LOOP_START, BeadLarge, Prayer::OurFather),
        Bead::with_prayer(0, Cross, Prayer::InTheName),
    ]);
    beads
}

fn divine_mercy_beads() -> Vec<Bead> {
    use BeadType::{BeadLarge, BeadSmall, Cross, TailLarge, TailSmall};

    let mut beads = vec![
        Bead::with_prayer(0, Cross, Prayer::InTheName),
        Bead::new(1, TailLarge),
        Bead::with_prayer(2, TailSmall, Prayer::OurFather),
        Bead::with_prayer(3, TailSmall, Prayer::HailMary),
        Bead::with_prayer(4, TailSmall, Prayer::ApostlesCreed),
    ];

    let mut index = LOOP_START;
    for _ in 0..DECADES {
        beads.push(Bead::with_prayer(index, BeadLarge, Prayer::EternalFather));
        index += 1;
        for _ in 0..BEADS_PER_DECADE {
            beads.push(Bead::with_prayer(index, BeadSmall, Prayer::ForTheSake));
            index += 1;
        }
    }

    // Closing prayers walk back up the tail to the cross.
    beads.extend([
        Bead::with_prayer(4, TailSmall, Prayer::HolyGod),
        Bead::with_prayer(3, TailSmall, Prayer::HolyGod),
        Bead::with_prayer(2, TailSmall, Prayer::HolyGod),
        Bead::with_prayer(1, TailLarge, Prayer::OBloodAndWater),
        Bead::with_prayer(4, TailSmall, Prayer::JesusITrust),
        Bead::with_prayer(3, TailSmall, Prayer::JesusITrust),
        Bead::with_prayer(2, TailSmall, Prayer::JesusITrust),
        Bead::with_prayer(0, Cross, Prayer::InTheName),
    ]);
    beads
}

fn jesus_prayer_beads() -> Vec<Bead> {
    use BeadType::{BeadLarge, BeadSmall, Cross, TailLarge, TailSmall};

    let mut beads = vec![
        Bead::new(0, Cross),
        Bead::new(1, TailLarge),
        Bead::new(2, TailSmall),
        Bead::new(3, TailSmall),
        Bead::new(4, TailSmall),
    ];

    let mut index = LOOP_START;
    for _ in 0..DECADES {
        beads.push(Bead::new(index, BeadLarge));
        index += 1;
        for _ in 0..BEADS_PER_DECADE {
            beads.push(Bead::with_prayer(index, BeadSmall, Prayer::LordJesus));
            index += 1;
        }
    }
    beads
}
