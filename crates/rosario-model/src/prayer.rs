//! Catalogue of prayer texts a bead can point at.
//!
//! A `Prayer` is a reference, not the text itself: the resource key is what a
//! localized-string resolver looks up. The English title is the fallback
//! when no resolver has a translation.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prayer {
    InTheName,
    ApostlesCreed,
    OurFather,
    /// Hail Mary for an increase of faith.
    Faith,
    /// Hail Mary for an increase of hope.
    Hope,
    /// Hail Mary for an increase of love.
    Love,
    GloryBe,
    /// Fatima prayer.
    OMyJesus,
    HailMary,
    EternalFather,
    ForTheSake,
    HolyGod,
    OBloodAndWater,
    JesusITrust,
    LordJesus,
}

impl Prayer {
    pub const fn all() -> &'static [Prayer] {
        &[
            Self::InTheName,
            Self::ApostlesCreed,
            Self::OurFather,
            Self::Faith,
            Self::Hope,
            Self::Love,
            Self::GloryBe,
            Self::OMyJesus,
            Self::HailMary,
            Self::EternalFather,
            Self::ForTheSake,
            Self::HolyGod,
            Self::OBloodAndWater,
            Self::JesusITrust,
            Self::LordJesus,
        ]
    }

    /// Resource key used to look up the localized text.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::InTheName => "prayer_in_the_name",
            Self::ApostlesCreed => "prayer_apostles_creed",
            Self::OurFather => "prayer_our_father",
            Self::Faith => "prayer_faith",
            Self::Hope => "prayer_hope",
            Self::Love => "prayer_love",
            Self::GloryBe => "prayer_glory_be",
            Self::OMyJesus => "prayer_o_my_jesus",
            Self::HailMary => "prayer_hail_mary",
            Self::EternalFather => "prayer_eternal_father",
            Self::ForTheSake => "prayer_for_the_sake",
            Self::HolyGod => "prayer_holy_god",
            Self::OBloodAndWater => "prayer_o_blood_and_water",
            Self::JesusITrust => "prayer_jesus_i_trust",
            Self::LordJesus => "prayer_lord_jesus",
        }
    }

    /// English title.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::InTheName => "In the Name of the Father",
            Self::ApostlesCreed => "Apostles' Creed",
            Self::OurFather => "Our Father",
            Self::Faith => "Hail Mary (faith)",
            Self::Hope => "Hail Mary (hope)",
            Self::Love => "Hail Mary (love)",
            Self::GloryBe => "Glory Be",
            Self::OMyJesus => "O my Jesus",
            Self::HailMary => "Hail Mary",
            Self::EternalFather => "Eternal Father",
            Self::ForTheSake => "For the sake of His sorrowful Passion",
            Self::HolyGod => "Holy God, Holy Mighty One",
            Self::OBloodAndWater => "O Blood and Water",
            Self::JesusITrust => "Jesus, I trust in You",
            Self::LordJesus => "Lord Jesus Christ, Son of God",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<&str> = Prayer::all().iter().map(Prayer::key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Prayer::all().len());
    }
}
