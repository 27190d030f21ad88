//! Type-safe enumerations for prayer settings and bead layout.
//!
//! Every enum has a stable storage name (the `SCREAMING_SNAKE_CASE` form
//! also used by serde) so values survive a round trip through the
//! key-value preference store. Parsing is case-insensitive and accepts
//! `-` or spaces in place of `_`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Normalize user or stored input before matching a storage name.
fn normalize(s: &str) -> String {
    s.trim().to_uppercase().replace(['-', ' '], "_")
}

// ============================================================================
// Language
// ============================================================================

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    Pl,
    #[default]
    En,
    Fr,
    It,
    Es,
}

impl Language {
    pub const fn all() -> &'static [Language] {
        &[Self::Pl, Self::En, Self::Fr, Self::It, Self::Es]
    }

    /// Storage name ("PL", "EN", ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pl => "PL",
            Self::En => "EN",
            Self::Fr => "FR",
            Self::It => "IT",
            Self::Es => "ES",
        }
    }

    /// ISO 639-1 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Pl => "pl",
            Self::En => "en",
            Self::Fr => "fr",
            Self::It => "it",
            Self::Es => "es",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Pl => "Polski",
            Self::En => "English",
            Self::Fr => "Français",
            Self::It => "Italiano",
            Self::Es => "Español",
        }
    }

    /// Resolve a locale tag to a supported language.
    ///
    /// Accepts POSIX (`pl_PL.UTF-8`, `fr_FR@euro`) and BCP 47 (`it-IT`) forms
    /// as well as bare codes. Anything unsupported, including `C` and
    /// `POSIX`, resolves to English.
    pub fn from_locale(tag: &str) -> Self {
        let base = tag
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .split(['_', '-'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        Self::all()
            .iter()
            .copied()
            .find(|language| language.code() == base)
            .unwrap_or_default()
    }

    /// Resolve the language from the process locale environment.
    ///
    /// Checks `LC_ALL`, `LC_MESSAGES` and `LANG` in that order and uses the
    /// first non-empty value.
    pub fn system() -> Self {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty())
            .map(|value| Self::from_locale(&value))
            .unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "PL" => Ok(Self::Pl),
            "EN" => Ok(Self::En),
            "FR" => Ok(Self::Fr),
            "IT" => Ok(Self::It),
            "ES" => Ok(Self::Es),
            _ => Err(ModelError::unknown("language", s)),
        }
    }
}

// ============================================================================
// Navigation Mode
// ============================================================================

/// How the user advances through the beads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NavigationMode {
    /// Only the previous/next buttons.
    Button,
    /// Only taps on the bead area.
    #[default]
    Tap,
    /// Buttons and taps.
    Both,
}

impl NavigationMode {
    pub const fn all() -> &'static [NavigationMode] {
        &[Self::Button, Self::Tap, Self::Both]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "BUTTON",
            Self::Tap => "TAP",
            Self::Both => "BOTH",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Button => "Buttons",
            Self::Tap => "Tap",
            Self::Both => "Buttons and tap",
        }
    }

    pub const fn accepts_taps(&self) -> bool {
        !matches!(self, Self::Button)
    }

    pub const fn accepts_buttons(&self) -> bool {
        !matches!(self, Self::Tap)
    }
}

impl fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NavigationMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "BUTTON" => Ok(Self::Button),
            "TAP" => Ok(Self::Tap),
            "BOTH" => Ok(Self::Both),
            _ => Err(ModelError::unknown("navigation mode", s)),
        }
    }
}

// ============================================================================
// Prayer Type
// ============================================================================

/// Devotion whose bead sequence is prayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrayerType {
    #[default]
    Rosary,
    DivineMercy,
    /// Jesus prayer on a chotki.
    JesusPrayer,
}

impl PrayerType {
    pub const fn all() -> &'static [PrayerType] {
        &[Self::Rosary, Self::DivineMercy, Self::JesusPrayer]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rosary => "ROSARY",
            Self::DivineMercy => "DIVINE_MERCY",
            Self::JesusPrayer => "JESUS_PRAYER",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Rosary => "Rosary",
            Self::DivineMercy => "Chaplet of Divine Mercy",
            Self::JesusPrayer => "Jesus Prayer",
        }
    }
}

impl fmt::Display for PrayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PrayerType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "ROSARY" => Ok(Self::Rosary),
            "DIVINE_MERCY" => Ok(Self::DivineMercy),
            "JESUS_PRAYER" | "CHOTKA" => Ok(Self::JesusPrayer),
            _ => Err(ModelError::unknown("prayer type", s)),
        }
    }
}

// ============================================================================
// Display Mode
// ============================================================================

/// Colour theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayMode {
    Light,
    Dark,
    /// Follow the platform theme.
    #[default]
    System,
}

impl DisplayMode {
    pub const fn all() -> &'static [DisplayMode] {
        &[Self::Light, Self::Dark, Self::System]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "LIGHT",
            Self::Dark => "DARK",
            Self::System => "SYSTEM",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// Effective theme given whether the platform currently prefers dark.
    pub const fn is_dark(&self, system_is_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_is_dark,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "LIGHT" => Ok(Self::Light),
            "DARK" => Ok(Self::Dark),
            "SYSTEM" => Ok(Self::System),
            _ => Err(ModelError::unknown("display mode", s)),
        }
    }
}

// ============================================================================
// Prayer Location
// ============================================================================

/// Where the prayer text panel sits relative to the beads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrayerLocation {
    Top,
    #[default]
    Bottom,
}

impl PrayerLocation {
    pub const fn all() -> &'static [PrayerLocation] {
        &[Self::Top, Self::Bottom]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "TOP",
            Self::Bottom => "BOTTOM",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Bottom => "Bottom",
        }
    }
}

impl fmt::Display for PrayerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PrayerLocation {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "TOP" => Ok(Self::Top),
            "BOTTOM" => Ok(Self::Bottom),
            _ => Err(ModelError::unknown("prayer location", s)),
        }
    }
}

// ============================================================================
// Bead Type
// ============================================================================

/// Visual kind of a bead.
///
/// The tail is the short strand between the cross and the loop; large beads
/// open a decade, small beads make up its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeadType {
    Cross,
    TailLarge,
    TailSmall,
    BeadLarge,
    BeadSmall,
}

impl BeadType {
    pub const fn all() -> &'static [BeadType] {
        &[
            Self::Cross,
            Self::TailLarge,
            Self::TailSmall,
            Self::BeadLarge,
            Self::BeadSmall,
        ]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cross => "CROSS",
            Self::TailLarge => "TAIL_LARGE",
            Self::TailSmall => "TAIL_SMALL",
            Self::BeadLarge => "BEAD_LARGE",
            Self::BeadSmall => "BEAD_SMALL",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Cross => "Cross",
            Self::TailLarge => "Tail (large)",
            Self::TailSmall => "Tail (small)",
            Self::BeadLarge => "Large",
            Self::BeadSmall => "Small",
        }
    }

    /// Returns true for beads on the tail strand, excluding the cross.
    pub const fn is_tail(&self) -> bool {
        matches!(self, Self::TailLarge | Self::TailSmall)
    }

    pub const fn is_large(&self) -> bool {
        matches!(self, Self::TailLarge | Self::BeadLarge)
    }
}

impl fmt::Display for BeadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BeadType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "CROSS" => Ok(Self::Cross),
            "TAIL_LARGE" => Ok(Self::TailLarge),
            "TAIL_SMALL" => Ok(Self::TailSmall),
            "BEAD_LARGE" => Ok(Self::BeadLarge),
            "BEAD_SMALL" => Ok(Self::BeadSmall),
            _ => Err(ModelError::unknown("bead type", s)),
        }
    }
}
