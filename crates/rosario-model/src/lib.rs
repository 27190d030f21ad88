//! Data model for the Rosario prayer companion.

pub mod bead;
pub mod enums;
pub mod error;
pub mod prayer;
pub mod settings;

pub use bead::Bead;
pub use enums::{BeadType, DisplayMode, Language, NavigationMode, PrayerLocation, PrayerType};
pub use error::{ModelError, Result};
pub use prayer::Prayer;
pub use settings::Settings;
