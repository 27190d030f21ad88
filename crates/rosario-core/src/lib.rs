//! Core engine of the Rosario prayer companion.
//!
//! - [`beads`]: the fixed step sequence of each prayer type
//! - [`navigation`]: position tracking with restart requests
//! - [`input`]: gesture to command mapping
//! - [`session`]: settings-aware state holder tying the above together

pub mod beads;
pub mod input;
pub mod navigation;
pub mod session;
pub mod text;

pub use beads::generate_beads;
pub use input::{Command, Gesture};
pub use navigation::{BeadNavigator, Step};
pub use session::PrayerSession;
pub use text::{EnglishTitles, PrayerTextResolver};
