use serde::{Deserialize, Serialize};

use crate::enums::BeadType;
use crate::prayer::Prayer;

/// One step of a prayer sequence.
///
/// `index` is the bead's position on the physical string. Several steps can
/// share a bead (the rosary's junction bead carries three prayers), so it is
/// not the step's position in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bead {
    pub index: usize,
    #[serde(rename = "type")]
    pub bead_type: BeadType,
    pub prayer: Option<Prayer>,
}

impl Bead {
    /// A bead with no prayer attached.
    pub const fn new(index: usize, bead_type: BeadType) -> Self {
        Self {
            index,
            bead_type,
            prayer: None,
        }
    }

    pub const fn with_prayer(index: usize, bead_type: BeadType, prayer: Prayer) -> Self {
        Self {
            index,
            bead_type,
            prayer: Some(prayer),
        }
    }

    /// Navigation only stops on beads that carry a prayer.
    pub const fn has_prayer(&self) -> bool {
        self.prayer.is_some()
    }
}
