//! Position tracking within a bead sequence.
//!
//! The navigator only ever rests on steps that carry a prayer. Walking past
//! the last such step does not wrap; it raises a restart request that the
//! caller answers with [`BeadNavigator::reset`].

use rosario_model::{Bead, Prayer};

/// Result of a navigation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved to the given position.
    Moved(usize),
    /// No prayer left ahead; a restart is now pending.
    RestartRequested,
    /// Nothing to move to.
    Stayed,
}

#[derive(Debug, Clone, Default)]
pub struct BeadNavigator {
    beads: Vec<Bead>,
    current: usize,
    restart_requested: bool,
}

impl BeadNavigator {
    /// Start on the first step that carries a prayer.
    pub fn new(beads: Vec<Bead>) -> Self {
        let current = first_prayer_index(&beads).unwrap_or(0);
        Self {
            beads,
            current,
            restart_requested: false,
        }
    }

    pub fn beads(&self) -> &[Bead] {
        &self.beads
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_bead(&self) -> Option<&Bead> {
        self.beads.get(self.current)
    }

    /// Prayer at the current position, if any.
    pub fn current_prayer(&self) -> Option<Prayer> {
        self.current_bead().and_then(|bead| bead.prayer)
    }

    pub fn restart_requested(&self) -> bool {
        self.restart_requested
    }

    /// Position of the first step with a prayer.
    pub fn first_prayer_index(&self) -> Option<usize> {
        first_prayer_index(&self.beads)
    }

    pub fn next(&mut self) -> Step {
        if self.beads.is_empty() {
            return Step::Stayed;
        }
        let ahead = self
            .beads
            .iter()
            .enumerate()
            .skip(self.current + 1)
            .find(|(_, bead)| bead.has_prayer())
            .map(|(index, _)| index);

        match ahead {
            Some(index) => {
                self.current = index;
                tracing::trace!(index, "moved to next bead");
                Step::Moved(index)
            }
            None => {
                self.restart_requested = true;
                tracing::debug!(index = self.current, "end of sequence, restart requested");
                Step::RestartRequested
            }
        }
    }

    pub fn previous(&mut self) -> Step {
        let end = self.current.min(self.beads.len());
        let behind = self.beads[..end]
            .iter()
            .rposition(Bead::has_prayer);

        match behind {
            Some(index) => {
                self.current = index;
                tracing::trace!(index, "moved to previous bead");
                Step::Moved(index)
            }
            None => Step::Stayed,
        }
    }

    /// Answer a restart request.
    ///
    /// Unconfirmed, only the pending request is dropped. Confirmed, the
    /// position also goes back to the first prayer.
    pub fn reset(&mut self, confirmed: bool) -> Step {
        self.restart_requested = false;
        if !confirmed {
            return Step::Stayed;
        }
        match self.first_prayer_index() {
            Some(index) => {
                self.current = index;
                tracing::debug!(index, "sequence restarted");
                Step::Moved(index)
            }
            None => Step::Stayed,
        }
    }

    /// Swap in a new sequence and start over.
    pub fn replace_beads(&mut self, beads: Vec<Bead>) {
        *self = Self::new(beads);
    }

    /// Steps with a prayer up to and including the current one, and in total.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.beads.iter().filter(|bead| bead.has_prayer()).count();
        let done = self
            .beads
            .iter()
            .take(self.current + 1)
            .filter(|bead| bead.has_prayer())
            .count();
        (done, total)
    }
}

fn first_prayer_index(beads: &[Bead]) -> Option<usize> {
    beads.iter().position(Bead::has_prayer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosario_model::BeadType;

    fn sparse() -> Vec<Bead> {
        vec![
            Bead::new(0, BeadType::Cross),
            Bead::with_prayer(1, BeadType::TailLarge, Prayer::OurFather),
            Bead::new(2, BeadType::TailSmall),
            Bead::with_prayer(3, BeadType::TailSmall, Prayer::HailMary),
            Bead::new(4, BeadType::TailSmall),
        ]
    }

    #[test]
    fn starts_on_first_prayer() {
        let navigator = BeadNavigator::new(sparse());
        assert_eq!(navigator.current_index(), 1);
        assert_eq!(navigator.current_prayer(), Some(Prayer::OurFather));
    }

    #[test]
    fn next_skips_beads_without_prayer() {
        let mut navigator = BeadNavigator::new(sparse());
        assert_eq!(navigator.next(), Step::Moved(3));
        assert_eq!(navigator.next(), Step::RestartRequested);
        assert_eq!(navigator.current_index(), 3);
        assert!(navigator.restart_requested());
    }

    #[test]
    fn previous_stops_at_first_prayer() {
        let mut navigator = BeadNavigator::new(sparse());
        navigator.next();
        assert_eq!(navigator.previous(), Step::Moved(1));
        assert_eq!(navigator.previous(), Step::Stayed);
        assert_eq!(navigator.current_index(), 1);
    }

    #[test]
    fn reset_unconfirmed_keeps_position() {
        let mut navigator = BeadNavigator::new(sparse());
        navigator.next();
        navigator.next();
        assert_eq!(navigator.reset(false), Step::Stayed);
        assert!(!navigator.restart_requested());
        assert_eq!(navigator.current_index(), 3);
    }

    #[test]
    fn reset_confirmed_returns_to_start() {
        let mut navigator = BeadNavigator::new(sparse());
        navigator.next();
        navigator.next();
        assert_eq!(navigator.reset(true), Step::Moved(1));
        assert!(!navigator.restart_requested());
    }

    #[test]
    fn empty_sequence_is_inert() {
        let mut navigator = BeadNavigator::new(Vec::new());
        assert_eq!(navigator.next(), Step::Stayed);
        assert_eq!(navigator.previous(), Step::Stayed);
        assert_eq!(navigator.reset(true), Step::Stayed);
        assert!(!navigator.restart_requested());
        assert_eq!(navigator.current_bead(), None);
        assert_eq!(navigator.current_prayer(), None);
        assert_eq!(navigator.progress(), (0, 0));
    }

    #[test]
    fn progress_counts_prayers() {
        let mut navigator = BeadNavigator::new(sparse());
        assert_eq!(navigator.progress(), (1, 2));
        navigator.next();
        assert_eq!(navigator.progress(), (2, 2));
    }
}
