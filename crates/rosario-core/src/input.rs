//! Mapping raw user input to navigation commands.
//!
//! Which input sources are live depends on the navigation mode, and stepping
//! back is only possible when rewinding is allowed.

use rosario_model::Settings;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Tap on the bead area at horizontal offset `x` of a `width` wide surface.
    Tap { x: f32, width: f32 },
    NextButton,
    PreviousButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
}

/// Resolve a gesture under the given settings, or `None` if it is ignored.
pub fn resolve(gesture: Gesture, settings: &Settings) -> Option<Command> {
    let mode = settings.navigation_mode;
    let command = match gesture {
        Gesture::Tap { x, width } if mode.accepts_taps() => {
            if x < width / 2.0 {
                Command::Previous
            } else {
                Command::Next
            }
        }
        Gesture::NextButton if mode.accepts_buttons() => Command::Next,
        Gesture::PreviousButton if mode.accepts_buttons() => Command::Previous,
        _ => {
            tracing::trace!(?gesture, %mode, "gesture ignored by navigation mode");
            return None;
        }
    };

    if command == Command::Previous && !settings.allow_rewind {
        tracing::trace!("rewind disabled, ignoring previous");
        return None;
    }
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosario_model::NavigationMode;

    const LEFT: Gesture = Gesture::Tap { x: 10.0, width: 100.0 };
    const RIGHT: Gesture = Gesture::Tap { x: 90.0, width: 100.0 };

    fn settings(mode: NavigationMode, allow_rewind: bool) -> Settings {
        Settings::default()
            .with_navigation_mode(mode)
            .with_allow_rewind(allow_rewind)
    }

    #[test]
    fn taps_split_the_surface_in_half() {
        let tap = settings(NavigationMode::Tap, true);
        assert_eq!(resolve(LEFT, &tap), Some(Command::Previous));
        assert_eq!(resolve(RIGHT, &tap), Some(Command::Next));
        assert_eq!(
            resolve(Gesture::Tap { x: 50.0, width: 100.0 }, &tap),
            Some(Command::Next)
        );
    }

    #[test]
    fn button_mode_ignores_taps() {
        let buttons = settings(NavigationMode::Button, true);
        assert_eq!(resolve(RIGHT, &buttons), None);
        assert_eq!(resolve(Gesture::NextButton, &buttons), Some(Command::Next));
        assert_eq!(
            resolve(Gesture::PreviousButton, &buttons),
            Some(Command::Previous)
        );
    }

    #[test]
    fn tap_mode_ignores_buttons() {
        let tap = settings(NavigationMode::Tap, true);
        assert_eq!(resolve(Gesture::NextButton, &tap), None);
        assert_eq!(resolve(Gesture::PreviousButton, &tap), None);
    }

    #[test]
    fn both_mode_accepts_everything() {
        let both = settings(NavigationMode::Both, true);
        assert_eq!(resolve(LEFT, &both), Some(Command::Previous));
        assert_eq!(resolve(Gesture::NextButton, &both), Some(Command::Next));
    }

    #[test]
    fn rewind_disabled_drops_previous() {
        let both = settings(NavigationMode::Both, false);
        assert_eq!(resolve(LEFT, &both), None);
        assert_eq!(resolve(Gesture::PreviousButton, &both), None);
        assert_eq!(resolve(RIGHT, &both), Some(Command::Next));
    }
}
