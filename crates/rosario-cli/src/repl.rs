//! Line-driven prayer session.
//!
//! Each line of input is one key press. Keys become the gesture the current
//! navigation mode listens to, so mode and rewind settings apply exactly as
//! they do for taps and buttons.

use std::io::{self, BufRead, Write};

use rosario_core::{Command, Gesture, PrayerSession, PrayerTextResolver, Step};
use rosario_model::NavigationMode;
use rosario_store::PreferenceStore;

use crate::render::status_lines;

const HELP: &str = "keys: n/next (or empty line), p/prev, r/reset, h/help, q/quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    Next,
    Previous,
    Reset,
    Help,
    Quit,
}

impl Key {
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "" | "n" | "next" => Some(Self::Next),
            "p" | "prev" | "previous" => Some(Self::Previous),
            "r" | "reset" => Some(Self::Reset),
            "h" | "help" | "?" => Some(Self::Help),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Gesture that delivers `command` under `mode`.
fn gesture_for(command: Command, mode: NavigationMode) -> Gesture {
    match (command, mode.accepts_buttons()) {
        (Command::Next, true) => Gesture::NextButton,
        (Command::Previous, true) => Gesture::PreviousButton,
        (Command::Next, false) => Gesture::Tap { x: 3.0, width: 4.0 },
        (Command::Previous, false) => Gesture::Tap { x: 1.0, width: 4.0 },
    }
}

/// Run the session until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run<P, R, W>(
    session: &mut PrayerSession<P>,
    resolver: &impl PrayerTextResolver,
    input: R,
    output: &mut W,
) -> io::Result<()>
where
    P: PreferenceStore,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    writeln!(output, "{}", session.title(resolver))?;
    writeln!(output, "{HELP}")?;
    print_status(session, resolver, output)?;

    while let Some(line) = lines.next() {
        let line = line?;
        let Some(key) = Key::parse(&line) else {
            writeln!(output, "unknown key '{}'; {HELP}", line.trim())?;
            continue;
        };
        match key {
            Key::Quit => break,
            Key::Help => writeln!(output, "{HELP}")?,
            Key::Reset => {
                session.reset(true);
                print_status(session, resolver, output)?;
            }
            Key::Next | Key::Previous => {
                let command = if key == Key::Next {
                    Command::Next
                } else {
                    Command::Previous
                };
                let gesture = gesture_for(command, session.settings().navigation_mode);
                match session.handle(gesture) {
                    Step::Moved(_) => print_status(session, resolver, output)?,
                    Step::RestartRequested => {
                        write!(output, "End of the {}. Start again? [y/N] ", session.title(resolver))?;
                        output.flush()?;
                        let answer = lines.next().transpose()?;
                        let confirmed = answer.as_deref().is_some_and(is_yes);
                        session.reset(confirmed);
                        writeln!(output)?;
                        print_status(session, resolver, output)?;
                        if answer.is_none() {
                            break;
                        }
                    }
                    Step::Stayed => {
                        if command == Command::Previous && !session.settings().allow_rewind {
                            writeln!(output, "rewinding is turned off")?;
                        }
                    }
                }
            }
        }
    }
    output.flush()
}

fn print_status<P: PreferenceStore, W: Write>(
    session: &PrayerSession<P>,
    resolver: &impl PrayerTextResolver,
    output: &mut W,
) -> io::Result<()> {
    for line in status_lines(session, resolver) {
        writeln!(output, "{line}")?;
    }
    Ok(())
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_parse_case_insensitively() {
        assert_eq!(Key::parse(""), Some(Key::Next));
        assert_eq!(Key::parse(" N "), Some(Key::Next));
        assert_eq!(Key::parse("Prev"), Some(Key::Previous));
        assert_eq!(Key::parse("q"), Some(Key::Quit));
        assert_eq!(Key::parse("x"), None);
    }

    #[test]
    fn tap_gestures_land_on_the_right_half() {
        assert_eq!(
            gesture_for(Command::Next, NavigationMode::Tap),
            Gesture::Tap { x: 3.0, width: 4.0 }
        );
        assert_eq!(
            gesture_for(Command::Previous, NavigationMode::Both),
            Gesture::PreviousButton
        );
    }
}
