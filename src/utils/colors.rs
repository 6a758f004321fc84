//! ANSI colour helpers for terminal output.

use crate::timecard::EntryState;
use ansi_term::Colour;

/// Pending → yellow, Partial → cyan, Hashed → green
pub fn colour_for_state(state: EntryState) -> Colour {
    match state {
        EntryState::Pending => Colour::Yellow,
        EntryState::Partial => Colour::Cyan,
        EntryState::Hashed => Colour::Green,
    }
}
