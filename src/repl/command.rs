//! Key-event to command mapping
//!
//! The form has a fixed key set: printable characters edit the input line,
//! Enter submits, and three control chords toggle the display filters.
//! Filter toggles never dispatch a request; they only change what the view
//! projects.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::form::filter::FilterTag;

/// Commands the controller applies to the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Append a character to the input line
    InsertChar(char),
    /// Delete the last character of the input line
    DeleteChar,
    /// Clear the input line
    ClearInput,
    /// Validate the input and dispatch a request
    Submit,
    /// Toggle one display filter
    ToggleFilter(FilterTag),
    /// Exit the application
    Quit,
}

/// Map a key event to a command, if it has one.
///
/// Only key presses map; repeats and releases are ignored.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            KeyCode::Char('u') => Some(Command::ClearInput),
            KeyCode::Char('n') => Some(Command::ToggleFilter(FilterTag::Numbers)),
            KeyCode::Char('a') => Some(Command::ToggleFilter(FilterTag::Alphabets)),
            KeyCode::Char('x') => Some(Command::ToggleFilter(FilterTag::MaximumAlphabet)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => Some(Command::InsertChar(c)),
        KeyCode::Backspace => Some(Command::DeleteChar),
        KeyCode::Enter => Some(Command::Submit),
        KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
