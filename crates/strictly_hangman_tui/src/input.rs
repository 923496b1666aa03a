//! Terminal events to application events.
//!
//! Only letters get through as guesses; every other character key is dropped
//! here, before it can reach the session.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Everything the application reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A letter typed into the input line.
    Type(char),
    /// Clear the input line.
    Erase,
    /// Submit the input line as a guess.
    Submit,
    /// Leave the game.
    Quit,
    /// The terminal now has this many columns and rows.
    Resize(u16, u16),
}

/// Maps a terminal event, dropping anything the game ignores.
pub fn translate(event: &Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Resize(width, height) => Some(AppEvent::Resize(*width, *height)),
        _ => None,
    }
}

/// Maps a key press. Releases and repeats are ignored.
pub fn translate_key(key: &KeyEvent) -> Option<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(AppEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(AppEvent::Quit)
        }
        KeyCode::Enter => Some(AppEvent::Submit),
        KeyCode::Backspace | KeyCode::Delete => Some(AppEvent::Erase),
        KeyCode::Char(c) if c.is_alphabetic() && !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(AppEvent::Type(c))
        }
        _ => None,
    }
}
