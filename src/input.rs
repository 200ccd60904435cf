//! Keyboard translation for each screen.
//!
//! Keeps main.rs free of key tables: every screen gets one function that
//! turns a crossterm [`KeyEvent`] into that screen's input enum. Global
//! keys (quit, retry) are handled in main.rs before these run.

use crate::games::dash::DashInput;
use crate::games::flashcards::FlashcardInput;
use crate::games::memory::MemoryInput;
use crate::games::message::MessageInput;
use crossterm::event::{KeyCode, KeyEvent};

/// Runner controls. Esc is Forfeit here, not quit: the run asks for
/// confirmation before it ends.
pub fn dash_input(key: KeyEvent) -> DashInput {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => DashInput::Jump,
        KeyCode::Down => DashInput::Duck,
        KeyCode::Esc => DashInput::Forfeit,
        _ => DashInput::Other,
    }
}

pub fn memory_input(key: KeyEvent) -> MemoryInput {
    match key.code {
        KeyCode::Up => MemoryInput::Up,
        KeyCode::Down => MemoryInput::Down,
        KeyCode::Left => MemoryInput::Left,
        KeyCode::Right => MemoryInput::Right,
        KeyCode::Enter | KeyCode::Char(' ') => MemoryInput::Flip,
        _ => MemoryInput::Other,
    }
}

pub fn flashcard_input(key: KeyEvent) -> FlashcardInput {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right => FlashcardInput::Advance,
        KeyCode::Char('n') | KeyCode::Char('N') => FlashcardInput::Advance,
        _ => FlashcardInput::Other,
    }
}

/// Any real keypress skips the typewriter. Bare modifiers do not.
pub fn message_input(key: KeyEvent) -> MessageInput {
    match key.code {
        KeyCode::Modifier(_) | KeyCode::Null => MessageInput::Other,
        _ => MessageInput::Skip,
    }
}
