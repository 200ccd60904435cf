//! The four stages of the arcade sequence: the Santa Dash runner, the
//! memory-match board, the trivia flashcards, and the closing message.

pub mod dash;
pub mod flashcards;
pub mod memory;
pub mod message;
