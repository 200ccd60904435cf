//! Trivia flashcards: one card at a time, topic first, fact on reveal.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
