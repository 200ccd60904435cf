//! The closing message screen: two lines typed out character by
//! character, then a heart. Any key skips straight to the end.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
