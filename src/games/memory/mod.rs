//! Memory Match: a 4x4 grid of face-down card pairs.
//!
//! The player steers a cursor and flips cards two at a time; a matched
//! pair locks face-up, a mismatch flips back after a short reveal. The
//! round ends once every pair is matched.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
