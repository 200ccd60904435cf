//! Santa Dash endless runner.
//!
//! A real-time side-scroller: Santa jumps and ducks along a fixed column
//! while obstacles and collectibles scroll in from the right. Collecting
//! presents raises the score toward the win threshold; clipping an
//! obstacle costs a life. Three lost lives end the run.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
