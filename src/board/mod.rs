//! The 10x10 board and its segment scoring.

pub mod logic;
pub mod types;

pub use logic::{calculate_scores, find_segments};
pub use types::{Board, Direction, Marker, Scores, Segment};
