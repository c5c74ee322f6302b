//! Headless advisor-vs-advisor self-play.
//!
//! Plays complete games with the advisor on both sides, after an optional
//! random opening, and reports how the markers scored. Useful for checking
//! that changes to the heuristic behave as intended.

mod config;
mod report;
mod runner;

pub use config::SelfPlayConfig;
pub use report::{GameRecord, SelfPlayReport};
pub use runner::{play_single_game, run_selfplay};
