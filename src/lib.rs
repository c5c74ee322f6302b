//! Segments - two-player board game with segment scoring
//!
//! Players alternately place X and O on a 10x10 board. Every run of three
//! same-marker cells in a line scores 1 point, every run of four scores 2
//! more. A greedy advisor can take either seat.
//!
//! This module exposes the game logic for testing and external use.

pub mod advisor;
pub mod board;
pub mod build_info;
pub mod config;
pub mod constants;
pub mod game;
pub mod selfplay;
pub mod ui;

pub use advisor::choose_move;
pub use board::{calculate_scores, find_segments, Board, Direction, Marker, Scores, Segment};
pub use config::GameConfig;
pub use game::{process_ai_thinking, process_input, GameSession, GameState, SessionInput};
pub use selfplay::{run_selfplay, SelfPlayConfig, SelfPlayReport};
