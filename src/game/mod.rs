//! Turn handling: the place/undo/reset state machine and the interactive
//! session that paces the advisor.

pub mod logic;
pub mod types;

pub use logic::{
    play_advisor_move, process_ai_thinking, process_human_move, process_input, reset_game,
    undo_turn, SessionInput,
};
pub use types::{AdvisorSchedule, GameSession, GameState};
