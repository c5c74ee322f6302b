//! Game state machine and the interactive session wrapped around it.

use crate::board::{calculate_scores, find_segments, Board, Marker, Scores, Segment};
use crate::config::GameConfig;
use crate::constants::{BOARD_COLS, BOARD_ROWS};

/// Board, side to move and undo history. Owned by the caller; no globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    /// Marker that places next
    pub turn: Marker,
    /// Board snapshots taken before each placement
    history: Vec<Board>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Marker::X,
            history: Vec::new(),
        }
    }

    /// Place the active marker. No-op returning false when the cell is
    /// occupied or off the board.
    pub fn place(&mut self, row: usize, col: usize) -> bool {
        if !self.board.is_empty_cell(row, col) {
            return false;
        }
        self.history.push(self.board);
        self.board.place(row, col, self.turn);
        self.turn = self.turn.opponent();
        true
    }

    /// Restore the board from before the last placement. No-op returning
    /// false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.board = previous;
                self.turn = self.turn.opponent();
                true
            }
            None => false,
        }
    }

    /// Empty board, X to move, no history.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    pub fn scores(&self) -> Scores {
        calculate_scores(&self.board)
    }

    pub fn segments(&self, marker: Marker) -> Vec<Segment> {
        find_segments(&self.board, marker)
    }
}

/// Pending advisor move, counted down in ticks. Dropping it cancels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisorSchedule {
    pub ticks_elapsed: u32,
    pub ticks_required: u32,
}

impl AdvisorSchedule {
    pub fn new(ticks_required: u32) -> Self {
        Self {
            ticks_elapsed: 0,
            ticks_required,
        }
    }

    /// Advance one tick. Returns true once the delay has run out.
    pub fn tick(&mut self) -> bool {
        self.ticks_elapsed = self.ticks_elapsed.saturating_add(1);
        self.ticks_elapsed >= self.ticks_required
    }
}

/// Everything the terminal front end needs between frames.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub state: GameState,
    /// Current cursor position (row, col)
    pub cursor: (usize, usize),
    /// Last placed cell for highlighting
    pub last_move: Option<(usize, usize)>,
    /// Marker played by the advisor, None for two humans
    pub advisor: Option<Marker>,
    /// Advisor move waiting for its delay to pass
    pub pending_advisor: Option<AdvisorSchedule>,
    /// Delay applied to each advisor move, in ticks
    pub think_ticks: u32,
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Self {
        let mut session = Self {
            state: GameState::new(),
            cursor: (BOARD_ROWS / 2, BOARD_COLS / 2),
            last_move: None,
            advisor: config.advisor,
            pending_advisor: None,
            think_ticks: config.think_ticks(),
        };
        session.schedule_advisor_if_due();
        session
    }

    /// Is the advisor currently waiting to move?
    pub fn ai_thinking(&self) -> bool {
        self.pending_advisor.is_some()
    }

    /// Is it the advisor's turn on this board?
    pub fn is_advisor_turn(&self) -> bool {
        self.advisor == Some(self.state.turn)
    }

    /// Start the advisor's delay if it is its turn and a move exists.
    pub fn schedule_advisor_if_due(&mut self) {
        if self.is_advisor_turn() && !self.state.is_full() && self.pending_advisor.is_none() {
            self.pending_advisor = Some(AdvisorSchedule::new(self.think_ticks));
        }
    }

    pub fn cancel_advisor(&mut self) {
        self.pending_advisor = None;
    }

    /// Move cursor in a direction, clamped to the board.
    pub fn move_cursor(&mut self, d_row: i32, d_col: i32) {
        let new_row = (self.cursor.0 as i32 + d_row).clamp(0, BOARD_ROWS as i32 - 1) as usize;
        let new_col = (self.cursor.1 as i32 + d_col).clamp(0, BOARD_COLS as i32 - 1) as usize;
        self.cursor = (new_row, new_col);
    }
}
