//! Session input handling and advisor pacing.

use super::GameSession;
use crate::advisor::choose_move;

/// Input actions for the session (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionInput {
    Up,
    Down,
    Left,
    Right,
    Place,
    Undo,
    Reset,
    Other,
}

/// Process one input. Returns true if the input was handled.
/// Does nothing while the advisor is thinking.
pub fn process_input(session: &mut GameSession, input: SessionInput) -> bool {
    if session.ai_thinking() {
        return false;
    }

    match input {
        SessionInput::Up => session.move_cursor(-1, 0),
        SessionInput::Down => session.move_cursor(1, 0),
        SessionInput::Left => session.move_cursor(0, -1),
        SessionInput::Right => session.move_cursor(0, 1),
        SessionInput::Place => {
            let (row, col) = session.cursor;
            process_human_move(session, row, col);
        }
        SessionInput::Undo => {
            undo_turn(session);
        }
        SessionInput::Reset => reset_game(session),
        SessionInput::Other => {}
    }
    true
}

/// Place the side-to-move's marker for a human. Rejected while it is the
/// advisor's turn or when the cell is taken.
pub fn process_human_move(session: &mut GameSession, row: usize, col: usize) -> bool {
    if session.is_advisor_turn() || !session.state.place(row, col) {
        return false;
    }
    session.last_move = Some((row, col));
    session.schedule_advisor_if_due();
    true
}

/// Undo back to the human's turn.
///
/// With an advisor seated, a single undo would hand the turn straight back to
/// the advisor, so plies are popped until a human is to move or the history
/// runs out. Returns true if anything was undone.
pub fn undo_turn(session: &mut GameSession) -> bool {
    session.cancel_advisor();

    if !session.state.undo() {
        session.schedule_advisor_if_due();
        return false;
    }
    while session.is_advisor_turn() && session.state.can_undo() {
        session.state.undo();
    }

    session.last_move = None;
    // Advisor playing X with everything undone: it opens again
    session.schedule_advisor_if_due();
    true
}

/// Start over with an empty board.
pub fn reset_game(session: &mut GameSession) {
    session.cancel_advisor();
    session.state.reset();
    session.last_move = None;
    session.schedule_advisor_if_due();
}

/// Process advisor thinking (called each tick).
/// Returns the cell the advisor played, if it moved this tick.
pub fn process_ai_thinking(session: &mut GameSession) -> Option<(usize, usize)> {
    let schedule = session.pending_advisor.as_mut()?;
    if !schedule.tick() {
        return None;
    }
    session.pending_advisor = None;
    play_advisor_move(session)
}

/// Let the advisor move immediately, skipping any delay.
pub fn play_advisor_move(session: &mut GameSession) -> Option<(usize, usize)> {
    let ai = session.advisor.filter(|&m| m == session.state.turn)?;
    let (row, col) = choose_move(&session.state.board, ai, ai.opponent())?;
    if !session.state.place(row, col) {
        return None;
    }
    session.last_move = Some((row, col));
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Marker;
    use crate::config::GameConfig;

    fn session(advisor: Option<Marker>, think_delay_ms: u64) -> GameSession {
        GameSession::new(&GameConfig {
            advisor,
            think_delay_ms,
        })
    }

    fn run_ticks(session: &mut GameSession, ticks: u32) -> Option<(usize, usize)> {
        let mut played = None;
        for _ in 0..ticks {
            if let Some(pos) = process_ai_thinking(session) {
                played = Some(pos);
            }
        }
        played
    }

    #[test]
    fn test_process_input_cursor_movement() {
        let mut s = session(None, 0);
        assert_eq!(s.cursor, (5, 5));

        process_input(&mut s, SessionInput::Up);
        assert_eq!(s.cursor, (4, 5));
        process_input(&mut s, SessionInput::Down);
        assert_eq!(s.cursor, (5, 5));
        process_input(&mut s, SessionInput::Left);
        assert_eq!(s.cursor, (5, 4));
        process_input(&mut s, SessionInput::Right);
        assert_eq!(s.cursor, (5, 5));
    }

    #[test]
    fn test_two_humans_alternate() {
        let mut s = session(None, 0);
        s.cursor = (1, 1);
        process_input(&mut s, SessionInput::Place);
        s.cursor = (1, 2);
        process_input(&mut s, SessionInput::Place);
        assert_eq!(s.state.board.get(1, 1), Some(Marker::X));
        assert_eq!(s.state.board.get(1, 2), Some(Marker::O));
        assert!(!s.ai_thinking());
    }

    #[test]
    fn test_place_on_occupied_does_not_schedule_advisor() {
        let mut s = session(Some(Marker::O), 400);
        s.state.board.place(3, 3, Marker::O);
        assert!(!process_human_move(&mut s, 3, 3));
        assert!(!s.ai_thinking());
        assert_eq!(s.state.turn, Marker::X);
    }

    #[test]
    fn test_advisor_moves_after_delay() {
        let mut s = session(Some(Marker::O), 300);
        assert!(process_human_move(&mut s, 5, 5));
        assert!(s.ai_thinking());

        assert_eq!(run_ticks(&mut s, 2), None);
        assert_eq!(s.state.turn, Marker::O);

        // Empty-ish board: every delta ties at zero, first empty cell wins
        assert_eq!(run_ticks(&mut s, 1), Some((0, 0)));
        assert!(!s.ai_thinking());
        assert_eq!(s.state.turn, Marker::X);
        assert_eq!(s.last_move, Some((0, 0)));
    }

    #[test]
    fn test_input_blocked_while_thinking() {
        let mut s = session(Some(Marker::O), 400);
        process_human_move(&mut s, 5, 5);
        let cursor = s.cursor;
        assert!(!process_input(&mut s, SessionInput::Up));
        assert_eq!(s.cursor, cursor);
        assert!(!process_input(&mut s, SessionInput::Undo));
        assert_eq!(s.state.move_count(), 1);
    }

    #[test]
    fn test_human_cannot_play_advisor_turn() {
        let mut s = session(Some(Marker::O), 400);
        process_human_move(&mut s, 5, 5);
        s.cancel_advisor();
        assert!(!process_human_move(&mut s, 6, 6));
        assert_eq!(s.state.board.get(6, 6), None);
    }

    #[test]
    fn test_undo_returns_to_human_turn() {
        let mut s = session(Some(Marker::O), 0);
        process_human_move(&mut s, 5, 5);
        run_ticks(&mut s, 1);
        assert_eq!(s.state.move_count(), 2);

        assert!(process_input(&mut s, SessionInput::Undo));
        assert_eq!(s.state.move_count(), 0);
        assert_eq!(s.state.turn, Marker::X);
        assert!(!s.ai_thinking());
    }

    #[test]
    fn test_undo_without_advisor_is_one_ply() {
        let mut s = session(None, 0);
        process_human_move(&mut s, 0, 0);
        process_human_move(&mut s, 0, 1);
        assert!(undo_turn(&mut s));
        assert_eq!(s.state.move_count(), 1);
        assert_eq!(s.state.turn, Marker::O);
    }

    #[test]
    fn test_undo_with_empty_history_is_noop() {
        let mut s = session(None, 0);
        assert!(!undo_turn(&mut s));
        assert_eq!(s.state.move_count(), 0);
        assert_eq!(s.state.turn, Marker::X);
    }

    #[test]
    fn test_undo_advisor_opening_reschedules_it() {
        let mut s = session(Some(Marker::X), 0);
        assert_eq!(run_ticks(&mut s, 1), Some((0, 0)));
        assert!(undo_turn(&mut s));
        assert_eq!(s.state.move_count(), 0);
        assert!(s.ai_thinking());
    }

    #[test]
    fn test_reset_cancels_pending_advisor() {
        let mut s = session(Some(Marker::O), 400);
        process_human_move(&mut s, 5, 5);
        assert!(s.ai_thinking());
        reset_game(&mut s);
        assert!(!s.ai_thinking());
        assert_eq!(s.state.move_count(), 0);
        assert_eq!(s.last_move, None);
    }

    #[test]
    fn test_reset_via_input() {
        let mut s = session(None, 0);
        process_human_move(&mut s, 2, 2);
        assert!(process_input(&mut s, SessionInput::Reset));
        assert_eq!(s.state.move_count(), 0);
    }

    #[test]
    fn test_advisor_extends_its_own_run() {
        let mut s = session(Some(Marker::O), 0);
        s.state.board.place(9, 0, Marker::O);
        s.state.board.place(9, 1, Marker::O);
        process_human_move(&mut s, 0, 9);
        assert_eq!(run_ticks(&mut s, 1), Some((9, 2)));
        assert_eq!(s.state.scores().o, 1);
    }

    #[test]
    fn test_play_advisor_move_only_on_its_turn() {
        let mut s = session(Some(Marker::O), 0);
        assert_eq!(play_advisor_move(&mut s), None);
        assert_eq!(s.state.move_count(), 0);
    }
}
