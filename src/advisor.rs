//! Heuristic opponent: greedy one-ply search over every empty cell.

use crate::board::{calculate_scores, Board, Marker, Scores};
use crate::constants::OPPONENT_GAIN_WEIGHT;

/// Weighted score change from `before` to `after`, seen from `ai`.
pub fn move_delta(before: &Scores, after: &Scores, ai: Marker, opp: Marker) -> f64 {
    let own_gain = after.get(ai) as f64 - before.get(ai) as f64;
    let opp_gain = after.get(opp) as f64 - before.get(opp) as f64;
    own_gain - OPPONENT_GAIN_WEIGHT * opp_gain
}

/// Pick the empty cell whose placement maximizes `move_delta` for `ai`.
///
/// Ties go to the first cell in row-major order. Returns None when the
/// board is full. The board is never modified; the caller applies the move.
pub fn choose_move(board: &Board, ai: Marker, opp: Marker) -> Option<(usize, usize)> {
    let before = calculate_scores(board);
    let mut best: Option<((usize, usize), f64)> = None;

    for (r, c) in board.empty_cells() {
        let after = calculate_scores(&board.with_placed(r, c, ai));
        let delta = move_delta(&before, &after, ai, opp);

        // Strictly greater keeps the earliest cell among equals
        if best.map_or(true, |(_, best_delta)| delta > best_delta) {
            best = Some(((r, c), delta));
        }
    }

    best.map(|(pos, _)| pos)
}
