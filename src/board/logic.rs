//! Segment detection and scoring.

use super::{Board, Direction, Marker, Scores, Segment};
use crate::constants::SEGMENT_LENGTHS;

/// Find every scoring segment of `marker` on the board.
///
/// A segment is reported only from the start of its run: the cell one step
/// behind the start (same direction) must be off the board or not hold
/// `marker`. A run of four or more cells therefore reports both a length-3
/// and a length-4 segment from the same start cell.
///
/// Segments come back in scan order: cells row-major, then direction, then
/// length.
pub fn find_segments(board: &Board, marker: Marker) -> Vec<Segment> {
    let mut segments = Vec::new();

    for (row, col) in board.cells_of(marker) {
        for direction in Direction::ALL {
            let (dr, dc) = direction.delta();

            // Only count a run from its true start
            if board.get_signed(row as i32 - dr, col as i32 - dc) == Some(marker) {
                continue;
            }

            for len in SEGMENT_LENGTHS {
                if let Some(cells) = collect_run(board, row, col, dr, dc, len, marker) {
                    segments.push(Segment {
                        marker,
                        direction,
                        cells,
                    });
                }
            }
        }
    }

    segments
}

/// Walk `len` cells from (row, col) in direction (dr, dc).
/// Returns the cells if all are on the board and hold `marker`.
fn collect_run(
    board: &Board,
    row: usize,
    col: usize,
    dr: i32,
    dc: i32,
    len: usize,
    marker: Marker,
) -> Option<Vec<(usize, usize)>> {
    let mut cells = Vec::with_capacity(len);
    let mut r = row as i32;
    let mut c = col as i32;

    for _ in 0..len {
        if board.get_signed(r, c) != Some(marker) {
            return None;
        }
        cells.push((r as usize, c as usize));
        r += dr;
        c += dc;
    }

    Some(cells)
}

/// Score both markers from scratch: 1 point per length-3 segment,
/// 2 points per length-4 segment.
pub fn calculate_scores(board: &Board) -> Scores {
    let mut scores = Scores::default();
    for marker in Marker::ALL {
        for segment in find_segments(board, marker) {
            scores.add(marker, segment.points());
        }
    }
    scores
}
