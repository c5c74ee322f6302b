//! Integration test: advisor move selection

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use segments::advisor::move_delta;
use segments::constants::{BOARD_COLS, BOARD_ROWS};
use segments::{calculate_scores, choose_move, Board, Marker};

fn scattered_board(seed: u64, stones: usize) -> Board {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut placed = 0;
    let mut marker = Marker::X;
    while placed < stones {
        let r = rng.gen_range(0..BOARD_ROWS);
        let c = rng.gen_range(0..BOARD_COLS);
        if board.place(r, c, marker) {
            placed += 1;
            marker = marker.opponent();
        }
    }
    board
}

/// Reference search: evaluate every empty cell and keep the first maximum.
fn brute_force_best(board: &Board, ai: Marker) -> Option<(usize, usize)> {
    let before = calculate_scores(board);
    let mut best: Option<((usize, usize), f64)> = None;
    for r in 0..BOARD_ROWS {
        for c in 0..BOARD_COLS {
            if board.get(r, c).is_some() {
                continue;
            }
            let after = calculate_scores(&board.with_placed(r, c, ai));
            let delta = move_delta(&before, &after, ai, ai.opponent());
            match best {
                Some((_, d)) if d >= delta => {}
                _ => best = Some(((r, c), delta)),
            }
        }
    }
    best.map(|(pos, _)| pos)
}

#[test]
fn test_empty_board_returns_first_cell() {
    assert_eq!(choose_move(&Board::new(), Marker::O, Marker::X), Some((0, 0)));
}

#[test]
fn test_full_board_returns_none() {
    let mut board = Board::new();
    for r in 0..BOARD_ROWS {
        for c in 0..BOARD_COLS {
            board.place(r, c, if r % 2 == 0 { Marker::X } else { Marker::O });
        }
    }
    assert!(board.is_full());
    assert_eq!(choose_move(&board, Marker::X, Marker::O), None);
}

#[test]
fn test_single_empty_cell_is_chosen() {
    let mut board = Board::new();
    for r in 0..BOARD_ROWS {
        for c in 0..BOARD_COLS {
            if (r, c) != (7, 3) {
                board.place(r, c, if (r * 3 + c) % 2 == 0 { Marker::X } else { Marker::O });
            }
        }
    }
    assert_eq!(choose_move(&board, Marker::O, Marker::X), Some((7, 3)));
}

#[test]
fn test_tied_candidates_resolve_in_row_major_order() {
    // Two separate pairs, each completable at two cells for +1.
    // The earliest of the four tied cells is (1, 5).
    let mut board = Board::new();
    board.place(6, 1, Marker::O);
    board.place(6, 2, Marker::O);
    board.place(2, 5, Marker::O);
    board.place(3, 5, Marker::O);
    assert_eq!(choose_move(&board, Marker::O, Marker::X), Some((1, 5)));
}

#[test]
fn test_matches_reference_search_on_random_boards() {
    for seed in 0..20 {
        let board = scattered_board(seed, 40);
        for ai in Marker::ALL {
            assert_eq!(
                choose_move(&board, ai, ai.opponent()),
                brute_force_best(&board, ai),
                "seed {seed}, advisor {ai:?}"
            );
        }
    }
}

#[test]
fn test_choice_never_changes_opponent_score() {
    for seed in 100..110 {
        let board = scattered_board(seed, 50);
        let before = calculate_scores(&board);
        let (r, c) = choose_move(&board, Marker::O, Marker::X).expect("board has empty cells");
        let after = calculate_scores(&board.with_placed(r, c, Marker::O));
        assert_eq!(after.x, before.x);
    }
}

#[test]
fn test_board_left_untouched() {
    let board = scattered_board(5, 30);
    let copy = board;
    let _ = choose_move(&board, Marker::X, Marker::O);
    assert_eq!(board, copy);
}
