//! Board, marker and segment data structures.
//!
//! 10x10 grid, two markers, segments of length 3 or 4.

use crate::constants::{
    BOARD_COLS, BOARD_ROWS, LONG_SEGMENT_LEN, LONG_SEGMENT_POINTS, SHORT_SEGMENT_POINTS,
};
use serde::{Deserialize, Serialize};

/// A player's piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    pub const ALL: [Marker; 2] = [Marker::X, Marker::O];

    pub fn opponent(&self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Marker::X => "X",
            Marker::O => "O",
        }
    }

    /// Parse a marker from user input ("x", "O", ...).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "x" | "X" => Some(Marker::X),
            "o" | "O" => Some(Marker::O),
            _ => None,
        }
    }
}

/// Line directions as (row_delta, col_delta).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDown,
    DiagonalUp,
}

impl Direction {
    /// Scan order used by the segment finder.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            // Walks down-left; as a line it rises to the right
            Direction::DiagonalUp => (1, -1),
        }
    }
}

/// 10x10 grid, None = empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Marker>; BOARD_COLS]; BOARD_ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[None; BOARD_COLS]; BOARD_ROWS],
        }
    }

    /// Cell contents; out-of-range coordinates read as empty.
    pub fn get(&self, row: usize, col: usize) -> Option<Marker> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Cell contents at a signed coordinate, None when off the board.
    pub(crate) fn get_signed(&self, row: i32, col: i32) -> Option<Marker> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < BOARD_ROWS && col < BOARD_COLS
    }

    pub fn is_empty_cell(&self, row: usize, col: usize) -> bool {
        Self::in_bounds(row, col) && self.cells[row][col].is_none()
    }

    /// Write a marker into an empty cell. Returns false (and leaves the
    /// board untouched) when the cell is occupied or off the board.
    pub fn place(&mut self, row: usize, col: usize, marker: Marker) -> bool {
        if !self.is_empty_cell(row, col) {
            return false;
        }
        self.cells[row][col] = Some(marker);
        true
    }

    /// Copy of this board with one more marker placed.
    pub fn with_placed(&self, row: usize, col: usize, marker: Marker) -> Self {
        let mut next = *self;
        next.place(row, col, marker);
        next
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_some())
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        Self::positions()
            .filter(move |&(r, c)| self.cells[r][c].is_none())
    }

    /// Cells holding `marker`, in row-major order.
    pub fn cells_of(&self, marker: Marker) -> impl Iterator<Item = (usize, usize)> + '_ {
        Self::positions()
            .filter(move |&(r, c)| self.cells[r][c] == Some(marker))
    }

    pub fn count(&self, marker: Marker) -> usize {
        self.cells_of(marker).count()
    }

    fn positions() -> impl Iterator<Item = (usize, usize)> {
        (0..BOARD_ROWS).flat_map(|r| (0..BOARD_COLS).map(move |c| (r, c)))
    }
}

/// A scoring run of exactly 3 or 4 same-marker cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub marker: Marker,
    pub direction: Direction,
    /// Cells from the start of the run outward.
    pub cells: Vec<(usize, usize)>,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Option<(usize, usize)> {
        self.cells.first().copied()
    }

    pub fn points(&self) -> u32 {
        if self.len() == LONG_SEGMENT_LEN {
            LONG_SEGMENT_POINTS
        } else {
            SHORT_SEGMENT_POINTS
        }
    }
}

/// Per-marker score pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub x: u32,
    pub o: u32,
}

impl Scores {
    pub fn get(&self, marker: Marker) -> u32 {
        match marker {
            Marker::X => self.x,
            Marker::O => self.o,
        }
    }

    pub(crate) fn add(&mut self, marker: Marker, points: u32) {
        match marker {
            Marker::X => self.x += points,
            Marker::O => self.o += points,
        }
    }

    /// Marker with the strictly higher score, None on a tie.
    pub fn leader(&self) -> Option<Marker> {
        match self.x.cmp(&self.o) {
            std::cmp::Ordering::Greater => Some(Marker::X),
            std::cmp::Ordering::Less => Some(Marker::O),
            std::cmp::Ordering::Equal => None,
        }
    }
}
