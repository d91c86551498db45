//! Board geometry: 8x8 grid addressed by (row, col)

use crate::ruleset::MAX_HOME_ROWS;
use serde::{Deserialize, Serialize};

/// Number of rows and columns
pub const BOARD_SIZE: i8 = 8;

/// Diagonal step vectors (drow, dcol)
pub const DIAGONALS: [(i8, i8); 4] = [
    (1, 1),   // down-right
    (-1, -1), // up-left
    (-1, 1),  // up-right
    (1, -1),  // down-left
];

/// Board coordinates. Signed so that off-board values coming from
/// user input or diagonal arithmetic can be represented and rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Check if this coordinate is on the board
    pub fn is_valid(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Coordinate one step along (drow, dcol)
    /// Wraps on overflow; the result is still rejected by `is_valid`.
    pub fn offset(&self, drow: i8, dcol: i8) -> Coord {
        Coord::new(self.row.wrapping_add(drow), self.col.wrapping_add(dcol))
    }

    /// Continue the line `from -> self` one more step.
    pub fn beyond(&self, from: Coord) -> Coord {
        self.offset(self.row.wrapping_sub(from.row), self.col.wrapping_sub(from.col))
    }

    fn index(&self) -> Option<(usize, usize)> {
        self.is_valid()
            .then(|| (self.row as usize, self.col as usize))
    }
}

/// Piece color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::Red,
            Color::Red => Color::Black,
        }
    }

    /// Column delta a man of this color is allowed to step by
    pub fn forward(self) -> i8 {
        match self {
            Color::Black => 1,
            Color::Red => -1,
        }
    }

    /// Row on which a man of this color is crowned
    pub fn crowning_row(self) -> i8 {
        match self {
            Color::Black => BOARD_SIZE - 1,
            Color::Red => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::Red => "Red",
        }
    }
}

/// A piece on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub king: bool,
}

impl Piece {
    pub const fn man(color: Color) -> Self {
        Self { color, king: false }
    }

    pub const fn king(color: Color) -> Self {
        Self { color, king: true }
    }
}

/// Contents of a square. `None` is an empty square, which never carries a king flag.
pub type Cell = Option<Piece>;

/// The 8x8 grid
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Board with no pieces
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Starting layout: Black fills the first `home_rows` rows, Red the last
    /// `home_rows`, both on squares where row + col is odd. `home_rows` is
    /// clamped to `1..=MAX_HOME_ROWS` so the armies never overlap.
    pub fn standard(home_rows: u8) -> Self {
        let home_rows = home_rows.clamp(1, MAX_HOME_ROWS) as i8;
        let mut board = Self::empty();
        for row in 0..BOARD_SIZE {
            let color = if row < home_rows {
                Color::Black
            } else if row >= BOARD_SIZE - home_rows {
                Color::Red
            } else {
                continue;
            };
            for col in (0..BOARD_SIZE).filter(|col| (row + col) % 2 == 1) {
                board.cells[row as usize][col as usize] = Some(Piece::man(color));
            }
        }
        board
    }

    /// Contents of a square, or `None` when the coordinate is off the board
    pub fn get(&self, at: Coord) -> Option<Cell> {
        at.index().map(|(r, c)| self.cells[r][c])
    }

    /// Piece at a square; empty and off-board squares both yield `None`
    pub fn piece(&self, at: Coord) -> Option<Piece> {
        self.get(at).flatten()
    }

    pub fn is_empty(&self, at: Coord) -> bool {
        self.get(at) == Some(None)
    }

    /// Replace the contents of a square, returning what was there.
    /// Returns `None` when the coordinate is off the board.
    pub fn set(&mut self, at: Coord, cell: Cell) -> Option<Cell> {
        let (r, c) = at.index()?;
        Some(std::mem::replace(&mut self.cells[r][c], cell))
    }

    /// Place a piece (builder-style, for setting up positions)
    pub fn with(mut self, at: Coord, piece: Piece) -> Self {
        debug_assert!(at.is_valid(), "{:?} is off the board", at);
        self.set(at, Some(piece));
        self
    }

    /// Iterate occupied squares in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().filter_map(move |(c, cell)| {
                cell.map(|piece| (Coord::new(r as i8, c as i8), piece))
            })
        })
    }

    /// Number of pieces of a color
    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color == color).count()
    }

    /// Rows of cells, top row first
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE as usize]> {
        self.cells.iter()
    }

    /// Crown every man of `color` standing on its crowning row.
    /// Returns the squares that were promoted.
    pub(crate) fn crown(&mut self, color: Color) -> Vec<Coord> {
        let row = color.crowning_row() as usize;
        let mut crowned = Vec::new();
        for (col, cell) in self.cells[row].iter_mut().enumerate() {
            if let Some(piece) = cell {
                if piece.color == color && !piece.king {
                    piece.king = true;
                    crowned.push(Coord::new(row as i8, col as i8));
                }
            }
        }
        crowned
    }
}
