use std::fmt::Display;

use crate::ludo::{Board, GameError};

/// A square of the board. Coordinates are always inside the grid: `x` is the
/// row (top to bottom) and `y` the column (left to right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    x: u8,
    y: u8,
}

impl Cell {
    /// Panics if the coordinates are off the board. Use [`Self::try_new`] for
    /// coordinates that come from outside the crate.
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < Board::SIZE && y < Board::SIZE, "cell outside the board");
        Cell { x, y }
    }

    pub fn try_new(x: u8, y: u8) -> Result<Self, GameError> {
        if x < Board::SIZE && y < Board::SIZE {
            Ok(Cell { x, y })
        } else {
            Err(GameError::CellOutOfRange { x, y, size: Board::SIZE })
        }
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    /// Every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..Board::SIZE).flat_map(|x| (0..Board::SIZE).map(move |y| Cell { x, y }))
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Where a piece is. A piece is in exactly one of these states, and only the
/// board states carry a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Home,
    Board(Cell),
    Finished(Cell),
}

impl Position {
    /// The cell the piece is drawn on, if any. Finished pieces stay visible.
    pub fn cell(&self) -> Option<Cell> {
        match self {
            Position::Home => None,
            Position::Board(cell) | Position::Finished(cell) => Some(*cell),
        }
    }
}
