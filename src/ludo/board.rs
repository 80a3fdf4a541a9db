use std::fmt::Display;

use hashbrown::HashSet;

use crate::ludo::{Cell, Player, Seat};

const SIZE: u8 = 10;

/// Text projection of the table: one marker per cell, `'.'` when empty.
/// The grid is recomputed from piece positions and never written to by moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[char; SIZE as usize]; SIZE as usize],
}

impl Board {
    pub const SIZE: u8 = SIZE;

    pub const HALF: u8 = Board::SIZE / 2;

    /// Reaching this cell finishes a piece, whatever its seat.
    pub const CENTER: Cell = Cell::new(4, 4);

    pub const EMPTY: char = '.';

    pub fn empty() -> Self {
        Board {
            cells: [[Board::EMPTY; SIZE as usize]; SIZE as usize],
        }
    }

    /// Draws every piece that is on the board or finished. Players are drawn in
    /// seat order, so when pieces of different seats share a cell the later seat
    /// is the one shown.
    pub fn project(players: &[Player]) -> Self {
        let mut board = Board::empty();
        for player in players {
            let marker = player.seat().marker();
            for cell in player.pieces().iter().filter_map(|piece| piece.cell()) {
                board.cells[cell.x() as usize][cell.y() as usize] = marker;
            }
        }
        board
    }

    pub fn marker(&self, cell: Cell) -> char {
        self.cells[cell.x() as usize][cell.y() as usize]
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.iter() {
            for marker in row {
                write!(f, "{marker} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The rule of the single-step function that applies to a cell. Rules are
/// tried in declaration order and the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepRule {
    /// `x == 0 && y < W-1`: one column right.
    TopEdge,
    /// `y == W-1 && x < H-1`: one row down.
    RightEdge,
    /// `x == H-1 && y > 0`: one column left.
    BottomEdge,
    /// `y == 0 && x > 0`: one row up.
    LeftEdge,
    /// `0 < x <= H/2 && y == 0`: one row up. Shadowed by [`StepRule::LeftEdge`].
    LeftCut,
    /// `x == H/2 && y < W/2`: one column right, towards the middle.
    CenterRow,
    /// No rule matched, the piece stays put.
    Stalled,
}

impl StepRule {
    pub fn for_cell(cell: Cell) -> StepRule {
        const LAST: u8 = Board::SIZE - 1;
        let (x, y) = (cell.x(), cell.y());

        if x == 0 && y < LAST {
            StepRule::TopEdge
        } else if y == LAST && x < LAST {
            StepRule::RightEdge
        } else if x == LAST && y > 0 {
            StepRule::BottomEdge
        } else if y == 0 && x > 0 {
            StepRule::LeftEdge
        } else if x > 0 && x <= Board::HALF && y == 0 {
            StepRule::LeftCut
        } else if x == Board::HALF && y < Board::HALF {
            StepRule::CenterRow
        } else {
            StepRule::Stalled
        }
    }

    pub fn apply(self, cell: Cell) -> Cell {
        let (x, y) = (cell.x(), cell.y());
        match self {
            StepRule::TopEdge | StepRule::CenterRow => Cell::new(x, y + 1),
            StepRule::RightEdge => Cell::new(x + 1, y),
            StepRule::BottomEdge => Cell::new(x, y - 1),
            StepRule::LeftEdge | StepRule::LeftCut => Cell::new(x - 1, y),
            StepRule::Stalled => cell,
        }
    }
}

/// Moves one square along the track.
pub fn step(cell: Cell) -> Cell {
    StepRule::for_cell(cell).apply(cell)
}

/// The cells visited by repeatedly stepping from a start cell, up to (not
/// including) the first cell that repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Cell>,
    repeats_at: Cell,
}

impl Path {
    pub fn trace(start: Cell) -> Self {
        let mut seen = HashSet::new();
        let mut cells = Vec::new();
        let mut cell = start;
        while seen.insert(cell) {
            cells.push(cell);
            cell = step(cell);
        }
        Path { cells, repeats_at: cell }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// The first cell reached a second time.
    pub fn repeats_at(&self) -> Cell {
        self.repeats_at
    }

    /// True when the walk comes back to where it started.
    pub fn is_loop(&self) -> bool {
        self.cells.first() == Some(&self.repeats_at)
    }
}
