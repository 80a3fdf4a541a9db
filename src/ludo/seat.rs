use std::fmt::Display;

use crate::ludo::{Board, Cell};

/// One of the four players at the table. The seat fixes the start corner and
/// the marker drawn on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Seat {
    One,
    Two,
    Three,
    Four,
}

impl Seat {
    pub const COUNT: usize = 4;

    pub const ALL: [Seat; Seat::COUNT] = [Seat::One, Seat::Two, Seat::Three, Seat::Four];

    pub const fn index(&self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
            Seat::Three => 2,
            Seat::Four => 3,
        }
    }

    /// The seat that plays after this one.
    pub fn next(&self) -> Seat {
        Seat::ALL[(self.index() + 1) % Seat::COUNT]
    }

    pub fn marker(&self) -> char {
        (b'1' + self.index() as u8) as char
    }

    pub const fn start_corner(&self) -> Cell {
        const LAST: u8 = Board::SIZE - 1;
        match self {
            Seat::One => Cell::new(0, 0),
            Seat::Two => Cell::new(0, LAST),
            Seat::Three => Cell::new(LAST, 0),
            Seat::Four => Cell::new(LAST, LAST),
        }
    }
}

impl Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}
