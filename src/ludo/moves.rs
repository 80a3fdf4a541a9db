use std::fmt::Debug;

use crate::ludo::{Cell, Seat};

/// An opposing piece sent home by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    pub seat: Seat,
    pub piece: usize,
    pub cell: Cell,
}

/// One piece advanced by one roll, and what it knocked out.
#[derive(Clone, PartialEq, Eq)]
pub struct Move {
    pub piece: usize,
    pub from: Cell,
    pub to: Cell,
    pub finished: bool,
    pub captures: Vec<Capture>,
}

impl Debug for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move: piece {} {} -> {}", self.piece, self.from, self.to)?;
        if self.finished {
            write!(f, ", finished")?;
        }
        for capture in self.captures.iter() {
            write!(f, ", captures {} piece {}", capture.seat, capture.piece)?;
        }
        Ok(())
    }
}
