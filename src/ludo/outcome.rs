use crate::ludo::Seat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Win(Seat),
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Seat> {
        match self {
            GameOutcome::Win(seat) => Some(*seat),
            GameOutcome::Ongoing => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, GameOutcome::Win(_))
    }
}
