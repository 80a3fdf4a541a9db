use crate::ludo::{Board, Cell, Position, Roll, Seat, board::step};

/// Where a move started and ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    pub from: Cell,
    pub to: Cell,
    pub finished: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    seat: Seat,
    position: Position,
}

impl Piece {
    /// A fresh piece waiting at home.
    pub fn new(seat: Seat) -> Self {
        Piece { seat, position: Position::Home }
    }

    /// A piece already in play on `cell`. Used to set up positions.
    pub fn on_board(seat: Seat, cell: Cell) -> Self {
        Piece { seat, position: Position::Board(cell) }
    }

    /// A piece that has reached the center.
    pub fn finished(seat: Seat) -> Self {
        Piece { seat, position: Position::Finished(Board::CENTER) }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn cell(&self) -> Option<Cell> {
        self.position.cell()
    }

    pub fn is_in_home(&self) -> bool {
        self.position == Position::Home
    }

    pub fn has_finished(&self) -> bool {
        matches!(self.position, Position::Finished(_))
    }

    /// On the board and still able to move.
    pub fn is_on_board(&self) -> bool {
        matches!(self.position, Position::Board(_))
    }

    /// Puts a home piece on its seat's start corner. Returns false and leaves
    /// the piece alone if it is not at home.
    pub fn enter_field(&mut self) -> bool {
        if !self.is_in_home() {
            return false;
        }
        self.position = Position::Board(self.seat.start_corner());
        true
    }

    /// Walks the piece `roll` single steps along the track. Ending on the
    /// center finishes it. Home and finished pieces do not move.
    pub fn advance(&mut self, roll: Roll) -> Option<Landing> {
        let Position::Board(from) = self.position else {
            return None;
        };

        let mut to = from;
        for _ in 0..roll.get() {
            to = step(to);
        }

        let finished = to == Board::CENTER;
        self.position = if finished { Position::Finished(to) } else { Position::Board(to) };
        Some(Landing { from, to, finished })
    }

    /// Sends an on-board piece back home. Finished pieces stay where they are.
    pub fn send_home(&mut self) -> bool {
        if self.has_finished() {
            return false;
        }
        self.position = Position::Home;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ludo::board::Path;

    fn roll(value: u8) -> Roll {
        Roll::new(value).unwrap()
    }

    #[test]
    fn test_lifecycle() {
        let mut piece = Piece::new(Seat::Two);
        assert!(piece.is_in_home());
        assert!(!piece.is_on_board());
        assert_eq!(piece.cell(), None);
        assert_eq!(piece.advance(roll(3)), None);

        assert!(piece.enter_field());
        assert_eq!(piece.position(), Position::Board(Cell::new(0, 9)));
        assert!(!piece.enter_field());

        assert!(piece.send_home());
        assert!(piece.is_in_home());
        assert_eq!(piece.cell(), None);
    }

    #[test]
    fn test_advance_from_corner() {
        let mut piece = Piece::new(Seat::One);
        piece.enter_field();
        let landing = piece.advance(roll(3)).unwrap();
        assert_eq!(landing, Landing { from: Cell::new(0, 0), to: Cell::new(0, 3), finished: false });
        assert_eq!(piece.cell(), Some(Cell::new(0, 3)));
    }

    #[test]
    fn test_advance_turns_corners() {
        let mut piece = Piece::on_board(Seat::Two, Cell::new(0, 7));
        piece.advance(roll(4));
        assert_eq!(piece.cell(), Some(Cell::new(2, 9)));

        let mut piece = Piece::on_board(Seat::Four, Cell::new(9, 2));
        piece.advance(roll(5));
        assert_eq!(piece.cell(), Some(Cell::new(6, 0)));
    }

    #[test]
    fn test_advance_matches_single_steps() {
        for seat in Seat::ALL {
            for &start in Path::trace(seat.start_corner()).cells() {
                for r in Roll::ALL {
                    let mut piece = Piece::on_board(seat, start);
                    let mut expected = start;
                    for _ in 0..r.get() {
                        expected = step(expected);
                    }
                    let landing = piece.advance(r).unwrap();
                    assert_eq!(landing.to, expected);
                    assert!(!landing.finished);
                }
            }
        }
    }

    #[test]
    fn test_six_steps_from_corner() {
        let mut one_by_one = Piece::on_board(Seat::Three, Seat::Three.start_corner());
        for _ in 0..6 {
            one_by_one.advance(roll(1));
        }
        let mut at_once = Piece::on_board(Seat::Three, Seat::Three.start_corner());
        at_once.advance(Roll::SIX);
        assert_eq!(one_by_one, at_once);
        assert_eq!(at_once.cell(), Some(Cell::new(3, 0)));
    }

    #[test]
    fn test_center_finishes_and_stays() {
        let mut piece = Piece::on_board(Seat::One, Board::CENTER);
        let landing = piece.advance(roll(2)).unwrap();
        assert!(landing.finished);
        assert_eq!(landing.to, Board::CENTER);
        assert!(piece.has_finished());
        assert!(!piece.is_on_board());

        assert_eq!(piece.advance(Roll::SIX), None);
        assert!(!piece.send_home());
        assert!(!piece.enter_field());
        assert_eq!(piece.position(), Position::Finished(Board::CENTER));
    }

    #[test]
    fn test_stalled_cell_does_not_move() {
        let mut piece = Piece::on_board(Seat::Two, Cell::new(2, 2));
        let landing = piece.advance(roll(5)).unwrap();
        assert_eq!(landing.from, landing.to);
        assert!(!landing.finished);
        assert!(piece.is_on_board());
    }
}
