use log::debug;

use crate::ludo::{Capture, Cell, GameError, Move, Piece, Roll, Seat};

/// A seat and its four pieces. Pieces keep their order, and every action
/// picks the first piece that qualifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    seat: Seat,
    pieces: [Piece; Player::PIECES],
}

impl Player {
    pub const PIECES: usize = 4;

    pub fn new(seat: Seat) -> Self {
        Player {
            seat,
            pieces: [Piece::new(seat); Player::PIECES],
        }
    }

    /// Builds a player from an arbitrary set-up. Exactly four pieces, all
    /// belonging to `seat`.
    pub fn from_pieces(seat: Seat, pieces: Vec<Piece>) -> Result<Self, GameError> {
        if let Some(piece) = pieces.iter().find(|piece| piece.seat() != seat) {
            return Err(GameError::ForeignPiece { seat, owner: piece.seat() });
        }
        let actual = pieces.len();
        let pieces: [Piece; Player::PIECES] =
            pieces.try_into().map_err(|_| GameError::WrongPieceCount {
                seat,
                expected: Player::PIECES,
                actual,
            })?;
        Ok(Player { seat, pieces })
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn pieces(&self) -> &[Piece; Player::PIECES] {
        &self.pieces
    }

    pub fn has_pieces_in_home(&self) -> bool {
        self.pieces.iter().any(|piece| piece.is_in_home())
    }

    pub fn has_pieces_on_board(&self) -> bool {
        self.pieces.iter().any(|piece| piece.is_on_board())
    }

    pub fn has_won(&self) -> bool {
        self.pieces.iter().all(|piece| piece.has_finished())
    }

    /// Brings the first home piece onto the start corner. Returns the piece
    /// index and the corner.
    pub fn move_piece_from_home(&mut self) -> Option<(usize, Cell)> {
        let index = self.pieces.iter().position(|piece| piece.is_in_home())?;
        self.pieces[index].enter_field();
        Some((index, self.seat.start_corner()))
    }

    /// Advances the first piece in play by `roll`. Unless the piece finished,
    /// every opposing piece on the landing cell is sent home.
    pub fn move_piece<'a>(
        &mut self,
        roll: Roll,
        opponents: impl IntoIterator<Item = &'a mut Player>,
    ) -> Option<Move> {
        let index = self.pieces.iter().position(|piece| piece.is_on_board())?;
        let landing = self.pieces[index].advance(roll)?;

        let seat = self.seat;
        let captures = if landing.finished {
            Vec::new()
        } else {
            opponents
                .into_iter()
                .filter(|opponent| opponent.seat != seat)
                .flat_map(|opponent| opponent.send_home_at(landing.to))
                .collect()
        };

        Some(Move {
            piece: index,
            from: landing.from,
            to: landing.to,
            finished: landing.finished,
            captures,
        })
    }

    /// Sends every one of this player's pieces in play on `cell` back home.
    pub fn send_home_at(&mut self, cell: Cell) -> Vec<Capture> {
        let seat = self.seat;
        self.pieces
            .iter_mut()
            .enumerate()
            .filter(|(_, piece)| piece.is_on_board() && piece.cell() == Some(cell))
            .filter_map(|(index, piece)| {
                piece.send_home().then(|| {
                    debug!("{seat} piece {index} sent home from {cell}");
                    Capture { seat, piece: index, cell }
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ludo::Board;

    fn roll(value: u8) -> Roll {
        Roll::new(value).unwrap()
    }

    #[test]
    fn test_new_player_is_all_home() {
        let player = Player::new(Seat::Three);
        assert!(player.has_pieces_in_home());
        assert!(!player.has_pieces_on_board());
        assert!(!player.has_won());
        assert!(player.pieces().iter().all(|piece| piece.seat() == Seat::Three));
    }

    #[test]
    fn test_from_pieces_validation() {
        let three = vec![Piece::new(Seat::One); 3];
        assert!(matches!(
            Player::from_pieces(Seat::One, three),
            Err(GameError::WrongPieceCount { expected: 4, actual: 3, .. })
        ));

        let five = vec![Piece::new(Seat::One); 5];
        assert!(matches!(
            Player::from_pieces(Seat::One, five),
            Err(GameError::WrongPieceCount { actual: 5, .. })
        ));

        let mixed = vec![Piece::new(Seat::One), Piece::new(Seat::Two), Piece::new(Seat::One), Piece::new(Seat::One)];
        assert!(matches!(
            Player::from_pieces(Seat::One, mixed),
            Err(GameError::ForeignPiece { seat: Seat::One, owner: Seat::Two })
        ));
    }

    #[test]
    fn test_enter_in_order() {
        let mut player = Player::new(Seat::Four);
        for expected in 0..Player::PIECES {
            assert_eq!(player.move_piece_from_home(), Some((expected, Cell::new(9, 9))));
        }
        assert_eq!(player.move_piece_from_home(), None);
        assert!(!player.has_pieces_in_home());
        assert!(player.has_pieces_on_board());
    }

    #[test]
    fn test_move_picks_first_piece_in_play() {
        let pieces = vec![
            Piece::finished(Seat::One),
            Piece::new(Seat::One),
            Piece::on_board(Seat::One, Cell::new(0, 2)),
            Piece::on_board(Seat::One, Cell::new(0, 5)),
        ];
        let mut player = Player::from_pieces(Seat::One, pieces).unwrap();
        let mv = player.move_piece(roll(2), Vec::<&mut Player>::new()).unwrap();
        assert_eq!(mv.piece, 2);
        assert_eq!(mv.to, Cell::new(0, 4));
        assert_eq!(player.pieces()[3].cell(), Some(Cell::new(0, 5)));
    }

    #[test]
    fn test_move_without_pieces_in_play() {
        let mut player = Player::new(Seat::Two);
        assert_eq!(player.move_piece(Roll::SIX, Vec::<&mut Player>::new()), None);
        assert_eq!(player, Player::new(Seat::Two));
    }

    #[test]
    fn test_capture_sends_all_opponents_home() {
        let target = Cell::new(0, 3);
        let mut mover = Player::from_pieces(
            Seat::One,
            vec![
                Piece::on_board(Seat::One, Cell::new(0, 1)),
                Piece::on_board(Seat::One, target),
                Piece::new(Seat::One),
                Piece::new(Seat::One),
            ],
        )
        .unwrap();
        let mut three = Player::from_pieces(
            Seat::Three,
            vec![
                Piece::on_board(Seat::Three, target),
                Piece::on_board(Seat::Three, Cell::new(0, 4)),
                Piece::on_board(Seat::Three, target),
                Piece::new(Seat::Three),
            ],
        )
        .unwrap();
        let mut four = Player::from_pieces(
            Seat::Four,
            vec![
                Piece::new(Seat::Four),
                Piece::on_board(Seat::Four, target),
                Piece::new(Seat::Four),
                Piece::new(Seat::Four),
            ],
        )
        .unwrap();

        let mv = mover.move_piece(roll(2), [&mut three, &mut four]).unwrap();
        assert_eq!(mv.to, target);
        assert_eq!(
            mv.captures,
            vec![
                Capture { seat: Seat::Three, piece: 0, cell: target },
                Capture { seat: Seat::Three, piece: 2, cell: target },
                Capture { seat: Seat::Four, piece: 1, cell: target },
            ]
        );

        // same seat shares the cell untouched
        assert_eq!(mover.pieces()[0].cell(), Some(target));
        assert_eq!(mover.pieces()[1].cell(), Some(target));

        assert!(three.pieces()[0].is_in_home());
        assert!(three.pieces()[2].is_in_home());
        assert_eq!(three.pieces()[1].cell(), Some(Cell::new(0, 4)));
        assert!(four.pieces()[1].is_in_home());
    }

    #[test]
    fn test_own_seat_in_opponents_is_ignored() {
        let target = Cell::new(0, 2);
        let mut mover = Player::from_pieces(
            Seat::Two,
            vec![
                Piece::on_board(Seat::Two, Cell::new(0, 0)),
                Piece::new(Seat::Two),
                Piece::new(Seat::Two),
                Piece::new(Seat::Two),
            ],
        )
        .unwrap();
        let mut twin = Player::from_pieces(
            Seat::Two,
            vec![
                Piece::on_board(Seat::Two, target),
                Piece::new(Seat::Two),
                Piece::new(Seat::Two),
                Piece::new(Seat::Two),
            ],
        )
        .unwrap();
        let mv = mover.move_piece(roll(2), [&mut twin]).unwrap();
        assert!(mv.captures.is_empty());
        assert_eq!(twin.pieces()[0].cell(), Some(target));
    }

    #[test]
    fn test_finishing_move_captures_nothing() {
        let mut mover = Player::from_pieces(
            Seat::One,
            vec![
                Piece::on_board(Seat::One, Board::CENTER),
                Piece::new(Seat::One),
                Piece::new(Seat::One),
                Piece::new(Seat::One),
            ],
        )
        .unwrap();
        let mut other = Player::new(Seat::Two);
        let mv = mover.move_piece(roll(1), [&mut other]).unwrap();
        assert!(mv.finished);
        assert!(mv.captures.is_empty());
        assert!(mover.pieces()[0].has_finished());
    }

    #[test]
    fn test_has_won_needs_all_four() {
        let mut pieces = vec![Piece::finished(Seat::Three); 3];
        pieces.push(Piece::on_board(Seat::Three, Cell::new(9, 4)));
        let almost = Player::from_pieces(Seat::Three, pieces).unwrap();
        assert!(!almost.has_won());

        let done = Player::from_pieces(Seat::Three, vec![Piece::finished(Seat::Three); 4]).unwrap();
        assert!(done.has_won());
        assert!(!done.has_pieces_in_home());
        assert!(!done.has_pieces_on_board());
    }
}
