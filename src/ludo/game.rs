use log::{debug, info};

use crate::ludo::{Board, Cell, Die, GameError, GameOutcome, Move, Player, RandomDie, Roll, Seat};

/// What the player on turn did with the roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Entered { piece: usize, cell: Cell },
    Moved(Move),
    Passed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub turn: u32,
    pub seat: Seat,
    pub roll: Roll,
    pub action: Action,
    pub outcome: GameOutcome,
}

/// One match: the four players, the die and whose turn it is.
pub struct Game<D: Die = RandomDie> {
    players: [Player; Seat::COUNT],
    die: D,
    current: Seat,
    turn: u32,
    winner: Option<Seat>,
}

impl Game<RandomDie> {
    pub fn new() -> Self {
        Game::with_die(RandomDie::from_entropy())
    }
}

impl Default for Game<RandomDie> {
    fn default() -> Self {
        Game::new()
    }
}

impl<D: Die> Game<D> {
    /// Opening position, every piece at home, player 1 to roll.
    pub fn with_die(die: D) -> Self {
        Game {
            players: Seat::ALL.map(Player::new),
            die,
            current: Seat::One,
            turn: 0,
            winner: None,
        }
    }

    /// Starts from a prepared table. The players must be seated 1 to 4 in order.
    pub fn from_players(players: Vec<Player>, die: D) -> Result<Self, GameError> {
        if players.len() != Seat::COUNT {
            return Err(GameError::WrongPlayerCount {
                expected: Seat::COUNT,
                actual: players.len(),
            });
        }
        if let Some((position, player)) = players
            .iter()
            .enumerate()
            .find(|(position, player)| player.seat().index() != *position)
        {
            return Err(GameError::SeatOutOfOrder { position, seat: player.seat() });
        }
        let players: [Player; Seat::COUNT] = players.try_into().map_err(|players: Vec<Player>| {
            GameError::WrongPlayerCount {
                expected: Seat::COUNT,
                actual: players.len(),
            }
        })?;
        Ok(Game {
            players,
            die,
            current: Seat::One,
            turn: 0,
            winner: None,
        })
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Number of turns played so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn players(&self) -> &[Player; Seat::COUNT] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn outcome(&self) -> GameOutcome {
        match self.winner {
            Some(seat) => GameOutcome::Win(seat),
            None => GameOutcome::Ongoing,
        }
    }

    pub fn board(&self) -> Board {
        Board::project(&self.players)
    }

    /// Rolls the die for the player on turn and plays the roll.
    pub fn play_turn(&mut self) -> Result<TurnReport, GameError> {
        if let Some(seat) = self.winner {
            return Err(GameError::GameOver(seat));
        }
        let roll = self.die.roll();
        self.apply_roll(roll)
    }

    /// Plays `roll` for the player on turn: a six brings a piece out of home
    /// when there is one, otherwise the first piece in play moves. With
    /// neither the turn passes. The turn then goes to the next seat unless
    /// the player has won.
    pub fn apply_roll(&mut self, roll: Roll) -> Result<TurnReport, GameError> {
        if let Some(seat) = self.winner {
            return Err(GameError::GameOver(seat));
        }

        let seat = self.current;
        self.turn += 1;
        let action = self.resolve(seat, roll);
        debug!("turn {}: {seat} rolled {roll}, {action:?}", self.turn);

        let outcome = if self.players[seat.index()].has_won() {
            info!("{seat} wins after {} turns", self.turn);
            self.winner = Some(seat);
            GameOutcome::Win(seat)
        } else {
            self.current = seat.next();
            GameOutcome::Ongoing
        };

        Ok(TurnReport {
            turn: self.turn,
            seat,
            roll,
            action,
            outcome,
        })
    }

    fn resolve(&mut self, seat: Seat, roll: Roll) -> Action {
        let (mover, opponents) = split_seat(&mut self.players, seat);

        if roll.is_six() && mover.has_pieces_in_home() {
            match mover.move_piece_from_home() {
                Some((piece, cell)) => Action::Entered { piece, cell },
                None => Action::Passed,
            }
        } else if mover.has_pieces_on_board() {
            match mover.move_piece(roll, opponents) {
                Some(mv) => {
                    for capture in mv.captures.iter() {
                        info!(
                            "{seat} captured {} piece {} at {}",
                            capture.seat, capture.piece, capture.cell
                        );
                    }
                    Action::Moved(mv)
                }
                None => Action::Passed,
            }
        } else {
            Action::Passed
        }
    }
}

/// The player on `seat` and, separately, everybody else.
fn split_seat(
    players: &mut [Player],
    seat: Seat,
) -> (&mut Player, impl Iterator<Item = &mut Player>) {
    let (before, rest) = players.split_at_mut(seat.index());
    let (mover, after) = rest.split_first_mut().expect("every seat has a player");
    (mover, before.iter_mut().chain(after.iter_mut()))
}
