use std::io::{BufRead, Write};

use log::debug;

use crate::ludo::{Die, Game, GameError, Seat};

/// Clears the terminal and puts the cursor top left.
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// The interactive loop: show the board, wait for Enter, roll, report.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session { input, output }
    }

    /// Plays `game` until somebody wins and returns the winner. Running out of
    /// input ends the session with [`GameError::InputClosed`].
    pub fn play<D: Die>(&mut self, game: &mut Game<D>) -> Result<Seat, GameError> {
        if let Some(seat) = game.outcome().winner() {
            return Err(GameError::GameOver(seat));
        }

        loop {
            let seat = game.current_seat();
            write!(self.output, "{CLEAR_SCREEN}{}", game.board())?;
            writeln!(self.output, "{seat}'s turn. Press Enter to roll the dice.")?;
            self.output.flush()?;

            self.wait_for_enter()?;

            let report = game.play_turn()?;
            writeln!(self.output, "{seat} rolled a {}.", report.roll)?;

            if report.outcome.is_over() {
                writeln!(self.output, "{seat} wins!")?;
                self.output.flush()?;
                return Ok(seat);
            }
        }
    }

    fn wait_for_enter(&mut self) -> Result<(), GameError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input closed");
            return Err(GameError::InputClosed);
        }
        Ok(())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
