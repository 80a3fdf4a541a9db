pub mod board;
pub use board::{Board, Path, StepRule};

mod position;
pub use position::{Cell, Position};

mod seat;
pub use seat::Seat;

mod piece;
pub use piece::{Landing, Piece};

mod player;
pub use player::Player;

mod moves;
pub use moves::{Capture, Move};

mod outcome;
pub use outcome::GameOutcome;

mod game;
pub use game::{Action, Game, TurnReport};

mod dice;
pub use dice::{Die, LoadedDie, RandomDie, Roll};

mod error;
pub use error::GameError;
