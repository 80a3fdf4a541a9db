use crate::ludo::Seat;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("cell ({x}, {y}) is outside the {size}x{size} board")]
    CellOutOfRange { x: u8, y: u8, size: u8 },
    #[error("a die cannot show {0}")]
    InvalidRoll(u8),
    #[error("a loaded die needs at least one roll")]
    EmptyRollScript,
    #[error("{seat} must own exactly {expected} pieces, got {actual}")]
    WrongPieceCount { seat: Seat, expected: usize, actual: usize },
    #[error("a piece of {owner} was handed to {seat}")]
    ForeignPiece { seat: Seat, owner: Seat },
    #[error("a game needs exactly {expected} players, got {actual}")]
    WrongPlayerCount { expected: usize, actual: usize },
    #[error("{seat} is sitting at table position {position}")]
    SeatOutOfOrder { position: usize, seat: Seat },
    #[error("the game is over, {0} has already won")]
    GameOver(Seat),
    #[error("input closed before the game ended")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
