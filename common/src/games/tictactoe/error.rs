use super::types::{CELL_COUNT, Mark};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfRange { index: usize },
    Occupied { index: usize },
    EmptyMark,
    NotYourTurn { mark: Mark },
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameError {
    InvalidMove(InvalidMoveReason),
    NoLegalMove,
}

impl std::fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMoveReason::OutOfRange { index } => {
                write!(f, "cell {} is outside 0..{}", index, CELL_COUNT)
            }
            InvalidMoveReason::Occupied { index } => write!(f, "cell {} is already marked", index),
            InvalidMoveReason::EmptyMark => write!(f, "cannot place an empty mark"),
            InvalidMoveReason::NotYourTurn { mark } => write!(f, "it is not {}'s turn", mark),
            InvalidMoveReason::GameOver => write!(f, "game is already over"),
        }
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidMove(reason) => write!(f, "Invalid move: {}", reason),
            GameError::NoLegalMove => write!(f, "No legal move available"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<InvalidMoveReason> for GameError {
    fn from(reason: InvalidMoveReason) -> Self {
        GameError::InvalidMove(reason)
    }
}
