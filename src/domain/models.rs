use crate::domain::square::Square;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Black,
}

impl Player {
    pub fn opponent(&self) -> Self {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    /// Red advances toward row 7, Black toward row 0.
    pub fn forward_sign(&self) -> i8 {
        match self {
            Player::Red => 1,
            Player::Black => -1,
        }
    }

    /// The far row where this side's men are crowned.
    pub fn crowning_row(&self) -> u8 {
        match self {
            Player::Red => 7,
            Player::Black => 0,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// One variant per legality check, so callers can react to the kind of
/// failure without parsing text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("not your piece")]
    NotYourPiece,

    #[error("destination occupied")]
    DestinationOccupied,

    #[error("you must capture when a capture is available")]
    MustCapture,

    #[error("men only move forward")]
    WrongDirection,

    #[error("move does not follow a diagonal")]
    InvalidPath,

    #[error("no opponent piece to capture")]
    NoOpponentToCapture,

    #[error("invalid move distance")]
    InvalidDistance,

    #[error("game is already over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_toggles() {
        assert_eq!(Player::Red.opponent(), Player::Black);
        assert_eq!(Player::Black.opponent(), Player::Red);
    }

    #[test]
    fn forward_signs_point_at_the_far_row() {
        assert_eq!(Player::Red.forward_sign(), 1);
        assert_eq!(Player::Black.forward_sign(), -1);
        assert_eq!(Player::Red.crowning_row(), 7);
        assert_eq!(Player::Black.crowning_row(), 0);
    }
}
