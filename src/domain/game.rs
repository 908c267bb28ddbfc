use crate::domain::board::BoardState;
use crate::domain::models::{Move, MoveError, Player};
use crate::domain::rules::Rules;

/// The game aggregate: owns the board and drives the turn transition.
pub struct Game {
    board: BoardState,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: BoardState::new(),
        }
    }

    /// Replaces the whole state, e.g. after a load.
    pub fn from_board(board: BoardState) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.board.turn
    }

    pub fn winner(&self) -> Option<Player> {
        Rules::check_win(&self.board)
    }

    /// Applies one move; the turn flips unconditionally after a success
    /// and stays put after a rejection.
    pub fn play_turn(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.winner().is_some() {
            return Err(MoveError::GameOver);
        }
        Rules::attempt_move(&mut self.board, mv)?;
        self.board.turn = self.board.turn.opponent();
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::square::Square;

    fn mv(from: &str, to: &str) -> Move {
        Move::new(
            Square::parse_coord(from).unwrap(),
            Square::parse_coord(to).unwrap(),
        )
    }

    #[test]
    fn successful_move_flips_the_turn() {
        let mut game = Game::new();
        assert_eq!(game.turn(), Player::Red);
        game.play_turn(mv("b3", "a4")).unwrap();
        assert_eq!(game.turn(), Player::Black);
    }

    #[test]
    fn rejected_move_keeps_the_turn() {
        let mut game = Game::new();
        let result = game.play_turn(mv("a6", "b5"));
        assert_eq!(result, Err(MoveError::NotYourPiece));
        assert_eq!(game.turn(), Player::Red);
    }
}
