use crate::config::AppConfig;
use crate::domain::game::Game;
use crate::domain::models::{Move, MoveError, Player};
use crate::domain::rules::{MoveList, Rules};
use crate::domain::square::Square;
use crate::infrastructure::display::render_board;
use crate::infrastructure::persistence::{self, PersistenceError};
use std::path::Path;
use tracing::info;

/// Orchestrates one game session: coordinate parsing, rules, rendering
/// and persistence, behind a surface the console loop can drive.
pub struct GameService {
    game: Game,
    config: AppConfig,
}

impl GameService {
    pub fn new(config: AppConfig) -> Self {
        Self {
            game: Game::new(),
            config,
        }
    }

    pub fn new_game(&mut self) {
        self.game = Game::new();
        info!("new game started");
    }

    pub fn turn(&self) -> Player {
        self.game.turn()
    }

    pub fn winner(&self) -> Option<Player> {
        self.game.winner()
    }

    pub fn default_save_file(&self) -> &str {
        &self.config.save.default_file
    }

    /// Parses two coordinate tokens and plays the move.
    pub fn make_move(&mut self, from: &str, to: &str) -> Result<(), MoveError> {
        let from = Square::parse_coord(from)?;
        let to = Square::parse_coord(to)?;
        self.game.play_turn(Move::new(from, to))
    }

    /// Capturing moves open to the side to move, for prompting.
    pub fn forced_captures(&self) -> MoveList {
        Rules::available_captures(self.game.board())
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        persistence::save_game(self.game.board(), path)
    }

    /// The current game survives a failed load untouched.
    pub fn load(&mut self, path: &Path) -> Result<(), PersistenceError> {
        let board = persistence::load_game(path)?;
        self.game = Game::from_board(board);
        Ok(())
    }

    pub fn render(&self) -> String {
        render_board(self.game.board(), self.config.display.color)
    }
}
