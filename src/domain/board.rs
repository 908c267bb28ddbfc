use crate::domain::bitboard::BitBoard;
use crate::domain::models::Player;
use crate::domain::square::Square;

/// Piece placement as four bitboards plus the side to move.
///
/// Invariants held by construction and by `Rules::attempt_move`:
/// red and black occupancy are disjoint, king bits imply the matching
/// piece bit, and only playable squares are ever set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardState {
    pub red_pieces: BitBoard,
    pub black_pieces: BitBoard,
    pub red_kings: BitBoard,
    pub black_kings: BitBoard,
    pub turn: Player,
}

impl BoardState {
    /// The deterministic opening layout: each side's men fill the playable
    /// squares of its three home rows, Red to move.
    pub fn new() -> Self {
        BoardState {
            red_pieces: Self::generate_start(Player::Red),
            black_pieces: Self::generate_start(Player::Black),
            red_kings: BitBoard::EMPTY,
            black_kings: BitBoard::EMPTY,
            turn: Player::Red,
        }
    }

    pub fn generate_start(player: Player) -> BitBoard {
        let mut board = BitBoard::EMPTY;
        for index in 0..64u8 {
            let square = Square::new(index).expect("index below 64");
            if !square.is_playable() {
                continue;
            }
            let home = match player {
                Player::Red => square.row() < 3,
                Player::Black => square.row() > 4,
            };
            if home {
                board.set(square);
            }
        }
        board
    }

    pub fn occupied(&self, square: Square) -> bool {
        (self.red_pieces | self.black_pieces).get(square)
    }

    pub fn pieces_of(&self, player: Player) -> BitBoard {
        match player {
            Player::Red => self.red_pieces,
            Player::Black => self.black_pieces,
        }
    }

    pub fn kings_of(&self, player: Player) -> BitBoard {
        match player {
            Player::Red => self.red_kings,
            Player::Black => self.black_kings,
        }
    }

    pub fn is_player_piece(&self, square: Square, player: Player) -> bool {
        self.pieces_of(player).get(square)
    }

    pub fn is_opponent_piece(&self, square: Square, player: Player) -> bool {
        self.pieces_of(player.opponent()).get(square)
    }

    pub fn is_king(&self, square: Square, player: Player) -> bool {
        self.kings_of(player).get(square)
    }

    /// Relocates a piece of `player`, carrying its king flag along.
    pub(crate) fn move_piece(&mut self, from: Square, to: Square, player: Player) {
        let king = self.is_king(from, player);
        match player {
            Player::Red => {
                self.red_pieces.clear(from);
                self.red_pieces.set(to);
                if king {
                    self.red_kings.clear(from);
                    self.red_kings.set(to);
                }
            }
            Player::Black => {
                self.black_pieces.clear(from);
                self.black_pieces.set(to);
                if king {
                    self.black_kings.clear(from);
                    self.black_kings.set(to);
                }
            }
        }
    }

    /// Removes the opponent piece captured by `player`.
    pub(crate) fn remove_captured(&mut self, square: Square, player: Player) {
        match player.opponent() {
            Player::Red => {
                self.red_pieces.clear(square);
                self.red_kings.clear(square);
            }
            Player::Black => {
                self.black_pieces.clear(square);
                self.black_kings.clear(square);
            }
        }
    }

    pub(crate) fn promote_if_needed(&mut self, square: Square, player: Player) {
        if square.row() != player.crowning_row() {
            return;
        }
        match player {
            Player::Red => self.red_kings.set(square),
            Player::Black => self.black_kings.set(square),
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
