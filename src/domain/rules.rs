use crate::domain::board::BoardState;
use crate::domain::models::{Move, MoveError, Player};
use crate::domain::square::Square;
use smallvec::SmallVec;

/// Capturing moves found on a board scan; 12 men with at most 4 jumps each
/// never realistically overflows the inline capacity.
pub type MoveList = SmallVec<[Move; 16]>;

const SIMPLE_DELTAS: [i8; 4] = [7, 9, -7, -9];

pub struct Rules;

impl Rules {
    /// Validates and applies one move for the side to move. On success the
    /// board is mutated in place (relocation, capture removal, promotion);
    /// on failure the board is untouched and the reason is returned.
    /// Turn transition is the caller's concern.
    pub fn attempt_move(board: &mut BoardState, mv: Move) -> Result<(), MoveError> {
        let player = board.turn;
        let Move { from, to } = mv;

        if !board.is_player_piece(from, player) {
            return Err(MoveError::NotYourPiece);
        }
        if board.occupied(to) {
            return Err(MoveError::DestinationOccupied);
        }

        let diff = to.index() as i8 - from.index() as i8;
        let is_simple = matches!(diff.abs(), 7 | 9);
        let is_jump = matches!(diff.abs(), 14 | 18);

        // Captures are mandatory board-wide, not just for the chosen piece.
        if is_simple && Self::any_capture_available(board) {
            return Err(MoveError::MustCapture);
        }

        let king = board.is_king(from, player);
        if !king && diff.signum() != player.forward_sign() {
            return Err(MoveError::WrongDirection);
        }

        if is_simple {
            if from.offset(diff) != Some(to) {
                return Err(MoveError::InvalidPath);
            }
            board.move_piece(from, to, player);
            board.promote_if_needed(to, player);
            Ok(())
        } else if is_jump {
            let over_index = (from.index() + to.index()) / 2;
            let over = Square::new(over_index)?;
            // Only the from -> over step is validated geometrically; a
            // jump is not required to chain further once taken.
            if from.offset(over_index as i8 - from.index() as i8) != Some(over) {
                return Err(MoveError::InvalidPath);
            }
            if !board.is_opponent_piece(over, player) {
                return Err(MoveError::NoOpponentToCapture);
            }
            board.move_piece(from, to, player);
            board.remove_captured(over, player);
            board.promote_if_needed(to, player);
            Ok(())
        } else {
            Err(MoveError::InvalidDistance)
        }
    }

    /// True when the side to move can capture anywhere on the board.
    pub fn any_capture_available(board: &BoardState) -> bool {
        let player = board.turn;
        board
            .pieces_of(player)
            .iter_squares()
            .any(|from| Self::captures_from(board, from, player).next().is_some())
    }

    /// Every capturing move open to the side to move. Same scan as
    /// `any_capture_available`, collected so the interface can hint at
    /// which pieces are obliged to jump.
    pub fn available_captures(board: &BoardState) -> MoveList {
        let player = board.turn;
        let mut moves = MoveList::new();
        for from in board.pieces_of(player).iter_squares() {
            moves.extend(Self::captures_from(board, from, player));
        }
        moves
    }

    /// True when `player` has at least one non-capturing move.
    pub fn any_legal_simple_move(board: &BoardState, player: Player) -> bool {
        board.pieces_of(player).iter_squares().any(|from| {
            let king = board.is_king(from, player);
            SIMPLE_DELTAS.iter().any(|&delta| {
                if !king && delta.signum() != player.forward_sign() {
                    return false;
                }
                matches!(from.offset(delta), Some(to) if !board.occupied(to))
            })
        })
    }

    /// Checked at the top of each turn cycle. Elimination is decided
    /// first; a side left with no simple move and no capture loses.
    pub fn check_win(board: &BoardState) -> Option<Player> {
        if board.red_pieces.count() == 0 {
            return Some(Player::Black);
        }
        if board.black_pieces.count() == 0 {
            return Some(Player::Red);
        }
        if !Self::any_legal_simple_move(board, board.turn) && !Self::any_capture_available(board) {
            return Some(board.turn.opponent());
        }
        None
    }

    fn captures_from(
        board: &BoardState,
        from: Square,
        player: Player,
    ) -> impl Iterator<Item = Move> + '_ {
        let king = board.is_king(from, player);
        SIMPLE_DELTAS.into_iter().filter_map(move |delta| {
            if !king && delta.signum() != player.forward_sign() {
                return None;
            }
            let over = from.offset(delta)?;
            let land = from.offset(delta * 2)?;
            if board.is_opponent_piece(over, player) && !board.occupied(land) {
                Some(Move::new(from, land))
            } else {
                None
            }
        })
    }
}
