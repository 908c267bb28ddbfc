use crate::domain::board::BoardState;
use crate::domain::models::Player;
use std::fs;
use std::path::Path;
use tracing::info;

/// Save file layout, all little-endian:
/// 4-byte magic, 1-byte version, the four bitboards as u64, 1-byte turn tag.
const MAGIC: [u8; 4] = *b"CKBB";
const FORMAT_VERSION: u8 = 1;
const RECORD_LEN: usize = 4 + 1 + 8 * 4 + 1;

const TURN_RED: u8 = 0;
const TURN_BLACK: u8 = 1;

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("could not access save file: {0}")]
    Io(#[from] std::io::Error),

    #[error("save file is {0} bytes, expected exactly {RECORD_LEN}")]
    WrongLength(usize),

    #[error("not a checkers save file")]
    BadMagic,

    #[error("unsupported save format version {0}")]
    UnsupportedVersion(u8),

    #[error("save file is corrupt: {0}")]
    CorruptRecord(String),
}

pub fn save_game(board: &BoardState, path: &Path) -> Result<(), PersistenceError> {
    let mut record = Vec::with_capacity(RECORD_LEN);
    record.extend_from_slice(&MAGIC);
    record.push(FORMAT_VERSION);
    record.extend_from_slice(&board.red_pieces.0.to_le_bytes());
    record.extend_from_slice(&board.black_pieces.0.to_le_bytes());
    record.extend_from_slice(&board.red_kings.0.to_le_bytes());
    record.extend_from_slice(&board.black_kings.0.to_le_bytes());
    record.push(match board.turn {
        Player::Red => TURN_RED,
        Player::Black => TURN_BLACK,
    });

    fs::write(path, &record)?;
    info!(path = %path.display(), "game saved");
    Ok(())
}

/// Reads and validates a snapshot. Nothing live is touched on failure;
/// callers swap their board only on `Ok`.
pub fn load_game(path: &Path) -> Result<BoardState, PersistenceError> {
    let record = fs::read(path)?;
    let board = decode(&record)?;
    info!(path = %path.display(), "game loaded");
    Ok(board)
}

fn decode(record: &[u8]) -> Result<BoardState, PersistenceError> {
    // The record is fixed-size; trailing bytes mean the file is not ours.
    if record.len() != RECORD_LEN {
        return Err(PersistenceError::WrongLength(record.len()));
    }
    if record[0..4] != MAGIC {
        return Err(PersistenceError::BadMagic);
    }
    if record[4] != FORMAT_VERSION {
        return Err(PersistenceError::UnsupportedVersion(record[4]));
    }

    let mut fields = [0u64; 4];
    for (i, field) in fields.iter_mut().enumerate() {
        let start = 5 + i * 8;
        let bytes: [u8; 8] = record[start..start + 8]
            .try_into()
            .expect("slice is exactly 8 bytes");
        *field = u64::from_le_bytes(bytes);
    }

    let turn = match record[RECORD_LEN - 1] {
        TURN_RED => Player::Red,
        TURN_BLACK => Player::Black,
        tag => {
            return Err(PersistenceError::CorruptRecord(format!(
                "unknown turn tag {tag}"
            )));
        }
    };

    let board = BoardState {
        red_pieces: crate::domain::bitboard::BitBoard(fields[0]),
        black_pieces: crate::domain::bitboard::BitBoard(fields[1]),
        red_kings: crate::domain::bitboard::BitBoard(fields[2]),
        black_kings: crate::domain::bitboard::BitBoard(fields[3]),
        turn,
    };
    validate(&board)?;
    Ok(board)
}

/// A snapshot must satisfy the same invariants the rules engine maintains.
fn validate(board: &BoardState) -> Result<(), PersistenceError> {
    if !(board.red_pieces & board.black_pieces).is_empty() {
        return Err(PersistenceError::CorruptRecord(
            "red and black occupy the same square".into(),
        ));
    }
    if !(board.red_kings & !board.red_pieces).is_empty()
        || !(board.black_kings & !board.black_pieces).is_empty()
    {
        return Err(PersistenceError::CorruptRecord(
            "king flag without a matching piece".into(),
        ));
    }
    let occupied = board.red_pieces | board.black_pieces;
    if let Some(square) = occupied.iter_squares().find(|s| !s.is_playable()) {
        return Err(PersistenceError::CorruptRecord(format!(
            "piece on light square {square}"
        )));
    }
    Ok(())
}
