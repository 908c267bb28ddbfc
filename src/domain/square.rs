use crate::domain::models::MoveError;
use std::fmt;

/// A board position in [0, 64), laid out row-major: index = row * 8 + col.
/// Rank 1 is row 0; file `a` is column 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub fn new(index: u8) -> Result<Self, MoveError> {
        if index < 64 {
            Ok(Square(index))
        } else {
            Err(MoveError::InvalidCoordinate(format!(
                "square index {index} out of range"
            )))
        }
    }

    pub fn index(&self) -> u8 {
        self.0
    }

    pub fn row(&self) -> u8 {
        self.0 / 8
    }

    pub fn col(&self) -> u8 {
        self.0 % 8
    }

    /// Pieces only ever sit on dark squares.
    pub fn is_playable(&self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// Parses a file+rank token like `b6`. Light squares are rejected here
    /// so nothing downstream has to re-check playability.
    pub fn parse_coord(text: &str) -> Result<Self, MoveError> {
        let reject = || MoveError::InvalidCoordinate(text.to_string());

        let mut chars = text.chars();
        let file = chars.next().ok_or_else(reject)?.to_ascii_lowercase();
        let rank = chars.next().ok_or_else(reject)?;
        if chars.next().is_some() {
            return Err(reject());
        }
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(reject());
        }

        let col = file as u8 - b'a';
        let row = rank as u8 - b'1';
        let square = Square(row * 8 + col);
        if !square.is_playable() {
            return Err(reject());
        }
        Ok(square)
    }

    /// Steps by a signed offset, returning `None` when the result leaves the
    /// board or wraps across an edge. A step is accepted only when both the
    /// row delta and column delta are 1 (simple) or both are 2 (jump).
    pub fn offset(&self, delta: i8) -> Option<Square> {
        let target = self.0 as i16 + delta as i16;
        if !(0..64).contains(&target) {
            return None;
        }
        let target = Square(target as u8);
        let row_diff = (target.row() as i8 - self.row() as i8).abs();
        let col_diff = (target.col() as i8 - self.col() as i8).abs();
        match delta.abs() {
            7 | 9 => (row_diff == 1 && col_diff == 1).then_some(target),
            14 | 18 => (row_diff == 2 && col_diff == 2).then_some(target),
            _ => None,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.col()) as char,
            (b'1' + self.row()) as char
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_all_playable_squares_round_trip() {
        let mut playable = 0;
        for index in 0..64u8 {
            let square = Square::new(index).unwrap();
            let coord = square.to_string();
            if square.is_playable() {
                playable += 1;
                assert_eq!(Square::parse_coord(&coord).unwrap(), square);
                assert_eq!(coord.len(), 2);
                assert!(coord.as_bytes()[0].is_ascii_lowercase());
                assert!(coord.as_bytes()[1].is_ascii_digit());
            } else {
                assert!(Square::parse_coord(&coord).is_err());
            }
        }
        assert_eq!(playable, 32);
    }

    #[test]
    fn parse_is_case_insensitive_on_files() {
        assert_eq!(
            Square::parse_coord("B3").unwrap(),
            Square::parse_coord("b3").unwrap()
        );
    }

    #[test]
    fn parse_rejects_malformed_tokens() {
        for bad in ["", "b", "b33", "i3", "b9", "b0", "33", "bb", " b3"] {
            assert!(Square::parse_coord(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn parse_rejects_light_squares() {
        // a1 is light ((0+0) even), b3 is dark.
        assert!(Square::parse_coord("a1").is_err());
        assert!(Square::parse_coord("b3").is_ok());
    }

    #[test]
    fn offset_rejects_edge_wraparound() {
        // h3 = row 2, col 7; +9 by raw index would wrap to the a-file.
        let h3 = Square::parse_coord("h3").unwrap();
        assert!(h3.offset(9).is_none());
        assert!(h3.offset(7).is_some());

        // a4 = row 3, col 0; -9 wraps, -7 is fine.
        let a4 = Square::parse_coord("a4").unwrap();
        assert!(a4.offset(-9).is_none());
        assert!(a4.offset(-7).is_some());
    }

    #[test]
    fn offset_rejects_off_board_targets() {
        let c8 = Square::parse_coord("c8").unwrap();
        assert!(c8.offset(7).is_none());
        assert!(c8.offset(9).is_none());
        let a2 = Square::new(8).unwrap();
        assert!(a2.offset(-14).is_none());
    }

    #[test]
    fn offset_rejects_non_diagonal_deltas() {
        let d5 = Square::parse_coord("d5").unwrap();
        for delta in [0i8, 1, 8, -8, 16, 3] {
            assert!(d5.offset(delta).is_none(), "accepted delta {delta}");
        }
    }

    #[test]
    fn new_rejects_out_of_range_indices() {
        assert!(Square::new(64).is_err());
        assert!(Square::new(255).is_err());
        assert!(Square::new(63).is_ok());
    }

    #[test]
    fn row_and_col_are_division_and_modulo() {
        let square = Square::new(42).unwrap();
        assert_eq!(square.row(), 5);
        assert_eq!(square.col(), 2);
    }
}
