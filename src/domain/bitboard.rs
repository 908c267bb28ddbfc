use crate::domain::square::Square;
use std::fmt;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

/// A set of board positions, one bit per square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct BitBoard(pub u64);

impl BitBoard {
    pub const EMPTY: BitBoard = BitBoard(0);

    /// The single-bit mask for a square. Bounds are guaranteed by `Square`.
    pub fn mask(square: Square) -> Self {
        BitBoard(1u64 << square.index())
    }

    pub fn set(&mut self, square: Square) {
        self.0 |= 1u64 << square.index();
    }

    pub fn clear(&mut self, square: Square) {
        self.0 &= !(1u64 << square.index());
    }

    pub fn toggle(&mut self, square: Square) {
        self.0 ^= 1u64 << square.index();
    }

    pub fn get(&self, square: Square) -> bool {
        (self.0 & (1u64 << square.index())) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Population count via the clear-lowest-set-bit loop; one iteration
    /// per set bit rather than one per square.
    pub fn count(&self) -> u32 {
        let mut value = self.0;
        let mut count = 0;
        while value != 0 {
            value &= value - 1;
            count += 1;
        }
        count
    }

    pub fn iter_squares(&self) -> BitIterator {
        BitIterator { current: self.0 }
    }
}

impl fmt::Binary for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl BitAnd for BitBoard {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self::Output {
        BitBoard(self.0 & rhs.0)
    }
}

impl BitOr for BitBoard {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        BitBoard(self.0 | rhs.0)
    }
}

impl BitXor for BitBoard {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self::Output {
        BitBoard(self.0 ^ rhs.0)
    }
}

impl Not for BitBoard {
    type Output = Self;
    fn not(self) -> Self::Output {
        BitBoard(!self.0)
    }
}

impl BitAndAssign for BitBoard {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for BitBoard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for BitBoard {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Shl<u32> for BitBoard {
    type Output = Self;
    fn shl(self, rhs: u32) -> Self::Output {
        if rhs >= 64 {
            BitBoard(0)
        } else {
            BitBoard(self.0 << rhs)
        }
    }
}

impl Shr<u32> for BitBoard {
    type Output = Self;
    fn shr(self, rhs: u32) -> Self::Output {
        if rhs >= 64 {
            BitBoard(0)
        } else {
            BitBoard(self.0 >> rhs)
        }
    }
}

impl ShlAssign<u32> for BitBoard {
    fn shl_assign(&mut self, rhs: u32) {
        *self = *self << rhs;
    }
}

impl ShrAssign<u32> for BitBoard {
    fn shr_assign(&mut self, rhs: u32) {
        *self = *self >> rhs;
    }
}

pub struct BitIterator {
    current: u64,
}

impl Iterator for BitIterator {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == 0 {
            return None;
        }
        let trailing = self.current.trailing_zeros();
        self.current &= !(1u64 << trailing);
        Square::new(trailing as u8).ok()
    }
}
