//! [`DirMask`]: a four-bit set of compass directions.
//!
//! The maze keeps two masks per cell (walls known, walls present) and the
//! discovery log keeps two per entry (walls learned, walls present).

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::geom::Direction;

/// Bitmask with one bit per [`Direction`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirMask(u8);

impl DirMask {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(0b1111);

    /// The mask holding only `d`.
    #[inline]
    pub const fn of(d: Direction) -> Self {
        Self(1 << d.index())
    }

    #[inline]
    pub const fn contains(self, d: Direction) -> bool {
        self.0 & (1 << d.index()) != 0
    }

    /// Set or clear the bit for `d`.
    #[inline]
    pub fn set(&mut self, d: Direction, on: bool) {
        if on {
            self.0 |= 1 << d.index();
        } else {
            self.0 &= !(1 << d.index());
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Directions in the mask, in [`Direction::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.contains(d))
    }
}

impl BitOr for DirMask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DirMask {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for DirMask {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl FromIterator<Direction> for DirMask {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut m = Self::NONE;
        for d in iter {
            m |= Self::of(d);
        }
        m
    }
}

impl fmt::Debug for DirMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.iter().map(Direction::as_char).collect();
        write!(f, "DirMask({s})")
    }
}
