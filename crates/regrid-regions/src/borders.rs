//! Boundary face flags: [`Borders`] and [`Bordered`].

use std::ops::{BitOr, BitOrAssign};

use regrid_core::{Direction, Point};

/// Bitmask of cell faces lying on a region boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Borders(pub u8);

impl Borders {
    pub const NONE: Self = Self(0);
    pub const TOP: Self = Self(1 << 0);
    pub const BOTTOM: Self = Self(1 << 1);
    pub const LEFT: Self = Self(1 << 2);
    pub const RIGHT: Self = Self(1 << 3);

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<Direction> for Borders {
    /// The face a cell exposes towards `dir`.
    #[inline]
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => Self::TOP,
            Direction::Down => Self::BOTTOM,
            Direction::Left => Self::LEFT,
            Direction::Right => Self::RIGHT,
        }
    }
}

impl BitOr for Borders {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Borders {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// A region cell together with its boundary faces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bordered {
    pub pos: Point,
    pub borders: Borders,
}
