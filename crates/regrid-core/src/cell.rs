//! The [`Cell`] type — a grid value together with its position.

use crate::geom::Point;

/// A value read from a [`Grid`](crate::Grid), tagged with where it lives.
///
/// Two cells are equal when both position and value are equal. Cells are
/// snapshots: changing one does not write back into the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell<T> {
    pub pos: Point,
    pub value: T,
}

/// Vertex type of the shortest-path search. Identity is positional.
pub type Node<T> = Cell<T>;

impl<T> Cell<T> {
    #[inline]
    pub const fn new(pos: Point, value: T) -> Self {
        Self { pos, value }
    }

    /// Column index.
    #[inline]
    pub const fn x(&self) -> i32 {
        self.pos.x
    }

    /// Row index.
    #[inline]
    pub const fn y(&self) -> i32 {
        self.pos.y
    }

    /// Whether `other` shares an edge with this cell (Manhattan distance 1).
    #[inline]
    pub fn is_adjacent_to<U>(&self, other: &Cell<U>) -> bool {
        self.pos.manhattan(other.pos) == 1
    }
}
