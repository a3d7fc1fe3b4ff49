//! Error type for grid construction and strict accessors.

use crate::geom::Point;

/// Errors reported by [`Grid`](crate::Grid).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A strict accessor was called with a position outside the grid.
    #[error("position {pos} is outside a grid of size {size}")]
    OutOfBounds { pos: Point, size: Point },

    /// Input rows do not all have the same length.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Serialized cells do not fill an origin-anchored grid of `size`.
    #[error("{found} cells do not fill a grid of size {size}")]
    Shape { size: Point, found: usize },
}

/// Result alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
