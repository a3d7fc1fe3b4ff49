use std::fmt;

use regrid_core::Point;

/// Which end of a search a [`PathError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => write!(f, "source"),
            Endpoint::Target => write!(f, "target"),
        }
    }
}

/// Errors reported by the search functions.
///
/// An unreachable target is not an error; it yields an empty path.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The source or target is not part of the supplied vertex set.
    #[error("{which} {pos} is not in the vertex set")]
    InvalidArgument { which: Endpoint, pos: Point },
}

/// Result alias for search operations.
pub type Result<T> = std::result::Result<T, PathError>;
