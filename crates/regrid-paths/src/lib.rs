//! Shortest-path search over grid cells.
//!
//! The graph is never materialised: callers hand over a vertex set (usually
//! every cell of a [`Grid`](regrid_core::Grid), or a filtered subset) and a
//! predicate `is_neighbor(candidate, current)` that decides which moves are
//! allowed. Every allowed move costs 1.
//!
//! - [`shortest_path`] — source-to-target path with linear-scan Dijkstra
//! - [`bfs_distances`] — hop distances from a source to every reachable vertex
//!
//! Vertex identity is positional: two [`Node`](regrid_core::Node)s are the
//! same vertex when they sit at the same [`Point`](regrid_core::Point).

mod bfs;
mod dijkstra;
mod error;
mod vertices;

pub use bfs::bfs_distances;
pub use dijkstra::shortest_path;
pub use error::{Endpoint, PathError, Result};

use regrid_core::Point;

/// A position with an associated cost, returned from [`bfs_distances`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// Sentinel distance of a vertex that has not been reached.
pub const UNREACHABLE: i32 = i32::MAX;
