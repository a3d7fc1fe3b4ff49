//! **regrid-core** — generic 2D grid container and geometry primitives.
//!
//! This crate provides the foundational types used across the *regrid*
//! workspace: [`Point`] and [`Range`] geometry, the [`Direction`] compass,
//! positioned [`Cell`] values, and the rectangular [`Grid`] container with
//! its neighbour queries.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, Node};
pub use error::{GridError, Result};
pub use geom::{Direction, Point, Range};
pub use grid::Grid;
