//! The [`Grid`] type — a rectangular 2D container of generic values.
//!
//! A `Grid` owns its values in a flat row-major buffer. Dimensions are fixed
//! at construction; values can be replaced through `&mut Grid`. Every
//! read-side query hands out [`Cell`] snapshots, so neighbour lookups never
//! need to special-case the grid edges: positions outside the bounds are
//! simply skipped.

use std::fmt;

use crate::cell::Cell;
use crate::error::{GridError, Result};
use crate::geom::{Point, Range, RangeIter};

/// A rectangular, non-jagged grid of `T` values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRepr<T>")
)]
pub struct Grid<T> {
    cells: Vec<T>,
    bounds: Range,
}

/// Unchecked serialized form of a [`Grid`]; validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr<T> {
    cells: Vec<T>,
    bounds: Range,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<GridRepr<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(repr: GridRepr<T>) -> Result<Self> {
        let GridRepr { cells, bounds } = repr;
        if bounds.min != Point::ZERO
            || bounds.max.x < 0
            || bounds.max.y < 0
            || cells.len() != bounds.len()
        {
            return Err(GridError::Shape {
                size: bounds.max,
                found: cells.len(),
            });
        }
        Ok(Self { cells, bounds })
    }
}

impl<T> Grid<T> {
    /// Build a grid from rows of values. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(Self {
            cells,
            bounds: Range::new(0, 0, width as i32, height as i32),
        })
    }

    /// Build a `width` × `height` grid by calling `f` for every position in
    /// row-major order.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> T) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: bounds.iter().map(&mut f).collect(),
            bounds,
        }
    }

    /// The bounding range of the grid, always anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point` (width, height).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (i32, i32) {
        (self.width(), self.height())
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Whether `p` lies in the first or last row or column.
    ///
    /// `x` is checked against the width and `y` against the height, so the
    /// answer is correct for non-square grids. Positions outside the grid are
    /// never on its edge.
    #[inline]
    pub fn is_on_edge(&self, p: Point) -> bool {
        self.bounds.on_edge(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.bounds.contains(p) {
            Some((p.y as usize) * (self.width() as usize) + (p.x as usize))
        } else {
            None
        }
    }

    #[inline]
    fn out_of_bounds(&self, pos: Point) -> GridError {
        GridError::OutOfBounds {
            pos,
            size: self.size(),
        }
    }

    /// Borrow the value at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&T> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Mutably borrow the value at `p`, or `None` outside the grid.
    #[inline]
    pub fn at_mut(&mut self, p: Point) -> Option<&mut T> {
        self.index(p).map(|i| &mut self.cells[i])
    }

    /// Replace the value at `p`.
    pub fn set(&mut self, p: Point, value: T) -> Result<()> {
        let i = self.index(p).ok_or_else(|| self.out_of_bounds(p))?;
        self.cells[i] = value;
        Ok(())
    }

    /// Row-major iterator over every position of the grid.
    #[inline]
    pub fn positions(&self) -> RangeIter {
        self.bounds.iter()
    }

    /// Row-major iterator over the stored values, in step with
    /// [`positions`](Self::positions).
    #[inline]
    pub fn values(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Build a grid of the same size by applying `f` to every cell.
    pub fn map<U>(&self, mut f: impl FnMut(Point, &T) -> U) -> Grid<U> {
        Grid {
            cells: self
                .positions()
                .zip(self.values())
                .map(|(p, v)| f(p, v))
                .collect(),
            bounds: self.bounds,
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Create a `width` × `height` grid with every cell set to `value`.
    pub fn filled(width: i32, height: i32, value: T) -> Self {
        Self::from_fn(width, height, |_| value.clone())
    }

    /// The cell at `p`, failing with [`GridError::OutOfBounds`] outside the
    /// grid.
    pub fn cell(&self, p: Point) -> Result<Cell<T>> {
        self.get(p).ok_or_else(|| self.out_of_bounds(p))
    }

    /// The cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, p: Point) -> Option<Cell<T>> {
        self.at(p).map(|v| Cell::new(p, v.clone()))
    }

    /// Row-major iterator over every cell. Each call starts a fresh pass.
    pub fn cells(&self) -> GridIter<'_, T> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }

    /// The cells matching `pred`, in row-major order.
    pub fn filter_cells(&self, mut pred: impl FnMut(&Cell<T>) -> bool) -> Vec<Cell<T>> {
        self.cells().filter(|c| pred(c)).collect()
    }

    /// Up to four edge-sharing neighbours of `p` that lie inside the grid,
    /// in the order left, up, down, right.
    pub fn adjacent(&self, p: Point) -> impl Iterator<Item = Cell<T>> + '_ {
        p.neighbors_4().into_iter().filter_map(|n| self.get(n))
    }

    /// Up to eight neighbours of `p` (diagonals included) inside the grid.
    pub fn surrounding(&self, p: Point) -> impl Iterator<Item = Cell<T>> + '_ {
        p.neighbors_8().into_iter().filter_map(|n| self.get(n))
    }

    /// Cells of row `y`, left to right. Empty if `y` is out of range.
    pub fn row(&self, y: i32) -> Vec<Cell<T>> {
        self.bounds
            .line(y)
            .iter()
            .filter_map(|p| self.get(p))
            .collect()
    }

    /// Cells of column `x`, top to bottom. Empty if `x` is out of range.
    pub fn column(&self, x: i32) -> Vec<Cell<T>> {
        self.bounds
            .column(x)
            .iter()
            .filter_map(|p| self.get(p))
            .collect()
    }

    /// The grid mirrored along its main diagonal: the value at `(x, y)`
    /// moves to `(y, x)`.
    pub fn transpose(&self) -> Self {
        let size = self.size();
        Self::from_fn(size.y, size.x, |p| self.cells[self.flat(p.transpose())].clone())
    }

    #[inline]
    fn flat(&self, p: Point) -> usize {
        (p.y as usize) * (self.width() as usize) + (p.x as usize)
    }
}

impl<T: PartialEq> Grid<T> {
    /// Position of `value`. When the value occurs more than once, the last
    /// occurrence in row-major order wins.
    pub fn find(&self, value: &T) -> Option<Point> {
        self.positions()
            .zip(self.values())
            .filter(|(_, v)| *v == value)
            .map(|(p, _)| p)
            .last()
    }
}

impl Grid<char> {
    /// Parse newline-separated text into a character grid.
    ///
    /// `\r\n` line endings and trailing blank lines are accepted; every other
    /// line must have the same number of characters.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows: Vec<Vec<char>> = text.lines().map(|l| l.chars().collect()).collect();
        while rows.last().is_some_and(Vec::is_empty) {
            rows.pop();
        }
        let grid = Self::from_rows(rows)?;
        log::debug!("parsed {}x{} grid", grid.width(), grid.height());
        Ok(grid)
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    /// Rows separated by `\n`, cells concatenated without separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.width().max(0) as usize;
        if width == 0 {
            return Ok(());
        }
        for (y, row) in self.cells.chunks(width).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for v in row {
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the [`Cell`]s of a [`Grid`].
pub struct GridIter<'a, T> {
    grid: &'a Grid<T>,
    inner: RangeIter,
}

impl<T: Clone> Iterator for GridIter<'_, T> {
    type Item = Cell<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        self.grid.get(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Clone> ExactSizeIterator for GridIter<'_, T> {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse("ab\ncd").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid<char> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn deserialize_rejects_mismatched_shape() {
        let short = r#"{"cells":["a"],"bounds":{"min":{"x":0,"y":0},"max":{"x":2,"y":2}}}"#;
        assert!(serde_json::from_str::<Grid<char>>(short).is_err());

        let shifted = r#"{"cells":["a"],"bounds":{"min":{"x":1,"y":1},"max":{"x":2,"y":2}}}"#;
        assert!(serde_json::from_str::<Grid<char>>(shifted).is_err());

        let inverted = r#"{"cells":[],"bounds":{"min":{"x":0,"y":0},"max":{"x":-2,"y":3}}}"#;
        assert!(serde_json::from_str::<Grid<char>>(inverted).is_err());

        let ok = r#"{"cells":["a","b"],"bounds":{"min":{"x":0,"y":0},"max":{"x":1,"y":2}}}"#;
        let g: Grid<char> = serde_json::from_str(ok).unwrap();
        assert_eq!(g.get(Point::new(0, 1)).map(|c| c.value), Some('b'));
    }

    #[test]
    fn shape_error_names_sizes() {
        let err = Grid::try_from(GridRepr {
            cells: vec!['a'],
            bounds: Range::new(0, 0, 2, 2),
        })
        .unwrap_err();
        assert_eq!(
            err,
            GridError::Shape {
                size: Point::new(2, 2),
                found: 1
            }
        );
    }
}
