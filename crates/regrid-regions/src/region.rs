//! The [`Region`] type and its measurements.

use std::collections::BTreeMap;

use regrid_core::{Direction, Point};

use crate::borders::{Bordered, Borders};

/// Measurements of one region.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaData<T> {
    pub id: T,
    pub area: usize,
    pub perimeter: usize,
    pub sides: usize,
}

/// A maximal 4-connected set of cells sharing one label.
///
/// Cells are kept sorted by `(x, y)`: column first, then row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region<T> {
    label: T,
    cells: Vec<Point>,
}

impl<T> Region<T> {
    pub(crate) fn new(label: T, mut cells: Vec<Point>) -> Self {
        cells.sort_unstable_by_key(|p| (p.x, p.y));
        Self { label, cells }
    }

    /// The label shared by every cell of the region.
    #[inline]
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Cell positions sorted by `(x, y)`.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.cells
            .binary_search_by_key(&(p.x, p.y), |c| (c.x, c.y))
            .is_ok()
    }

    /// Number of cells.
    #[inline]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Number of unit edges between a region cell and anything outside the
    /// region (another label or the grid edge).
    pub fn perimeter(&self) -> usize {
        self.cells
            .iter()
            .map(|&c| {
                let shared = c.neighbors_4().into_iter().filter(|&n| self.contains(n)).count();
                4 - shared
            })
            .sum()
    }

    /// Boundary faces of every region cell, in canonical cell order.
    ///
    /// Cells strictly inside the region are listed with empty borders. The
    /// table is computed fresh on every call.
    pub fn boundary(&self) -> Vec<Bordered> {
        self.cells
            .iter()
            .map(|&pos| {
                let mut borders = Borders::NONE;
                for dir in Direction::ALL {
                    if !self.contains(pos + dir.delta()) {
                        borders |= Borders::from(dir);
                    }
                }
                Bordered { pos, borders }
            })
            .collect()
    }

    /// Number of maximal straight boundary runs.
    ///
    /// Each face direction is handled on its own: faces are grouped by the
    /// row (top/bottom) or column (left/right) they lie on, and every gap
    /// between consecutive cells of a group starts a new side. Holes and
    /// concave notches need no special handling.
    pub fn sides(&self) -> usize {
        let boundary = self.boundary();
        Direction::ALL
            .into_iter()
            .map(|dir| {
                let face = Borders::from(dir);
                let mut lines: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
                for b in boundary.iter().filter(|b| b.borders.contains(face)) {
                    let (line, offset) = match dir {
                        Direction::Up | Direction::Down => (b.pos.y, b.pos.x),
                        Direction::Left | Direction::Right => (b.pos.x, b.pos.y),
                    };
                    lines.entry(line).or_default().push(offset);
                }
                lines.values_mut().map(|offsets| count_runs(offsets)).sum::<usize>()
            })
            .sum()
    }
}

impl<T: Clone> Region<T> {
    /// Area, perimeter and side count in one record.
    pub fn data(&self) -> AreaData<T> {
        AreaData {
            id: self.label.clone(),
            area: self.area(),
            perimeter: self.perimeter(),
            sides: self.sides(),
        }
    }
}

/// Number of contiguous runs in a non-empty set of offsets.
fn count_runs(offsets: &mut Vec<i32>) -> usize {
    offsets.sort_unstable();
    offsets.dedup();
    1 + offsets.windows(2).filter(|w| w[1] - w[0] > 1).count()
}

#[cfg(test)]
mod tests {
    use regrid_core::Grid;

    use super::*;
    use crate::segment;

    fn single(text: &str, label: char) -> Region<char> {
        let g = Grid::parse(text).unwrap();
        let mut found: Vec<_> = segment(&g).into_iter().filter(|r| *r.label() == label).collect();
        assert_eq!(found.len(), 1, "expected exactly one {label} region");
        found.remove(0)
    }

    #[test]
    fn canonical_order_is_column_major() {
        let r = single("AA\nAA", 'A');
        assert_eq!(
            r.cells(),
            &[
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(1, 0),
                Point::new(1, 1)
            ]
        );
    }

    #[test]
    fn single_cell() {
        let r = single("B", 'B');
        assert_eq!((r.area(), r.perimeter(), r.sides()), (1, 4, 4));
        let b = r.boundary();
        assert_eq!(b.len(), 1);
        assert_eq!(
            b[0].borders,
            Borders::TOP | Borders::BOTTOM | Borders::LEFT | Borders::RIGHT
        );
    }

    #[test]
    fn solid_square() {
        let r = single("AAAA\nAAAA\nAAAA\nAAAA", 'A');
        assert_eq!(
            r.data(),
            AreaData {
                id: 'A',
                area: 16,
                perimeter: 16,
                sides: 4
            }
        );
        let interior = r.boundary().iter().filter(|b| b.borders.is_empty()).count();
        assert_eq!(interior, 4);
    }

    #[test]
    fn rectangle_perimeter() {
        let r = single("..xxx.\n..xxx.", 'x');
        assert_eq!(r.perimeter(), 2 * (3 + 2));
        assert_eq!(r.sides(), 4);
    }

    #[test]
    fn concave_shape() {
        // An L: two rows wide at the bottom, one column tall on the left.
        let r = single("A..\nA..\nAAA", 'A');
        assert_eq!(r.area(), 5);
        assert_eq!(r.perimeter(), 12);
        assert_eq!(r.sides(), 6);
    }

    #[test]
    fn region_with_hole() {
        let r = single("OOO\nO.O\nOOO", 'O');
        assert_eq!(r.area(), 8);
        assert_eq!(r.perimeter(), 16);
        assert_eq!(r.sides(), 8);
        assert!(!r.contains(Point::new(1, 1)));
    }

    #[test]
    fn comb_edges_split_into_sides() {
        // Teeth pointing down: the bottom face is interrupted twice.
        let r = single("CCCCC\nC.C.C", 'C');
        assert_eq!(r.area(), 8);
        assert_eq!(r.perimeter(), 18);
        // top 1, bottoms: 3 tooth tips + 2 gaps in the spine, left 1, right 1,
        // inner verticals 4.
        assert_eq!(r.sides(), 12);
    }

    #[test]
    fn sides_never_exceed_perimeter() {
        let g = Grid::parse("ABAB\nBABA\nAABB\nABBA").unwrap();
        for r in segment(&g) {
            assert!(r.sides() <= r.perimeter());
            assert!(r.perimeter() >= 4);
        }
    }

    #[test]
    fn boundary_is_recomputed_per_call() {
        let r = single("AA\nA.", 'A');
        assert_eq!(r.boundary(), r.boundary());
        assert_eq!(r.sides(), r.sides());
        assert_eq!(r.sides(), 6);
    }
}
