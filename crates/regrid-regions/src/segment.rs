//! Flood-fill segmentation.

use std::collections::HashMap;
use std::hash::Hash;

use regrid_core::{Grid, Point};

use crate::region::{AreaData, Region};

/// Partition `grid` into maximal 4-connected regions of equal labels.
///
/// Regions are returned in discovery order: a region is discovered at its
/// first cell in row-major order. Every cell of the grid belongs to exactly
/// one region.
pub fn segment<T: Clone + PartialEq>(grid: &Grid<T>) -> Vec<Region<T>> {
    let width = grid.width().max(0) as usize;
    let idx = |p: Point| (p.y as usize) * width + (p.x as usize);

    let mut visited = vec![false; grid.bounds().len()];
    let mut stack: Vec<Point> = Vec::new();
    let mut regions = Vec::new();

    for (start, label) in grid.positions().zip(grid.values()) {
        if visited[idx(start)] {
            continue;
        }

        // Iterative DFS from `start`.
        let mut cells = Vec::new();
        visited[idx(start)] = true;
        stack.push(start);
        while let Some(p) = stack.pop() {
            cells.push(p);
            for n in p.neighbors_4() {
                match grid.at(n) {
                    Some(v) if v == label && !visited[idx(n)] => {
                        visited[idx(n)] = true;
                        stack.push(n);
                    }
                    _ => {}
                }
            }
        }

        log::trace!("region at {} with {} cells", start, cells.len());
        regions.push(Region::new(label.clone(), cells));
    }

    log::debug!(
        "segmented {}x{} grid into {} regions",
        grid.width(),
        grid.height(),
        regions.len()
    );
    regions
}

/// Group the regions of `grid` by label.
///
/// A label whose cells form several disconnected groups maps to several
/// regions, in discovery order.
pub fn find_regions<T: Clone + Eq + Hash>(grid: &Grid<T>) -> HashMap<T, Vec<Region<T>>> {
    let mut by_label: HashMap<T, Vec<Region<T>>> = HashMap::new();
    for region in segment(grid) {
        by_label
            .entry(region.label().clone())
            .or_default()
            .push(region);
    }
    by_label
}

/// Segment `grid` and measure every region.
///
/// Returns one record per region, in discovery order.
pub fn regions_with_data<T: Clone + PartialEq>(grid: &Grid<T>) -> Vec<AreaData<T>> {
    segment(grid).iter().map(Region::data).collect()
}
