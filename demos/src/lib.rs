//! Shared logic for the `garden` demo binary.

use anyhow::{Context, anyhow};
use regrid_core::{Grid, Node};
use regrid_paths::shortest_path;
use regrid_regions::{AreaData, regions_with_data};

/// Region measurements of a garden map plus the two fence prices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceReport {
    pub regions: Vec<AreaData<char>>,
    /// Σ area × perimeter.
    pub perimeter_price: usize,
    /// Σ area × sides.
    pub side_price: usize,
}

pub fn fence_report(grid: &Grid<char>) -> FenceReport {
    let regions = regions_with_data(grid);
    let perimeter_price = regions.iter().map(|d| d.area * d.perimeter).sum();
    let side_price = regions.iter().map(|d| d.area * d.sides).sum();
    FenceReport {
        regions,
        perimeter_price,
        side_price,
    }
}

/// Height of a heightmap symbol. `S` sits at `a`, `E` at `z`.
pub fn elevation(c: char) -> u32 {
    match c {
        'S' => 'a' as u32,
        'E' => 'z' as u32,
        c => c as u32,
    }
}

/// Fewest-steps climb from the `start` symbol to the `goal` symbol, where a
/// step may rise at most one level and descend any amount.
///
/// Returns an empty path when the goal cannot be reached.
pub fn climb(grid: &Grid<char>, start: char, goal: char) -> anyhow::Result<Vec<Node<char>>> {
    let locate = |symbol: char| {
        grid.find(&symbol)
            .ok_or_else(|| anyhow!("no '{symbol}' on the map"))
            .and_then(|p| Ok(grid.cell(p)?))
    };
    let source = locate(start)?;
    let target = locate(goal)?;
    let vertices: Vec<_> = grid.cells().collect();
    let path = shortest_path(&vertices, &source, &target, |candidate, current| {
        candidate.is_adjacent_to(current)
            && elevation(candidate.value) <= elevation(current.value) + 1
    })
    .context("searching heightmap")?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_prices() {
        let g = Grid::parse("AAAA\nBBCD\nBBCC\nEEEC").unwrap();
        let report = fence_report(&g);
        assert_eq!(report.regions.len(), 5);
        assert_eq!(report.perimeter_price, 140);
        assert_eq!(report.side_price, 80);
    }

    #[test]
    fn climb_heightmap() {
        let g = Grid::parse("Sabqponm\nabcryxxl\naccszExk\nacctuvwj\nabdefghi").unwrap();
        let path = climb(&g, 'S', 'E').unwrap();
        assert_eq!(path.len(), 32);
    }

    #[test]
    fn climb_too_steep() {
        let g = Grid::parse("SaE").unwrap();
        assert!(climb(&g, 'S', 'E').unwrap().is_empty());
    }

    #[test]
    fn climb_missing_symbol() {
        let g = Grid::parse("Sab").unwrap();
        let err = climb(&g, 'S', 'E').unwrap_err();
        assert!(err.to_string().contains("no 'E'"));
    }
}
