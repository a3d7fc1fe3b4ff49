use regrid_core::Node;

use crate::UNREACHABLE;
use crate::error::{Endpoint, Result};
use crate::vertices::Vertices;

/// Compute a shortest path from `source` to `target` through `vertices`.
///
/// `is_neighbor(candidate, current)` decides whether the search may step
/// from `current` to `candidate`; every step costs 1. The predicate is only
/// asked about vertices that have not been settled yet, so self-loops are
/// harmless.
///
/// Returns the full path including both endpoints, or an empty vector when
/// `target` cannot be reached. `source == target` yields `[source]`.
/// The returned nodes are the ones stored in `vertices`.
///
/// The unsettled vertex with the smallest distance is found by a linear
/// scan, O(V²) overall. On ties the vertex listed first in `vertices` is
/// settled first; several equally short paths may exist and callers should
/// not depend on which one is returned.
///
/// # Errors
///
/// [`PathError::InvalidArgument`](crate::PathError::InvalidArgument) when
/// `source` or `target` is not in `vertices`.
pub fn shortest_path<T, F>(
    vertices: &[Node<T>],
    source: &Node<T>,
    target: &Node<T>,
    mut is_neighbor: F,
) -> Result<Vec<Node<T>>>
where
    T: Clone,
    F: FnMut(&Node<T>, &Node<T>) -> bool,
{
    let graph = Vertices::new(vertices);
    let si = graph.require(Endpoint::Source, source)?;
    let ti = graph.require(Endpoint::Target, target)?;

    let n = graph.len();
    let mut dist = vec![UNREACHABLE; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    // Kept in vertex order so the first minimum is the first listed vertex.
    let mut unvisited: Vec<usize> = (0..n).collect();
    dist[si] = 0;

    loop {
        // min_by_key keeps the first of several equal minima.
        let Some(k) = (0..unvisited.len()).min_by_key(|&k| dist[unvisited[k]]) else {
            break;
        };
        let u = unvisited.remove(k);
        if u == ti {
            break;
        }
        // Everything left is disconnected from the source.
        if dist[u] == UNREACHABLE {
            break;
        }

        let alt = dist[u] + 1;
        for &v in unvisited.iter() {
            if is_neighbor(graph.nodes[v], graph.nodes[u]) && alt < dist[v] {
                log::trace!("relax {} via {} to {}", graph.nodes[v].pos, graph.nodes[u].pos, alt);
                dist[v] = alt;
                prev[v] = Some(u);
            }
        }
    }

    if prev[ti].is_none() && ti != si {
        log::debug!("no path from {} to {}", source.pos, target.pos);
        return Ok(Vec::new());
    }

    let mut path = Vec::new();
    let mut cur = Some(ti);
    while let Some(i) = cur {
        path.push(graph.nodes[i].clone());
        cur = prev[i];
    }
    path.reverse();
    log::debug!(
        "path from {} to {}: {} steps",
        source.pos,
        target.pos,
        path.len() - 1
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use regrid_core::{Grid, Point};

    use super::*;
    use crate::PathError;
    use crate::bfs::bfs_distances;

    const HEIGHTMAP: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi";

    fn elevation(c: char) -> u32 {
        match c {
            'S' => 'a' as u32,
            'E' => 'z' as u32,
            c => c as u32,
        }
    }

    fn climbable(candidate: &Node<char>, current: &Node<char>) -> bool {
        candidate.is_adjacent_to(current) && elevation(candidate.value) <= elevation(current.value) + 1
    }

    fn open_floor(candidate: &Node<char>, current: &Node<char>) -> bool {
        candidate.is_adjacent_to(current) && candidate.value != '#'
    }

    fn endpoints(g: &Grid<char>, a: char, b: char) -> (Node<char>, Node<char>) {
        let s = g.cell(g.find(&a).unwrap()).unwrap();
        let e = g.cell(g.find(&b).unwrap()).unwrap();
        (s, e)
    }

    fn assert_valid_path(
        path: &[Node<char>],
        source: &Node<char>,
        target: &Node<char>,
        pred: fn(&Node<char>, &Node<char>) -> bool,
    ) {
        assert_eq!(path.first().map(|n| n.pos), Some(source.pos));
        assert_eq!(path.last().map(|n| n.pos), Some(target.pos));
        let distinct: HashSet<Point> = path.iter().map(|n| n.pos).collect();
        assert_eq!(distinct.len(), path.len(), "path revisits a vertex");
        for w in path.windows(2) {
            assert!(pred(&w[1], &w[0]), "illegal step {} -> {}", w[0].pos, w[1].pos);
        }
    }

    #[test]
    fn hill_climb_fixture() {
        let g = Grid::parse(HEIGHTMAP).unwrap();
        let vertices: Vec<_> = g.cells().collect();
        let (s, e) = endpoints(&g, 'S', 'E');
        let path = shortest_path(&vertices, &s, &e, climbable).unwrap();
        assert_eq!(path.len() - 1, 31);
        assert_valid_path(&path, &s, &e, climbable);
    }

    #[test]
    fn length_matches_bfs() {
        let g = Grid::parse(
            "\
S..#....
.#.#.##.
.#...#..
.####.#.
......#E",
        )
        .unwrap();
        let vertices: Vec<_> = g.cells().collect();
        let (s, e) = endpoints(&g, 'S', 'E');
        let path = shortest_path(&vertices, &s, &e, open_floor).unwrap();
        assert_valid_path(&path, &s, &e, open_floor);

        let dists = bfs_distances(&vertices, &s, open_floor).unwrap();
        let to_target = dists.iter().find(|n| n.pos == e.pos).unwrap().cost;
        assert_eq!(path.len() as i32 - 1, to_target);
    }

    #[test]
    fn source_equals_target() {
        let g = Grid::parse("ab\ncd").unwrap();
        let vertices: Vec<_> = g.cells().collect();
        let s = g.cell(Point::new(1, 1)).unwrap();
        let path = shortest_path(&vertices, &s, &s, open_floor).unwrap();
        assert_eq!(path, vec![s]);
    }

    #[test]
    fn unreachable_when_predicate_rejects_everything() {
        let g = Grid::parse("S..\n...\n..E").unwrap();
        let vertices: Vec<_> = g.cells().collect();
        let (s, e) = endpoints(&g, 'S', 'E');
        let path = shortest_path(&vertices, &s, &e, |_, _| false).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn unreachable_behind_wall() {
        let g = Grid::parse("S.#.\n..#E").unwrap();
        let vertices: Vec<_> = g.cells().collect();
        let (s, e) = endpoints(&g, 'S', 'E');
        assert!(shortest_path(&vertices, &s, &e, open_floor).unwrap().is_empty());
    }

    #[test]
    fn missing_endpoints_are_invalid() {
        let g = Grid::parse("S.\n.E").unwrap();
        let (s, e) = endpoints(&g, 'S', 'E');
        let without_target: Vec<_> = g.filter_cells(|c| c.value != 'E');
        assert_eq!(
            shortest_path(&without_target, &s, &e, open_floor),
            Err(PathError::InvalidArgument {
                which: Endpoint::Target,
                pos: e.pos
            })
        );
        let without_source: Vec<_> = g.filter_cells(|c| c.value != 'S');
        assert_eq!(
            shortest_path(&without_source, &s, &e, open_floor),
            Err(PathError::InvalidArgument {
                which: Endpoint::Source,
                pos: s.pos
            })
        );
    }

    #[test]
    fn self_loops_tolerated() {
        let g = Grid::parse("S..E").unwrap();
        let vertices: Vec<_> = g.cells().collect();
        let (s, e) = endpoints(&g, 'S', 'E');
        let path = shortest_path(&vertices, &s, &e, |a, b| a.pos == b.pos || a.is_adjacent_to(b))
            .unwrap();
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn any_minimal_path_accepted_on_open_floor() {
        let g = Grid::filled(4, 4, '.');
        let vertices: Vec<_> = g.cells().collect();
        let s = g.cell(Point::new(0, 0)).unwrap();
        let e = g.cell(Point::new(3, 3)).unwrap();
        let path = shortest_path(&vertices, &s, &e, open_floor).unwrap();
        assert_eq!(path.len(), 7);
        assert_valid_path(&path, &s, &e, open_floor);
    }

    #[test]
    fn subset_of_cells_as_vertices() {
        // Walls are left out of the vertex set instead of being filtered by
        // the predicate.
        let g = Grid::parse("S#.\n.#.\n..E").unwrap();
        let vertices = g.filter_cells(|c| c.value != '#');
        let (s, e) = endpoints(&g, 'S', 'E');
        let path = shortest_path(&vertices, &s, &e, |a, b| a.is_adjacent_to(b)).unwrap();
        let route: Vec<Point> = path.iter().map(|n| n.pos).collect();
        assert_eq!(
            route,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2)
            ]
        );
    }
}
