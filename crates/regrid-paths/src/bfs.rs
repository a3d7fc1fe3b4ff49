use std::collections::VecDeque;

use regrid_core::Node;

use crate::PathNode;
use crate::UNREACHABLE;
use crate::error::{Endpoint, Result};
use crate::vertices::Vertices;

/// Compute breadth-first hop distances from `source`.
///
/// Uses the same `is_neighbor(candidate, current)` convention as
/// [`shortest_path`](crate::shortest_path). Returns every reached vertex
/// with its distance, in visitation order (non-decreasing cost, `source`
/// first at cost 0). Vertices that cannot be reached are absent.
///
/// # Errors
///
/// [`PathError::InvalidArgument`](crate::PathError::InvalidArgument) when
/// `source` is not in `vertices`.
pub fn bfs_distances<T, F>(
    vertices: &[Node<T>],
    source: &Node<T>,
    mut is_neighbor: F,
) -> Result<Vec<PathNode>>
where
    F: FnMut(&Node<T>, &Node<T>) -> bool,
{
    let graph = Vertices::new(vertices);
    let si = graph.require(Endpoint::Source, source)?;

    let mut dist = vec![UNREACHABLE; graph.len()];
    let mut results = Vec::new();
    let mut queue: VecDeque<usize> = VecDeque::new();

    dist[si] = 0;
    queue.push_back(si);
    results.push(PathNode {
        pos: graph.nodes[si].pos,
        cost: 0,
    });

    while let Some(ci) = queue.pop_front() {
        let nd = dist[ci] + 1;
        for ni in 0..graph.len() {
            if dist[ni] != UNREACHABLE {
                continue;
            }
            if !is_neighbor(graph.nodes[ni], graph.nodes[ci]) {
                continue;
            }
            dist[ni] = nd;
            queue.push_back(ni);
            results.push(PathNode {
                pos: graph.nodes[ni].pos,
                cost: nd,
            });
        }
    }

    log::debug!("bfs from {} reached {} vertices", source.pos, results.len());
    Ok(results)
}
