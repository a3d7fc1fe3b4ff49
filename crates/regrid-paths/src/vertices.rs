use std::collections::HashMap;

use regrid_core::{Node, Point};

use crate::error::{Endpoint, PathError, Result};

/// Positional index over a caller-supplied vertex slice.
///
/// Duplicate positions collapse onto their first occurrence, so the
/// iteration order of `nodes` is the order of first appearance.
pub(crate) struct Vertices<'a, T> {
    pub(crate) nodes: Vec<&'a Node<T>>,
    index: HashMap<Point, usize>,
}

impl<'a, T> Vertices<'a, T> {
    pub(crate) fn new(vertices: &'a [Node<T>]) -> Self {
        let mut nodes = Vec::with_capacity(vertices.len());
        let mut index = HashMap::with_capacity(vertices.len());
        for v in vertices {
            index.entry(v.pos).or_insert_with(|| {
                nodes.push(v);
                nodes.len() - 1
            });
        }
        Self { nodes, index }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Index of `node`, or [`PathError::InvalidArgument`] naming `which`.
    pub(crate) fn require(&self, which: Endpoint, node: &Node<T>) -> Result<usize> {
        self.index
            .get(&node.pos)
            .copied()
            .ok_or(PathError::InvalidArgument {
                which,
                pos: node.pos,
            })
    }
}
