//! Folding tree: parent/child adjacency for fold-in-progress previews.
//!
//! The tree is a BFS spanning tree of the seed's 4-connected component. A
//! renderer walks it, pivots each child about the shared edge named by its
//! `FoldDirection`, and interpolates the hinge angle from its own progress
//! value. No orientation bookkeeping happens here; that is `fold`'s job.
//!
//! Works on any selection, including incomplete or invalid ones, so the
//! preview can update after every cell toggle.
//!
//! Children are listed RIGHT, LEFT, DOWN, UP (`CHILD_ORDER`), which is what
//! renderers consuming the child lists expect. The fold simulator scans UP
//! before DOWN; both orders span the same component.

use serde::Serialize;
use std::collections::{HashSet, VecDeque};

use crate::grid::{CellSet, FoldDirection, Point};

/// Edge scan order used when attaching children.
pub const CHILD_ORDER: [FoldDirection; 4] = [
    FoldDirection::Right,
    FoldDirection::Left,
    FoldDirection::Down,
    FoldDirection::Up,
];

/// One cell in the folding tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FoldNode {
    pub point: Point,
    /// Edge of the parent this cell hangs from; `None` only for the root.
    pub direction: Option<FoldDirection>,
    pub children: Vec<FoldNode>,
}

impl FoldNode {
    fn leaf(point: Point, direction: Option<FoldDirection>) -> Self {
        Self {
            point,
            direction,
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always false; a node counts itself.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Pre-order traversal (node before its children, children in order).
    pub fn iter(&self) -> impl Iterator<Item = &FoldNode> + '_ {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Edges as `(parent, direction, child)` in pre-order.
    pub fn edges(&self) -> Vec<(Point, FoldDirection, Point)> {
        let mut out = Vec::new();
        for node in self.iter() {
            for child in &node.children {
                if let Some(dir) = child.direction {
                    out.push((node.point, dir, child.point));
                }
            }
        }
        out
    }

    /// Height of the subtree; a lone node has depth 0.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Flat (unfolded) offset of every node relative to this one, recomputed
    /// purely from the recorded directions.
    pub fn flat_layout(&self) -> Vec<(Point, Point)> {
        let mut out = Vec::new();
        let mut stack = vec![(self, Point::new(0, 0))];
        while let Some((node, at)) = stack.pop() {
            out.push((node.point, at));
            for child in node.children.iter().rev() {
                if let Some(next) = child.direction.and_then(|dir| at.step(dir)) {
                    stack.push((child, next));
                }
            }
        }
        out
    }
}

/// Build the folding tree rooted at the first cell.
///
/// Returns `None` for an empty selection. Cells outside the root's component
/// are silently left out; connectivity is checked elsewhere.
pub fn build_folding_tree(cells: &CellSet) -> Option<FoldNode> {
    let root = cells.first()?;

    // Flat arena first: (point, direction, parent index).
    let mut arena: Vec<(Point, Option<FoldDirection>, Option<usize>)> = vec![(root, None, None)];
    let mut seen: HashSet<Point> = HashSet::from([root]);
    let mut queue = VecDeque::from([0usize]);
    while let Some(idx) = queue.pop_front() {
        let here = arena[idx].0;
        for (dir, next) in cells.neighbors_in(here, CHILD_ORDER) {
            if seen.insert(next) {
                arena.push((next, Some(dir), Some(idx)));
                queue.push_back(arena.len() - 1);
            }
        }
    }
    tracing::trace!(nodes = arena.len(), cells = cells.len(), "folding tree");

    // Children always follow their parent in BFS order, so folding the arena
    // back to front attaches every subtree before its parent is reached.
    let mut nodes: Vec<Option<FoldNode>> = arena
        .iter()
        .map(|&(p, d, _)| Some(FoldNode::leaf(p, d)))
        .collect();
    for idx in (1..arena.len()).rev() {
        let (Some(parent), Some(child)) = (arena[idx].2, nodes[idx].take()) else {
            continue;
        };
        if let Some(parent_node) = nodes[parent].as_mut() {
            parent_node.children.push(child);
        }
    }
    let mut root_node = nodes[0].take()?;
    restore_bfs_order(&mut root_node);
    Some(root_node)
}

/// Children were attached back to front; flip every child list.
fn restore_bfs_order(node: &mut FoldNode) {
    node.children.reverse();
    for child in &mut node.children {
        restore_bfs_order(child);
    }
}
