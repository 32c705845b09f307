//! 4-neighbor connectivity over a `CellSet` (no diagonals).

use std::collections::{HashSet, VecDeque};

use super::types::{CellSet, Point};

/// Cells reachable from `seed` through present 4-neighbors, in BFS order.
///
/// Returns an empty vector when `seed` is not in the set.
pub fn component_of(cells: &CellSet, seed: Point) -> Vec<Point> {
    if !cells.contains(seed) {
        return Vec::new();
    }
    let mut seen: HashSet<Point> = HashSet::with_capacity(cells.len());
    let mut order = Vec::with_capacity(cells.len());
    let mut queue = VecDeque::from([seed]);
    seen.insert(seed);
    while let Some(cur) = queue.pop_front() {
        order.push(cur);
        for (_, next) in cells.neighbors(cur) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    order
}

/// True iff every cell is reachable from the first one.
///
/// The empty set is vacuously connected. Whether a selection has the right
/// number of cells is a separate gate (see `validate`).
pub fn is_connected(cells: &CellSet) -> bool {
    match cells.first() {
        None => true,
        Some(seed) => component_of(cells, seed).len() == cells.len(),
    }
}

/// Number of 4-connected components; 0 for the empty set.
pub fn component_count(cells: &CellSet) -> usize {
    let mut seen: HashSet<Point> = HashSet::with_capacity(cells.len());
    let mut count = 0;
    for p in cells {
        if seen.contains(&p) {
            continue;
        }
        count += 1;
        seen.extend(component_of(cells, p));
    }
    count
}
