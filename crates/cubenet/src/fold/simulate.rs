//! Breadth-first folding with an occupied-face check.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::cfg::CUBE_FACES;
use crate::grid::{CellSet, Point};

use super::types::{Collision, FoldOutcome, Orientation, Placement, Vec3i};

/// Fold `cells` onto a unit cube starting from the first cell.
///
/// Walks the seed's 4-connected component with an explicit queue of
/// `(cell, orientation)` pairs. Each newly reached neighbor gets its frame
/// from `Orientation::step`; if its normal is already taken the run stops
/// with `FoldOutcome::Overlap`. Cells outside the seed's component are not
/// placed, so callers gate on connectivity first.
///
/// An empty set folds trivially (`Folded(vec![])`).
pub fn fold_cells(cells: &CellSet) -> FoldOutcome {
    let Some(root) = cells.first() else {
        return FoldOutcome::Folded(Vec::new());
    };
    let seed = Orientation::seed();
    let mut occupied: HashMap<Vec3i, Point> = HashMap::with_capacity(CUBE_FACES);
    let mut visited: HashSet<Point> = HashSet::with_capacity(cells.len());
    let mut placements = Vec::with_capacity(cells.len());
    let mut queue: VecDeque<(Point, Orientation)> = VecDeque::new();

    occupied.insert(seed.normal, root);
    visited.insert(root);
    queue.push_back((root, seed));

    while let Some((cur, frame)) = queue.pop_front() {
        debug_assert!(frame.is_orthonormal_axis_frame());
        placements.push(Placement::new(cur, frame));
        for (dir, next) in cells.neighbors(cur) {
            if visited.contains(&next) {
                continue;
            }
            let child = frame.step(dir);
            if let Some(&occupant) = occupied.get(&child.normal) {
                let face = child.face();
                tracing::trace!(
                    cell = %next,
                    parent = %cur,
                    %dir,
                    %face,
                    occupant = %occupant,
                    "fold overlap"
                );
                return FoldOutcome::Overlap(Collision {
                    cell: next,
                    parent: cur,
                    direction: dir,
                    face,
                    occupant,
                });
            }
            occupied.insert(child.normal, next);
            visited.insert(next);
            queue.push_back((next, child));
        }
    }
    tracing::trace!(placed = placements.len(), "fold complete");
    FoldOutcome::Folded(placements)
}

/// True iff folding completes with no two cells on the same face.
///
/// Only the connectivity precondition matters for termination; the
/// "exactly six cells" gate belongs to `validate`.
pub fn can_fold_into_cube(cells: &CellSet) -> bool {
    fold_cells(cells).is_folded()
}
