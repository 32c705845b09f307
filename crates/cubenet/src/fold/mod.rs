//! Orientation simulation: fold a flat selection onto a unit cube.
//!
//! Purpose
//! - Assign every cell a `(normal, up)` frame by breadth-first propagation
//!   from a fixed seed frame and report the first pair of cells that land on
//!   the same face.
//!
//! Model
//! - Grid: +x right, +y down. Seed cell: normal (0,-1,0), up (0,0,-1).
//! - One cross-product convention (`right = normal × up`) drives all four
//!   edge rules in `Orientation::step`.
//! - A selection of six connected cells folds into a cube iff the six normals
//!   are pairwise distinct.
//!
//! Code cross-refs: `grid::CellSet`, `validate::validate`.

mod simulate;
mod types;

pub use simulate::{can_fold_into_cube, fold_cells};
pub use types::{Collision, CubeFace, FoldOutcome, Orientation, Placement, Vec3i};
