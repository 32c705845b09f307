//! Flat grid layer: cells, edge directions, selections, connectivity.
//!
//! Purpose
//! - Hold the user's selection (`CellSet`) with stable insertion order so
//!   every traversal starts from the same seed.
//! - Answer "is this one 4-connected region" as a total predicate over any
//!   size, independent of the cell-count gate.
//!
//! Code cross-refs: `fold::fold_cells`, `tree::build_folding_tree`, `validate`.

mod connectivity;
mod parse;
mod types;

pub use connectivity::{component_count, component_of, is_connected};
pub use parse::{parse_cells, parse_grid, render_grid, ParseError};
pub use types::{CellSet, FoldDirection, Point};

#[cfg(test)]
mod tests;
