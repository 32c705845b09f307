//! Cube-net folding engine.
//!
//! Given a selection of unit grid squares, decide whether it folds into a
//! closed cube without overlap, and build the parent/child folding tree a
//! renderer uses to animate the fold.
//!
//! Layout
//! - `grid`: cells, directions, selections, connectivity, text input.
//! - `fold`: orientation propagation and overlap detection.
//! - `tree`: folding tree for previews (any selection, valid or not).
//! - `validate`: count gate → connectivity → folding, as `{valid, category}`.
//! - `catalog`, `sample`: shape enumeration and reproducible random selections.
//!
//! Everything is a pure, synchronous function of its input; no state is
//! kept between calls.

pub mod api;
pub mod catalog;
pub mod cfg;
pub mod fold;
pub mod grid;
pub mod sample;
pub mod tree;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use grid::{CellSet, FoldDirection, Point};
pub use tree::{build_folding_tree, FoldNode};
pub use validate::{validate, validate_detailed, Category, Validation, ValidationReport};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::fold::{can_fold_into_cube, fold_cells, CubeFace, FoldOutcome, Orientation};
    pub use crate::grid::{is_connected, parse_cells, parse_grid, CellSet, FoldDirection, Point};
    pub use crate::tree::{build_folding_tree, FoldNode};
    pub use crate::validate::{validate, validate_detailed, Category, Validation};
}
