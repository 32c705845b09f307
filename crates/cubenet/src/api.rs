//! Curated surface for front ends (CLI, UI bindings).
//!
//! Important
//! - One import path for everything a front end needs: input parsing,
//!   validation, the folding tree, and the catalog.
//! - Internal helpers (frame rules, symmetry images) stay in their modules.

// Input
pub use crate::grid::{parse_cells, parse_grid, render_grid, CellSet, ParseError, Point};
// Validation
pub use crate::fold::{Collision, CubeFace, Placement};
pub use crate::validate::{validate, validate_detailed, Category, Validation, ValidationReport};
// Preview
pub use crate::tree::{build_folding_tree, FoldNode};
// Catalog and sampling
pub use crate::catalog::{canonical_form, cube_nets, free_polyominoes, same_shape, CUBE_NETS};
pub use crate::sample::{draw_polyomino, draw_scatter, GrowCfg, ReplayToken, ScatterCfg};

use crate::grid::FoldDirection;

/// Per-direction child counts of a folding tree, in `FoldDirection::ALL` order.
///
/// Handy for previews that batch hinges by rotation axis.
pub fn hinge_histogram(tree: &FoldNode) -> [(FoldDirection, usize); 4] {
    let mut out = FoldDirection::ALL.map(|d| (d, 0usize));
    for node in tree.iter() {
        if let Some(dir) = node.direction {
            if let Some(slot) = out.iter_mut().find(|(d, _)| *d == dir) {
                slot.1 += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hinge_histogram_counts_children_by_edge() {
        let cells = parse_cells("1,0 0,1 1,1 2,1 3,1 1,2").unwrap();
        let tree = build_folding_tree(&cells).unwrap();
        let h = hinge_histogram(&tree);
        assert_eq!(
            h,
            [
                (FoldDirection::Right, 2),
                (FoldDirection::Left, 1),
                (FoldDirection::Up, 0),
                (FoldDirection::Down, 2),
            ]
        );
        assert_eq!(h.iter().map(|(_, n)| n).sum::<usize>(), tree.len() - 1);
    }

    #[test]
    fn grid_input_validates_like_list_input() {
        let from_grid = parse_grid(".#..\n####\n.#..").unwrap();
        let from_list = parse_cells("1,0 0,1 1,1 2,1 3,1 1,2").unwrap();
        assert_eq!(from_grid, from_list);
        assert_eq!(validate(&from_grid), validate(&from_list));
        assert!(cube_nets().iter().any(|net| same_shape(net, &from_grid)));
    }
}
