//! Cube-net validation: count gate, connectivity, then folding.
//!
//! The three checks are independent and composed here in a fixed order, so a
//! caller always learns the first reason a selection fails:
//! `WrongCount` → `NotConnected` → `Overlap` → `Valid`.

use serde::Serialize;
use std::fmt;

use crate::cfg::CUBE_FACES;
use crate::fold::{fold_cells, Collision, FoldOutcome, Placement};
use crate::grid::{component_count, is_connected, CellSet};

/// Why a selection is or is not a cube net.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    WrongCount,
    NotConnected,
    Overlap,
    Valid,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::WrongCount,
        Category::NotConnected,
        Category::Overlap,
        Category::Valid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::WrongCount => "WRONG_COUNT",
            Category::NotConnected => "NOT_CONNECTED",
            Category::Overlap => "OVERLAP",
            Category::Valid => "VALID",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `{ valid, category }`; `valid` is true iff `category == Valid`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Validation {
    pub valid: bool,
    pub category: Category,
}

impl From<Category> for Validation {
    fn from(category: Category) -> Self {
        Self {
            valid: category == Category::Valid,
            category,
        }
    }
}

/// Validation plus the evidence behind it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    #[serde(flatten)]
    pub validation: Validation,
    pub cell_count: usize,
    pub components: usize,
    /// Face assignment per cell; present only when folding ran and succeeded.
    pub placements: Option<Vec<Placement>>,
    /// First face conflict; present only for `Overlap`.
    pub collision: Option<Collision>,
}

/// Decide whether `cells` is a cube net.
///
/// The folding simulation runs only for six connected cells.
pub fn validate(cells: &CellSet) -> Validation {
    if cells.len() != CUBE_FACES {
        return Category::WrongCount.into();
    }
    if !is_connected(cells) {
        return Category::NotConnected.into();
    }
    if fold_cells(cells).is_folded() {
        Category::Valid.into()
    } else {
        Category::Overlap.into()
    }
}

/// Same decision as `validate`, with placements or the collision attached.
pub fn validate_detailed(cells: &CellSet) -> ValidationReport {
    let mut report = ValidationReport {
        validation: Category::WrongCount.into(),
        cell_count: cells.len(),
        components: component_count(cells),
        placements: None,
        collision: None,
    };
    if cells.len() != CUBE_FACES {
        return report;
    }
    if report.components != 1 {
        report.validation = Category::NotConnected.into();
        return report;
    }
    match fold_cells(cells) {
        FoldOutcome::Folded(placements) => {
            report.validation = Category::Valid.into();
            report.placements = Some(placements);
        }
        FoldOutcome::Overlap(collision) => {
            report.validation = Category::Overlap.into();
            report.collision = Some(collision);
        }
    }
    tracing::debug!(
        cells = report.cell_count,
        category = %report.validation.category,
        "validated selection"
    );
    report
}

/// Shorthand for `validate(cells).valid`.
#[inline]
pub fn is_cube_net(cells: &CellSet) -> bool {
    validate(cells).valid
}
