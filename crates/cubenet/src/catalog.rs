//! Polyomino catalog: canonical forms, free polyomino enumeration, cube nets.
//!
//! Purpose
//! - Identify shapes up to translation, rotation, and reflection.
//! - Enumerate free n-ominoes by growing every (n-1)-omino one cell at a time.
//! - Pin down the eleven cube nets both as literals and by search.
//!
//! Canonical form: among the 8 symmetry images, each translated so the
//! minimum x and y are 0 and sorted, take the lexicographically least.

use std::collections::BTreeSet;

use crate::grid::{CellSet, FoldDirection, Point};
use crate::validate::is_cube_net;

/// The eleven cube nets, written as they are usually drawn.
///
/// Rows 0-5: the 1-4-1 family (one cell above and one below a row of four).
/// Rows 6-8: 2-3-1. Row 9: 2-2-2 staircase. Row 10: 3-3.
pub const CUBE_NETS: [[(i32, i32); 6]; 11] = [
    [(0, 0), (0, 1), (1, 1), (2, 1), (3, 1), (0, 2)],
    [(0, 0), (0, 1), (1, 1), (2, 1), (3, 1), (1, 2)],
    [(0, 0), (0, 1), (1, 1), (2, 1), (3, 1), (2, 2)],
    [(0, 0), (0, 1), (1, 1), (2, 1), (3, 1), (3, 2)],
    [(1, 0), (0, 1), (1, 1), (2, 1), (3, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (2, 1), (3, 1), (2, 2)],
    [(0, 0), (1, 0), (1, 1), (2, 1), (3, 1), (1, 2)],
    [(0, 0), (1, 0), (1, 1), (2, 1), (3, 1), (2, 2)],
    [(0, 0), (1, 0), (1, 1), (2, 1), (3, 1), (3, 2)],
    [(0, 0), (1, 0), (1, 1), (2, 1), (2, 2), (3, 2)],
    [(0, 0), (1, 0), (2, 0), (2, 1), (3, 1), (4, 1)],
];

/// One of the 8 symmetries of the square grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Symmetry {
    /// Quarter turns, each `(x, y) -> (-y, x)`.
    pub quarter_turns: u8,
    /// Mirror x after rotating.
    pub mirror: bool,
}

impl Symmetry {
    pub const ALL: [Symmetry; 8] = [
        Symmetry::new(0, false),
        Symmetry::new(1, false),
        Symmetry::new(2, false),
        Symmetry::new(3, false),
        Symmetry::new(0, true),
        Symmetry::new(1, true),
        Symmetry::new(2, true),
        Symmetry::new(3, true),
    ];

    pub const fn new(quarter_turns: u8, mirror: bool) -> Self {
        Self {
            quarter_turns: quarter_turns % 4,
            mirror,
        }
    }

    /// Image of `p` about the origin; `None` when it leaves the `i32` range
    /// (only possible for a coordinate equal to `i32::MIN`).
    pub fn apply(self, p: Point) -> Option<Point> {
        narrow(self.apply_wide(widen(p)))
    }

    /// Image of a whole selection with insertion order preserved; `None` if
    /// any cell leaves the `i32` range.
    pub fn apply_set(self, cells: &CellSet) -> Option<CellSet> {
        cells.iter().map(|p| self.apply(p)).collect()
    }

    fn apply_wide(self, (mut x, mut y): Wide) -> Wide {
        for _ in 0..self.quarter_turns {
            (x, y) = (-y, x);
        }
        if self.mirror {
            x = -x;
        }
        (x, y)
    }
}

/// Shape arithmetic runs in `i64` so negating or differencing any pair of
/// `i32` coordinates is exact.
type Wide = (i64, i64);

fn widen(p: Point) -> Wide {
    (i64::from(p.x), i64::from(p.y))
}

fn narrow((x, y): Wide) -> Option<Point> {
    Some(Point::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?))
}

fn normalize_wide(mut pts: Vec<Wide>) -> Vec<Wide> {
    let min_x = pts.iter().map(|p| p.0).min().unwrap_or(0);
    let min_y = pts.iter().map(|p| p.1).min().unwrap_or(0);
    for p in &mut pts {
        *p = (p.0 - min_x, p.1 - min_y);
    }
    pts.sort_unstable();
    pts.dedup();
    pts
}

fn canonical_key(cells: &CellSet) -> Vec<Wide> {
    Symmetry::ALL
        .into_iter()
        .map(|s| normalize_wide(cells.iter().map(|p| s.apply_wide(widen(p))).collect()))
        .min()
        .unwrap_or_default()
}

/// Translate so min x and min y are 0, then sort.
///
/// `None` when the bounding box is wider or taller than `i32::MAX`.
pub fn normalize<I: IntoIterator<Item = Point>>(points: I) -> Option<Vec<Point>> {
    normalize_wide(points.into_iter().map(widen).collect())
        .into_iter()
        .map(narrow)
        .collect()
}

/// Canonical representative of the free polyomino containing `cells`.
///
/// `None` when the shape's extent does not fit in `i32`; `same_shape` still
/// compares such shapes exactly.
pub fn canonical_form(cells: &CellSet) -> Option<Vec<Point>> {
    canonical_key(cells).into_iter().map(narrow).collect()
}

/// True iff `a` and `b` are the same shape up to translation, rotation, and
/// reflection.
pub fn same_shape(a: &CellSet, b: &CellSet) -> bool {
    a.len() == b.len() && canonical_key(a) == canonical_key(b)
}

/// All free polyominoes with `n` cells, as canonical forms in sorted order.
///
/// Counts for n = 1..=6 are 1, 1, 2, 5, 12, 35. `n == 0` yields nothing.
pub fn free_polyominoes(n: usize) -> Vec<Vec<Point>> {
    if n == 0 {
        return Vec::new();
    }
    let mut level: BTreeSet<Vec<Point>> = BTreeSet::from([vec![Point::new(0, 0)]]);
    for _ in 1..n {
        let mut next = BTreeSet::new();
        for shape in &level {
            let cells = CellSet::from_points(shape.iter().copied());
            for &p in shape {
                for q in FoldDirection::ALL.into_iter().filter_map(|d| p.step(d)) {
                    if cells.contains(q) {
                        continue;
                    }
                    let mut grown = cells.clone();
                    grown.insert(q);
                    if let Some(form) = canonical_form(&grown) {
                        next.insert(form);
                    }
                }
            }
        }
        level = next;
    }
    level.into_iter().collect()
}

/// Hexominoes that fold into a cube, found by search (exactly eleven).
pub fn cube_nets() -> Vec<CellSet> {
    free_polyominoes(6)
        .into_iter()
        .map(CellSet::from_points)
        .filter(is_cube_net)
        .collect()
}

/// `CUBE_NETS` as cell sets.
pub fn canonical_cube_nets() -> Vec<CellSet> {
    CUBE_NETS.iter().map(|net| CellSet::from_points(*net)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::{CUBE_NET_COUNT, FREE_HEXOMINOES};

    #[test]
    fn free_polyomino_counts() {
        let counts: Vec<usize> = (0..=6).map(|n| free_polyominoes(n).len()).collect();
        assert_eq!(counts, vec![0, 1, 1, 2, 5, 12, FREE_HEXOMINOES]);
    }

    #[test]
    fn literal_nets_are_eleven_distinct_shapes() {
        let forms: BTreeSet<_> = canonical_cube_nets()
            .iter()
            .filter_map(canonical_form)
            .collect();
        assert_eq!(forms.len(), CUBE_NET_COUNT);
    }

    #[test]
    fn search_finds_exactly_the_literal_nets() {
        let found: BTreeSet<_> = cube_nets()
            .iter()
            .filter_map(canonical_form)
            .collect();
        let literal: BTreeSet<_> = canonical_cube_nets()
            .iter()
            .filter_map(canonical_form)
            .collect();
        assert_eq!(found.len(), CUBE_NET_COUNT);
        assert_eq!(found, literal);
    }

    #[test]
    fn symmetries_form_a_group_of_eight() {
        let p = Point::new(2, 1);
        let images: BTreeSet<_> = Symmetry::ALL.iter().filter_map(|s| s.apply(p)).collect();
        assert_eq!(images.len(), 8);
        let turn = Symmetry::new(1, false);
        let mut q = p;
        for _ in 0..4 {
            q = turn.apply(q).unwrap();
        }
        assert_eq!(q, p);
    }

    #[test]
    fn canonical_form_ignores_placement() {
        let l = CellSet::from_points([(0, 0), (0, 1), (0, 2), (1, 2)]);
        let moved = Symmetry::new(3, true)
            .apply_set(&l)
            .and_then(|c| c.translated(-7, 12))
            .unwrap();
        assert!(same_shape(&l, &moved));
        let line = CellSet::from_points([(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert!(!same_shape(&l, &line));
    }

    #[test]
    fn normalize_handles_empty() {
        assert_eq!(normalize(Vec::new()), Some(Vec::new()));
        assert_eq!(canonical_form(&CellSet::new()), Some(Vec::new()));
    }

    #[test]
    fn shapes_on_the_coordinate_border() {
        let corner = Point::new(i32::MIN, i32::MAX);
        assert_eq!(Symmetry::new(2, false).apply(corner), None);
        assert_eq!(Symmetry::new(0, false).apply(corner), Some(corner));

        let l = CellSet::from_points([(0, 0), (0, 1), (0, 2), (1, 2)]);
        let edge = CellSet::from_points([
            (i32::MIN, i32::MAX - 2),
            (i32::MIN, i32::MAX - 1),
            (i32::MIN, i32::MAX),
            (i32::MIN + 1, i32::MAX),
        ]);
        assert_eq!(canonical_form(&edge), canonical_form(&l));
        assert!(same_shape(&l, &edge));

        let spread = CellSet::from_points([(i32::MIN, 0), (i32::MAX, 0)]);
        let shifted = CellSet::from_points([(i32::MIN, 7), (i32::MAX, 7)]);
        assert_eq!(canonical_form(&spread), None);
        assert_eq!(normalize(spread.iter()), None);
        assert!(same_shape(&spread, &shifted));
        assert!(!same_shape(&spread, &CellSet::from_points([(0, 0), (1, 0)])));
    }
}
