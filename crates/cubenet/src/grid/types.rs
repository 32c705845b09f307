//! Grid cells, directions, and the ordered cell set.
//!
//! - `Point`: one unit square at integer grid coordinates.
//! - `FoldDirection`: which edge of a flat cell a neighbor shares.
//! - `CellSet`: the user's selection; a set that remembers insertion order.
//!
//! Convention: +x is grid right, +y is grid down (row index grows downward).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Grid coordinate of one unit square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbor across the edge named by `dir`; `None` past the `i32` border.
    #[inline]
    pub fn step(self, dir: FoldDirection) -> Option<Self> {
        let (dx, dy) = dir.delta();
        self.offset(dx, dy)
    }

    /// Translate by `(dx, dy)`; `None` when a coordinate leaves `i32`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Edge of a flat parent cell shared with a child cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FoldDirection {
    Up,
    Down,
    Left,
    Right,
}

impl FoldDirection {
    /// Neighbor scan order of the fold simulator and connectivity search.
    pub const ALL: [FoldDirection; 4] = [
        FoldDirection::Right,
        FoldDirection::Left,
        FoldDirection::Up,
        FoldDirection::Down,
    ];

    /// Grid delta `(dx, dy)`; UP is `y - 1`.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            FoldDirection::Up => (0, -1),
            FoldDirection::Down => (0, 1),
            FoldDirection::Left => (-1, 0),
            FoldDirection::Right => (1, 0),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            FoldDirection::Up => FoldDirection::Down,
            FoldDirection::Down => FoldDirection::Up,
            FoldDirection::Left => FoldDirection::Right,
            FoldDirection::Right => FoldDirection::Left,
        }
    }
}

impl fmt::Display for FoldDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FoldDirection::Up => "UP",
            FoldDirection::Down => "DOWN",
            FoldDirection::Left => "LEFT",
            FoldDirection::Right => "RIGHT",
        };
        f.write_str(s)
    }
}

/// The active selection: unique points, iterated in insertion order.
///
/// The first inserted point is the seed for every traversal, which keeps
/// results stable for a given selection history.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Point>", into = "Vec<Point>")]
pub struct CellSet {
    order: Vec<Point>,
    members: HashSet<Point>,
}

impl CellSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from any point source; later duplicates are dropped.
    pub fn from_points<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let mut set = Self::new();
        for p in points {
            set.insert(p.into());
        }
        set
    }

    /// Insert `p`; returns `false` if it was already present.
    pub fn insert(&mut self, p: Point) -> bool {
        if self.members.insert(p) {
            self.order.push(p);
            true
        } else {
            false
        }
    }

    /// Remove `p`; returns `false` if it was absent.
    pub fn remove(&mut self, p: Point) -> bool {
        if self.members.remove(&p) {
            self.order.retain(|&q| q != p);
            true
        } else {
            false
        }
    }

    /// Editor click semantics: remove when present, append otherwise.
    /// Returns whether `p` is active afterwards.
    pub fn toggle(&mut self, p: Point) -> bool {
        if self.remove(p) {
            false
        } else {
            self.insert(p)
        }
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.members.contains(&p)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Seed cell (first inserted), if any.
    #[inline]
    pub fn first(&self) -> Option<Point> {
        self.order.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.order.iter().copied()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.order
    }

    /// Present neighbors of `p`, tagged with the edge they share, in
    /// `FoldDirection::ALL` order.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = (FoldDirection, Point)> + '_ {
        self.neighbors_in(p, FoldDirection::ALL)
    }

    /// Like `neighbors`, scanning edges in `order`. Cells past the `i32`
    /// border do not exist, so a point on the border has fewer neighbors.
    pub fn neighbors_in(
        &self,
        p: Point,
        order: [FoldDirection; 4],
    ) -> impl Iterator<Item = (FoldDirection, Point)> + '_ {
        order
            .into_iter()
            .filter_map(move |d| p.step(d).map(|q| (d, q)))
            .filter(move |&(_, q)| self.contains(q))
    }

    /// Rigid translation by `(dx, dy)` with insertion order preserved;
    /// `None` if any cell would leave the `i32` range.
    pub fn translated(&self, dx: i32, dy: i32) -> Option<Self> {
        self.order.iter().map(|p| p.offset(dx, dy)).collect()
    }

    /// Points sorted by `(x, y)`; an order-free view for comparisons.
    pub fn sorted(&self) -> Vec<Point> {
        let mut pts = self.order.clone();
        pts.sort();
        pts
    }
}

/// Equality is set equality; insertion order is ignored.
impl PartialEq for CellSet {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for CellSet {}

impl<P: Into<Point>> FromIterator<P> for CellSet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}

impl From<Vec<Point>> for CellSet {
    fn from(points: Vec<Point>) -> Self {
        Self::from_points(points)
    }
}

impl From<CellSet> for Vec<Point> {
    fn from(set: CellSet) -> Self {
        set.order
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = Point;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Point>>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter().copied()
    }
}
