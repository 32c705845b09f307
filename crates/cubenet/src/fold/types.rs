//! Orientation state and cube faces used by the folding simulation.
//!
//! - `Vec3i`: integer axis vector (components in {-1, 0, 1}).
//! - `Orientation`: `(normal, up)` of a folded cell; `right = normal × up`.
//! - `CubeFace`: the six faces named by outward normal.
//! - `Placement`, `Collision`, `FoldOutcome`: simulation results.

use nalgebra::Vector3;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::grid::{FoldDirection, Point};

/// Integer 3-vector; equality and hashing are exact.
pub type Vec3i = Vector3<i32>;

/// `(normal, up)` frame of one cell.
///
/// Invariant: `normal` and `up` are orthogonal axis-aligned unit vectors.
/// `up` is the 3D image of the cell's grid-up edge direction (y - 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Orientation {
    pub normal: Vec3i,
    pub up: Vec3i,
}

impl Orientation {
    /// Seed frame: the first cell lies on the bottom face, grid-up pointing back.
    pub fn seed() -> Self {
        Self {
            normal: Vec3i::new(0, -1, 0),
            up: Vec3i::new(0, 0, -1),
        }
    }

    /// Implicit grid-right direction in 3D.
    #[inline]
    pub fn right(&self) -> Vec3i {
        self.normal.cross(&self.up)
    }

    /// Frame of the neighbor across edge `dir` after folding it 90° onto the cube.
    ///
    /// Every rule keeps `right = normal × up` consistent:
    /// RIGHT/LEFT rotate about `up`, UP/DOWN rotate about `right`.
    pub fn step(&self, dir: FoldDirection) -> Self {
        let (n, u) = (self.normal, self.up);
        match dir {
            FoldDirection::Right => Self {
                normal: self.right(),
                up: u,
            },
            FoldDirection::Left => Self {
                normal: -self.right(),
                up: u,
            },
            FoldDirection::Up => Self { normal: u, up: -n },
            FoldDirection::Down => Self { normal: -u, up: n },
        }
    }

    /// Both vectors are axis unit vectors and orthogonal.
    pub fn is_orthonormal_axis_frame(&self) -> bool {
        is_axis_unit(&self.normal) && is_axis_unit(&self.up) && self.normal.dot(&self.up) == 0
    }

    /// Face covered by this frame's normal.
    #[inline]
    pub fn face(&self) -> CubeFace {
        CubeFace::along(&self.normal)
    }
}

fn is_axis_unit(v: &Vec3i) -> bool {
    v.iter().map(|c| c.abs()).sum::<i32>() == 1 && v.iter().all(|c| c.abs() <= 1)
}

/// Cube face named by its outward normal (y is vertical, -z is back).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CubeFace {
    Bottom,
    Top,
    Back,
    Front,
    Left,
    Right,
}

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Bottom,
        CubeFace::Top,
        CubeFace::Back,
        CubeFace::Front,
        CubeFace::Left,
        CubeFace::Right,
    ];

    pub fn normal(self) -> Vec3i {
        match self {
            CubeFace::Bottom => Vec3i::new(0, -1, 0),
            CubeFace::Top => Vec3i::new(0, 1, 0),
            CubeFace::Back => Vec3i::new(0, 0, -1),
            CubeFace::Front => Vec3i::new(0, 0, 1),
            CubeFace::Left => Vec3i::new(-1, 0, 0),
            CubeFace::Right => Vec3i::new(1, 0, 0),
        }
    }

    /// Exact inverse of `normal`.
    pub fn from_normal(n: &Vec3i) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.normal() == *n)
    }

    /// Face whose normal shares the sign of the first non-zero component of
    /// `n` (x, then y, then z). Agrees with `from_normal` on axis unit vectors.
    pub fn along(n: &Vec3i) -> Self {
        match (n.x.signum(), n.y.signum(), n.z.signum()) {
            (1, _, _) => CubeFace::Right,
            (-1, _, _) => CubeFace::Left,
            (_, 1, _) => CubeFace::Top,
            (_, -1, _) => CubeFace::Bottom,
            (_, _, 1) => CubeFace::Front,
            _ => CubeFace::Back,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            CubeFace::Bottom => CubeFace::Top,
            CubeFace::Top => CubeFace::Bottom,
            CubeFace::Back => CubeFace::Front,
            CubeFace::Front => CubeFace::Back,
            CubeFace::Left => CubeFace::Right,
            CubeFace::Right => CubeFace::Left,
        }
    }
}

impl fmt::Display for CubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Where one cell ended up after folding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub cell: Point,
    pub face: CubeFace,
    #[serde(serialize_with = "ser_vec3i")]
    pub normal: Vec3i,
    #[serde(serialize_with = "ser_vec3i")]
    pub up: Vec3i,
}

impl Placement {
    pub(crate) fn new(cell: Point, o: Orientation) -> Self {
        Self {
            cell,
            face: o.face(),
            normal: o.normal,
            up: o.up,
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation {
            normal: self.normal,
            up: self.up,
        }
    }
}

/// Two cells folded onto the same face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Collision {
    /// Cell whose fold was rejected.
    pub cell: Point,
    /// Already-placed neighbor it was folded from.
    pub parent: Point,
    /// Edge of `parent` shared with `cell`.
    pub direction: FoldDirection,
    pub face: CubeFace,
    /// Cell that already covers `face`.
    pub occupant: Point,
}

/// Result of a folding run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FoldOutcome {
    /// Every reachable cell found its own face; placements in BFS order.
    Folded(Vec<Placement>),
    /// Folding stopped at the first face conflict.
    Overlap(Collision),
}

impl FoldOutcome {
    #[inline]
    pub fn is_folded(&self) -> bool {
        matches!(self, FoldOutcome::Folded(_))
    }

    pub fn placements(&self) -> Option<&[Placement]> {
        match self {
            FoldOutcome::Folded(p) => Some(p),
            FoldOutcome::Overlap(_) => None,
        }
    }

    pub fn collision(&self) -> Option<&Collision> {
        match self {
            FoldOutcome::Folded(_) => None,
            FoldOutcome::Overlap(c) => Some(c),
        }
    }
}

fn ser_vec3i<S: Serializer>(v: &Vec3i, s: S) -> Result<S::Ok, S::Error> {
    [v.x, v.y, v.z].serialize(s)
}
