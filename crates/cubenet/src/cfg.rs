//! Fixed constants shared across modules.
//!
//! Policy
//! - The engine only targets the cube, so these are constants rather than a
//!   runtime `Config`.

/// Faces of a cube; also the exact cell count of a cube net.
pub const CUBE_FACES: usize = 6;

/// Free hexominoes (rotations and reflections identified).
pub const FREE_HEXOMINOES: usize = 35;

/// Free hexominoes that fold into a cube.
pub const CUBE_NET_COUNT: usize = 11;
