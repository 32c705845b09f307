//! Print every free hexomino with its folding verdict.
//!
//! Purpose
//! - Give a quick visual check that exactly eleven hexominoes fold into a cube
//!   and that the other twenty-four fail on overlap.

use cubenet::catalog::free_polyominoes;
use cubenet::grid::render_grid;
use cubenet::{validate, CellSet};

fn main() {
    let mut valid = 0;
    for (i, shape) in free_polyominoes(6).into_iter().enumerate() {
        let cells = CellSet::from_points(shape);
        let v = validate(&cells);
        if v.valid {
            valid += 1;
        }
        println!("#{i:02} {}", v.category);
        print!("{}", render_grid(&cells));
        println!();
    }
    println!("cube_nets={valid}");
}
