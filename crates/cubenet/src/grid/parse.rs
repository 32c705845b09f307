//! Text input for selections: coordinate lists and 0/1 grid masks.

use std::fmt;

use super::types::{CellSet, Point};

/// Errors from `parse_cells` / `parse_grid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A coordinate token is not an integer.
    BadNumber { token: String },
    /// The list holds an odd number of coordinates.
    DanglingCoordinate { value: i32 },
    /// A grid row contains a character other than `1`, `#`, `0`, `.`.
    BadGridChar { row: usize, col: usize, ch: char },
    /// Grid is wider than `i32::MAX` columns or taller than `i32::MAX` rows.
    GridTooLarge,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadNumber { token } => write!(f, "not an integer coordinate: {token:?}"),
            ParseError::DanglingCoordinate { value } => {
                write!(f, "coordinate {value} has no partner (odd number of values)")
            }
            ParseError::BadGridChar { row, col, ch } => write!(
                f,
                "unexpected {ch:?} at row {row}, column {col} (use 1/# or 0/.)"
            ),
            ParseError::GridTooLarge => write!(f, "grid exceeds i32 coordinate range"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse `"1,0 0,1; 2,1"` into a cell set.
///
/// Any mix of commas, semicolons, and whitespace separates numbers; values
/// are paired up in order. Duplicates keep their first position.
pub fn parse_cells(text: &str) -> Result<CellSet, ParseError> {
    let mut values = Vec::new();
    for token in text
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        let token = token.trim_matches(|c| c == '(' || c == ')');
        if token.is_empty() {
            continue;
        }
        let v: i32 = token.parse().map_err(|_| ParseError::BadNumber {
            token: token.to_string(),
        })?;
        values.push(v);
    }
    if values.len() % 2 == 1 {
        return Err(ParseError::DanglingCoordinate {
            value: values[values.len() - 1],
        });
    }
    Ok(values
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect())
}

/// Parse a grid mask: one text row per grid row (y), one char per column (x).
///
/// `1`/`#` mark active cells, `0`/`.` inactive ones. Blank lines are skipped
/// without advancing y; inner spaces are ignored. Cells are inserted in
/// row-major order, so the top-left active cell becomes the seed.
pub fn parse_grid(text: &str) -> Result<CellSet, ParseError> {
    let mut cells = CellSet::new();
    let rows = text.lines().map(str::trim).filter(|l| !l.is_empty());
    for (row, line) in rows.enumerate() {
        let y = i32::try_from(row).map_err(|_| ParseError::GridTooLarge)?;
        for (col, ch) in line.chars().filter(|c| !c.is_whitespace()).enumerate() {
            match ch {
                '1' | '#' => {
                    let x = i32::try_from(col).map_err(|_| ParseError::GridTooLarge)?;
                    cells.insert(Point::new(x, y));
                }
                '0' | '.' => {}
                _ => return Err(ParseError::BadGridChar { row, col, ch }),
            }
        }
    }
    Ok(cells)
}

/// Render cells as a grid mask over their bounding box (inverse of `parse_grid`
/// up to translation).
pub fn render_grid(cells: &CellSet) -> String {
    let Some(first) = cells.first() else {
        return String::new();
    };
    let (mut x0, mut y0, mut x1, mut y1) = (first.x, first.y, first.x, first.y);
    for p in cells {
        x0 = x0.min(p.x);
        y0 = y0.min(p.y);
        x1 = x1.max(p.x);
        y1 = y1.max(p.y);
    }
    let mut out = String::new();
    for y in y0..=y1 {
        for x in x0..=x1 {
            out.push(if cells.contains(Point::new(x, y)) {
                '#'
            } else {
                '.'
            });
        }
        out.push('\n');
    }
    out
}
