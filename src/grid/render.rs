//! Console-oriented text rendering of grids.

use crate::grid::{Alphabet, Grid};

/// Renders a grid as one text line per row, without a trailing newline.
///
/// Cells render through [`Alphabet::char_for`], so `Unknown` cells come out
/// as the empty character.
pub fn render_grid(grid: &Grid, alphabet: Alphabet) -> String {
    let mut out = String::with_capacity(grid.area() + grid.y_size());
    for y in 0..grid.y_size() {
        if y > 0 {
            out.push('\n');
        }
        if let Some(row) = grid.row(y) {
            for &cell in row {
                out.push(alphabet.char_for(cell));
            }
        }
    }
    out
}
