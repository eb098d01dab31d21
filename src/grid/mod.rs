//! Grid storage and cell values.
//!
//! `Grid` is a dense row-major container of three-valued cells. Coordinates
//! are signed so that callers probing outside the grid (negative offsets,
//! neighbor lookups at the border) get `None` instead of an error; an absent
//! cell is distinct from a stored `Unknown`.

use crate::util::ScanResult;

pub mod parse;
pub mod render;

pub use parse::{Alphabet, GridParser};
pub use render::render_grid;

/// Three-valued cell content parsed from radar or pattern text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    /// A cell known to be occupied.
    Filled,
    /// A cell known to be clear.
    Empty,
    /// A cell whose reading could not be classified.
    Unknown,
}

/// Dense rectangular grid of cells with cached dimensions.
///
/// Rows all share the same length. Row consistency is the responsibility of
/// whoever builds the rows (the parser validates text input); `push_row`
/// itself does not re-check.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    x_size: usize,
    y_size: usize,
}

impl Grid {
    /// Creates an empty grid with zero width and height.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a grid from pre-built rows of equal length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let mut grid = Self {
            rows,
            x_size: 0,
            y_size: 0,
        };
        grid.recalculate_size();
        grid
    }

    /// Parses text into a grid using the given parser.
    ///
    /// Surfaces the parser's `InvalidData`-family errors unchanged; no
    /// recovery is attempted here.
    pub fn from_text(text: &str, parser: &GridParser) -> ScanResult<Self> {
        let rows = parser.parse(text)?;
        Ok(Self::from_rows(rows))
    }

    /// Returns the grid width in cells.
    pub fn x_size(&self) -> usize {
        self.x_size
    }

    /// Returns the grid height in cells.
    pub fn y_size(&self) -> usize {
        self.y_size
    }

    /// Returns the total number of cells.
    pub fn area(&self) -> usize {
        self.x_size * self.y_size
    }

    /// Returns true if the grid holds no cells in either dimension.
    pub fn is_empty(&self) -> bool {
        self.x_size == 0 || self.y_size == 0
    }

    /// Returns the stored cell at `(x, y)`, or `None` outside the bounds.
    pub fn cell_at(&self, x: isize, y: isize) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.x_size || y >= self.y_size {
            return None;
        }
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Returns a borrowed slice for row `y`.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        self.rows.get(y).map(Vec::as_slice)
    }

    /// Appends one row and recomputes the cached dimensions.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
        self.recalculate_size();
    }

    /// Returns a cloned snapshot of the rows, never a live alias.
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.rows.clone()
    }

    fn recalculate_size(&mut self) {
        self.y_size = self.rows.len();
        self.x_size = self.rows.first().map_or(0, Vec::len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_has_zero_sizes() {
        let grid = Grid::new();
        assert_eq!(grid.x_size(), 0);
        assert_eq!(grid.y_size(), 0);
        assert!(grid.is_empty());
        assert_eq!(grid.cell_at(0, 0), None);
    }

    #[test]
    fn push_row_recomputes_sizes() {
        let mut grid = Grid::new();
        grid.push_row(vec![Cell::Filled, Cell::Empty]);
        assert_eq!((grid.x_size(), grid.y_size()), (2, 1));
        grid.push_row(vec![Cell::Unknown, Cell::Filled]);
        assert_eq!((grid.x_size(), grid.y_size()), (2, 2));
        assert_eq!(grid.area(), 4);
    }

    #[test]
    fn cell_at_rejects_all_out_of_bounds_coordinates() {
        let grid = Grid::from_rows(vec![vec![Cell::Filled, Cell::Empty]]);
        assert_eq!(grid.cell_at(0, 0), Some(Cell::Filled));
        assert_eq!(grid.cell_at(1, 0), Some(Cell::Empty));
        assert_eq!(grid.cell_at(-1, 0), None);
        assert_eq!(grid.cell_at(0, -1), None);
        assert_eq!(grid.cell_at(2, 0), None);
        assert_eq!(grid.cell_at(0, 1), None);
    }
}
