//! Pattern shapes and their fixed-angle rotation sets.
//!
//! Every pattern carries exactly four orientations, generated once at
//! construction and stored immutably: the base grid followed by 90, 180,
//! and 270 degree clockwise rotations.

mod library;

pub use library::PatternLibrary;

use crate::grid::{Cell, Grid};

/// Number of orientations in a rotation set.
pub const ROTATION_COUNT: usize = 4;

/// Rotates a grid 90 degrees clockwise.
///
/// An `R x C` input yields a `C x R` output where the cell at `(x = j, y = i)`
/// lands at `(x = R - 1 - i, y = j)`. Degenerate single-row and single-column
/// grids rotate like any other rectangle.
pub fn rotate_cw(grid: &Grid) -> Grid {
    let rows = grid.y_size();
    let cols = grid.x_size();
    let mut rotated = vec![vec![Cell::Empty; rows]; cols];

    for i in 0..rows {
        for j in 0..cols {
            if let Some(cell) = grid.cell_at(j as isize, i as isize) {
                rotated[j][rows - 1 - i] = cell;
            }
        }
    }

    Grid::from_rows(rotated)
}

/// A shape together with its four orientations in clockwise order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    rotations: [Grid; ROTATION_COUNT],
}

impl Pattern {
    /// Wraps a base grid and computes its rotation set.
    pub fn new(base: Grid) -> Self {
        let rot90 = rotate_cw(&base);
        let rot180 = rotate_cw(&rot90);
        let rot270 = rotate_cw(&rot180);
        Self {
            rotations: [base, rot90, rot180, rot270],
        }
    }

    /// Returns the unrotated base grid.
    pub fn base(&self) -> &Grid {
        &self.rotations[0]
    }

    /// Returns all four orientations, starting with the base grid.
    pub fn rotations(&self) -> &[Grid; ROTATION_COUNT] {
        &self.rotations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(cells: &[&[Cell]]) -> Grid {
        Grid::from_rows(cells.iter().map(|row| row.to_vec()).collect())
    }

    #[test]
    fn rotate_cw_moves_cells_and_swaps_dimensions() {
        use Cell::{Empty as E, Filled as F};
        let original = grid(&[&[F, E, E], &[F, F, E]]);
        let rotated = rotate_cw(&original);
        assert_eq!((rotated.x_size(), rotated.y_size()), (2, 3));
        assert_eq!(rotated, grid(&[&[F, F], &[F, E], &[E, E]]));
    }

    #[test]
    fn four_rotations_return_to_the_original() {
        use Cell::{Empty as E, Filled as F, Unknown as U};
        for original in [
            grid(&[&[F, E, U, F]]),
            grid(&[&[F], &[U], &[E]]),
            grid(&[&[F, E], &[U, F], &[E, E]]),
        ] {
            let mut current = original.clone();
            for _ in 0..ROTATION_COUNT {
                current = rotate_cw(&current);
            }
            assert_eq!(current, original);
        }
    }
}
