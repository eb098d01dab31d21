//! Per-placement fuzzy similarity scoring.
//!
//! A placement is scored cell by cell over the pattern: exact agreement with
//! the radar earns the full weight, agreement with any of the 8 neighboring
//! radar cells earns a reduced weight, and everything else earns a bounded
//! random residual standing in for sensor noise. Pattern cells that fall
//! outside the radar are skipped entirely; a placement exposing fewer than
//! 40% of the pattern's cells scores zero outright.

mod noise;

pub use noise::{NoiseSource, SeededNoise, ThreadRngNoise, ZeroNoise};

use crate::grid::{Cell, Grid};

/// Minimum fraction of pattern cells that must land inside the radar.
pub const MIN_VISIBILITY: f64 = 0.4;

/// Returns the smallest visible-cell count that satisfies the 40% floor.
pub fn min_visible_cells(cells: usize) -> usize {
    (cells as f64 * MIN_VISIBILITY).ceil() as usize
}

/// Scoring weights for cell comparisons.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Weights {
    /// Weight for an exact cell match.
    pub exact: f64,
    /// Weight for a match found in an adjacent radar cell.
    pub adjacent: f64,
    /// Upper bound factor for the random noise residual.
    pub noise: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            exact: 1.0,
            adjacent: 0.2,
            noise: 0.2,
        }
    }
}

/// Scores how well a pattern grid aligns with the radar at one offset.
#[derive(Clone, Debug)]
pub struct SimilarityCalculator<N = ThreadRngNoise> {
    weights: Weights,
    noise: N,
}

impl SimilarityCalculator<ThreadRngNoise> {
    /// Creates a calculator with the process-wide noise source.
    pub fn new(weights: Weights) -> Self {
        Self::with_noise(weights, ThreadRngNoise)
    }
}

impl Default for SimilarityCalculator<ThreadRngNoise> {
    fn default() -> Self {
        Self::new(Weights::default())
    }
}

impl<N: NoiseSource> SimilarityCalculator<N> {
    /// Creates a calculator with an explicit noise source.
    pub fn with_noise(weights: Weights, noise: N) -> Self {
        Self { weights, noise }
    }

    /// Returns the scoring weights.
    pub fn weights(&self) -> Weights {
        self.weights
    }

    /// Scores the placement of `pattern` over `radar` at `(offset_x, offset_y)`.
    ///
    /// Returns a similarity in `[0.0, 1.0]`, normalized by the number of
    /// pattern cells actually visible on the radar. Empty grids and
    /// placements below the visibility floor score `0.0`.
    pub fn score_at(
        &mut self,
        pattern: &Grid,
        radar: &Grid,
        offset_x: isize,
        offset_y: isize,
    ) -> f64 {
        if pattern.is_empty() || radar.is_empty() {
            return 0.0;
        }

        let mut total = 0.0;
        let mut visible = 0usize;

        for py in 0..pattern.y_size() {
            let Some(row) = pattern.row(py) else { continue };
            for (px, &pattern_value) in row.iter().enumerate() {
                let radar_x = offset_x + px as isize;
                let radar_y = offset_y + py as isize;
                let Some(radar_value) = radar.cell_at(radar_x, radar_y) else {
                    continue;
                };
                visible += 1;
                total += self.cell_score(pattern_value, radar_value, radar, radar_x, radar_y);
            }
        }

        if visible < min_visible_cells(pattern.area()) {
            return 0.0;
        }
        total / visible as f64
    }

    fn cell_score(
        &mut self,
        pattern_value: Cell,
        radar_value: Cell,
        radar: &Grid,
        x: isize,
        y: isize,
    ) -> f64 {
        if pattern_value == radar_value {
            return self.weights.exact;
        }
        if has_adjacent_match(pattern_value, radar, x, y) {
            return self.weights.adjacent;
        }
        // Bounded residual in [0, noise^2).
        self.weights.noise * (self.noise.sample() * self.weights.noise)
    }
}

fn has_adjacent_match(value: Cell, radar: &Grid, x: isize, y: isize) -> bool {
    for dy in -1..=1isize {
        for dx in -1..=1isize {
            if dx == 0 && dy == 0 {
                continue;
            }
            if radar.cell_at(x + dx, y + dy) == Some(value) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_floor_rounds_up() {
        assert_eq!(min_visible_cells(0), 0);
        assert_eq!(min_visible_cells(1), 1);
        assert_eq!(min_visible_cells(4), 2);
        assert_eq!(min_visible_cells(9), 4);
        assert_eq!(min_visible_cells(10), 4);
        assert_eq!(min_visible_cells(88), 36);
    }
}
