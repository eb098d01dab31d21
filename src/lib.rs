//! RadarScan locates known 2-D shapes inside a noisy boolean radar grid.
//!
//! The crate provides the grid container with three-valued cells, eagerly
//! computed pattern rotation sets, a fuzzy per-placement similarity score
//! with a bounded noise residual, and an exhaustive sliding-window matcher
//! that tolerates partially visible occurrences at the radar edges.

pub mod grid;
pub mod pattern;
pub mod score;
pub mod search;
pub mod util;

mod trace;

pub use grid::{render_grid, Alphabet, Cell, Grid, GridParser};
pub use pattern::{rotate_cw, Pattern, PatternLibrary, ROTATION_COUNT};
pub use score::{
    min_visible_cells, NoiseSource, SeededNoise, SimilarityCalculator, ThreadRngNoise, Weights,
    ZeroNoise, MIN_VISIBILITY,
};
pub use search::{scan_library, LibraryMatch, MatchResult, Matcher, MatcherConfig};
pub use util::{ScanError, ScanResult};
