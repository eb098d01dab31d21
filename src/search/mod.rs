//! Sliding-window search over candidate placements.
//!
//! The matcher widens the offset ranges past the radar edges so that
//! partially visible occurrences can still be reported: an offset is a
//! candidate as long as the guaranteed-visible slice of the pattern could
//! satisfy the 40% visibility floor. The ranges are a superset; the
//! similarity calculator's own visibility gate makes the final call per
//! offset.

mod scan;

pub use scan::{scan_library, LibraryMatch};

use crate::grid::Grid;
use crate::score::{min_visible_cells, NoiseSource, SimilarityCalculator, ThreadRngNoise, Weights};
use crate::trace::{trace_event, trace_span};
use crate::util::{ScanError, ScanResult};

/// Search configuration: acceptance threshold plus scoring weights.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MatcherConfig {
    match_threshold: f64,
    weights: Weights,
}

impl MatcherConfig {
    /// Default acceptance threshold.
    pub const DEFAULT_THRESHOLD: f64 = 0.8;

    /// Creates a configuration, validating the threshold.
    pub fn new(match_threshold: f64, weights: Weights) -> ScanResult<Self> {
        if !match_threshold.is_finite() || !(0.0..=1.0).contains(&match_threshold) {
            return Err(ScanError::InvalidThreshold {
                value: match_threshold,
            });
        }
        Ok(Self {
            match_threshold,
            weights,
        })
    }

    /// Returns the acceptance threshold.
    pub fn match_threshold(&self) -> f64 {
        self.match_threshold
    }

    /// Returns the scoring weights.
    pub fn weights(&self) -> Weights {
        self.weights
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            match_threshold: Self::DEFAULT_THRESHOLD,
            weights: Weights::default(),
        }
    }
}

/// One accepted placement of a pattern over the radar.
///
/// Offsets are signed: negative values and values past the far edge describe
/// partially visible placements.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MatchResult {
    /// Column of the pattern's top-left corner on the radar.
    pub x: isize,
    /// Row of the pattern's top-left corner on the radar.
    pub y: isize,
    /// Similarity score in `[0.0, 1.0]`.
    pub similarity: f64,
}

/// Exhaustive sliding-window matcher over widened offset ranges.
#[derive(Clone, Debug)]
pub struct Matcher<N = ThreadRngNoise> {
    config: MatcherConfig,
    calculator: SimilarityCalculator<N>,
}

impl Matcher<ThreadRngNoise> {
    /// Creates a matcher with the process-wide noise source.
    pub fn new(config: MatcherConfig) -> Self {
        let calculator = SimilarityCalculator::new(config.weights());
        Self { config, calculator }
    }
}

impl Default for Matcher<ThreadRngNoise> {
    fn default() -> Self {
        Self::new(MatcherConfig::default())
    }
}

impl<N: NoiseSource> Matcher<N> {
    /// Creates a matcher with an explicit noise source.
    pub fn with_noise(config: MatcherConfig, noise: N) -> Self {
        let calculator = SimilarityCalculator::with_noise(config.weights(), noise);
        Self { config, calculator }
    }

    /// Returns the matcher's configuration.
    pub fn config(&self) -> MatcherConfig {
        self.config
    }

    /// Scans every candidate offset and returns placements at or above the
    /// threshold, in ascending `(y, x)` scan order.
    ///
    /// Empty pattern or radar grids are caller errors, rejected before any
    /// scanning. Every offset in range is evaluated; nothing terminates the
    /// scan early and results are not re-sorted by score.
    pub fn find_matches(&mut self, pattern: &Grid, radar: &Grid) -> ScanResult<Vec<MatchResult>> {
        if pattern.is_empty() {
            return Err(ScanError::EmptyPattern);
        }
        if radar.is_empty() {
            return Err(ScanError::EmptyRadar);
        }

        let min_vis_x = min_visible_cells(pattern.x_size());
        let min_vis_y = min_visible_cells(pattern.y_size());
        let x_start = -((pattern.x_size() - min_vis_x) as isize);
        let x_end = radar.x_size() as isize - min_vis_x as isize;
        let y_start = -((pattern.y_size() - min_vis_y) as isize);
        let y_end = radar.y_size() as isize - min_vis_y as isize;

        let _span = trace_span!(
            "find_matches",
            pattern_w = pattern.x_size(),
            pattern_h = pattern.y_size(),
            radar_w = radar.x_size(),
            radar_h = radar.y_size(),
        )
        .entered();

        let mut matches = Vec::new();
        for y in y_start..=y_end {
            for x in x_start..=x_end {
                let similarity = self.calculator.score_at(pattern, radar, x, y);
                if similarity >= self.config.match_threshold {
                    matches.push(MatchResult { x, y, similarity });
                }
            }
        }

        trace_event!("scan_done", matches = matches.len());
        Ok(matches)
    }
}
