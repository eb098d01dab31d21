//! Insertion-ordered collection of patterns.

use crate::grid::Grid;
use crate::pattern::{Pattern, ROTATION_COUNT};

/// Ordered pattern collection; insertion order defines pattern indices.
#[derive(Clone, Debug, Default)]
pub struct PatternLibrary {
    patterns: Vec<Pattern>,
}

impl PatternLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pattern wrapping `grid`, computing its rotation set.
    pub fn add_pattern(&mut self, grid: Grid) {
        self.patterns.push(Pattern::new(grid));
    }

    /// Returns the number of patterns added.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if no patterns have been added.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns the stored patterns in insertion order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Returns the unrotated grid of each pattern, in insertion order.
    pub fn base_patterns(&self) -> Vec<&Grid> {
        self.patterns.iter().map(Pattern::base).collect()
    }

    /// Returns every orientation of every pattern, flattened in insertion
    /// order. The result always holds `4 x len()` grids.
    pub fn all_rotations(&self) -> Vec<&Grid> {
        let mut grids = Vec::with_capacity(self.patterns.len() * ROTATION_COUNT);
        for pattern in &self.patterns {
            grids.extend(pattern.rotations().iter());
        }
        grids
    }
}
