//! Library-level scan orchestration.

use crate::grid::Grid;
use crate::pattern::PatternLibrary;
use crate::score::NoiseSource;
use crate::search::{MatchResult, Matcher};
use crate::util::ScanResult;

/// One match tagged with the checked grid's index and the rotation mode.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LibraryMatch {
    /// Index of the matched grid within the checked sequence: base patterns
    /// in insertion order, or the flattened rotation list in rotation mode.
    pub pattern_index: usize,
    /// True when the scan covered all rotations.
    pub rotated: bool,
    /// The accepted placement.
    pub result: MatchResult,
}

/// Runs the matcher for every checked grid in the library against the radar.
///
/// With `include_rotations` the checked sequence is
/// [`PatternLibrary::all_rotations`], four entries per pattern; otherwise it
/// is [`PatternLibrary::base_patterns`]. Matches keep the matcher's per-grid
/// scan order, grouped by checked-sequence index.
pub fn scan_library<N: NoiseSource>(
    matcher: &mut Matcher<N>,
    library: &PatternLibrary,
    radar: &Grid,
    include_rotations: bool,
) -> ScanResult<Vec<LibraryMatch>> {
    let checked = if include_rotations {
        library.all_rotations()
    } else {
        library.base_patterns()
    };

    let mut results = Vec::new();
    for (pattern_index, pattern) in checked.into_iter().enumerate() {
        for result in matcher.find_matches(pattern, radar)? {
            results.push(LibraryMatch {
                pattern_index,
                rotated: include_rotations,
                result,
            });
        }
    }
    Ok(results)
}
