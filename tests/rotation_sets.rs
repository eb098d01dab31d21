use radarscan::{rotate_cw, Grid, GridParser, Pattern, PatternLibrary, ROTATION_COUNT};

fn grid(text: &str) -> Grid {
    Grid::from_text(text, &GridParser::default()).unwrap()
}

#[test]
fn rotation_set_is_in_clockwise_order() {
    let pattern = Pattern::new(grid("oo\no-\no-"));
    let rotations = pattern.rotations();

    assert_eq!(rotations.len(), ROTATION_COUNT);
    assert_eq!(rotations[0], grid("oo\no-\no-"));
    assert_eq!(rotations[1], grid("ooo\n--o"));
    assert_eq!(rotations[2], grid("-o\n-o\noo"));
    assert_eq!(rotations[3], grid("o--\nooo"));
    assert_eq!(pattern.base(), &rotations[0]);
}

#[test]
fn single_row_and_single_column_grids_rotate_cleanly() {
    let row = grid("o-o");
    let rotated = rotate_cw(&row);
    assert_eq!((rotated.x_size(), rotated.y_size()), (1, 3));
    assert_eq!(rotated, grid("o\n-\no"));

    let pattern = Pattern::new(row.clone());
    assert_eq!(pattern.rotations()[2], grid("o-o"));
}

#[test]
fn repeated_access_returns_the_same_rotations() {
    let pattern = Pattern::new(grid("oo\n-o"));
    assert_eq!(pattern.rotations(), pattern.rotations());
}

#[test]
fn library_preserves_insertion_order() {
    let mut library = PatternLibrary::new();
    library.add_pattern(grid("o"));
    library.add_pattern(grid("-"));

    let bases = library.base_patterns();
    assert_eq!(bases.len(), 2);
    assert_eq!(bases[0], &grid("o"));
    assert_eq!(bases[1], &grid("-"));
}

#[test]
fn all_rotations_is_always_four_per_pattern() {
    let mut library = PatternLibrary::new();
    assert!(library.all_rotations().is_empty());

    library.add_pattern(grid("oo\no-"));
    assert_eq!(library.all_rotations().len(), 4);

    library.add_pattern(grid("o-o"));
    library.add_pattern(grid("o\no"));
    let rotations = library.all_rotations();
    assert_eq!(rotations.len(), 4 * library.len());

    // Flattened order: pattern 1's four orientations first.
    assert_eq!(rotations[0], library.base_patterns()[0]);
    assert_eq!(rotations[4], library.base_patterns()[1]);
}
