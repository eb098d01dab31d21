use radarscan::{render_grid, Alphabet, Cell, Grid, GridParser, ScanError};

#[test]
fn from_text_builds_the_expected_cells() {
    let parser = GridParser::default();
    let grid = Grid::from_text("o-x\n-o-", &parser).unwrap();

    assert_eq!((grid.x_size(), grid.y_size()), (3, 2));
    assert_eq!(grid.cell_at(0, 0), Some(Cell::Filled));
    assert_eq!(grid.cell_at(1, 0), Some(Cell::Empty));
    assert_eq!(grid.cell_at(2, 0), Some(Cell::Unknown));
    assert_eq!(grid.cell_at(1, 1), Some(Cell::Filled));
}

#[test]
fn from_text_accepts_crlf_line_endings() {
    let parser = GridParser::default();
    let grid = Grid::from_text("oo\r\n--\r\n", &parser).unwrap();
    assert_eq!((grid.x_size(), grid.y_size()), (2, 2));
}

#[test]
fn from_text_surfaces_parser_errors() {
    let parser = GridParser::default();

    assert_eq!(
        Grid::from_text("", &parser).unwrap_err(),
        ScanError::EmptyInput
    );
    assert_eq!(
        Grid::from_text("ooo\noo", &parser).unwrap_err(),
        ScanError::RaggedLine {
            line: 2,
            expected: 3,
            got: 2
        }
    );
    assert_eq!(
        Grid::from_text("oo\n\noo", &parser).unwrap_err(),
        ScanError::EmptyLine { line: 2 }
    );
}

#[test]
fn custom_alphabet_changes_the_mapping() {
    let alphabet = Alphabet::new('#', '.').unwrap();
    let parser = GridParser::new(alphabet);
    let grid = Grid::from_text("#.\n.#", &parser).unwrap();

    assert_eq!(grid.cell_at(0, 0), Some(Cell::Filled));
    assert_eq!(grid.cell_at(1, 0), Some(Cell::Empty));
    // The default filled character is unknown under this alphabet.
    let other = Grid::from_text("o.", &parser).unwrap();
    assert_eq!(other.cell_at(0, 0), Some(Cell::Unknown));
}

#[test]
fn render_grid_round_trips_with_unknown_as_empty() {
    let parser = GridParser::default();
    let grid = Grid::from_text("o-x\n-o-", &parser).unwrap();
    assert_eq!(render_grid(&grid, parser.alphabet()), "o--\n-o-");
}

#[test]
fn rows_returns_a_snapshot_not_an_alias() {
    let parser = GridParser::default();
    let grid = Grid::from_text("o-\n-o", &parser).unwrap();

    let mut snapshot = grid.rows();
    snapshot[0][0] = Cell::Empty;
    assert_eq!(grid.cell_at(0, 0), Some(Cell::Filled));
}
