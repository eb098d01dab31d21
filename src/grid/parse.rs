//! Text-to-grid parsing with a two-character alphabet.
//!
//! One input line becomes one row of cells. The filled and empty characters
//! map to their cell values; any other character parses as `Unknown`, which
//! is how noisy radar dumps are tolerated at the input layer.

use crate::grid::Cell;
use crate::util::{ScanError, ScanResult};

/// Character pair encoding filled and empty cells in text form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    filled: char,
    empty: char,
}

impl Alphabet {
    /// Creates an alphabet; the two characters must differ.
    pub fn new(filled: char, empty: char) -> ScanResult<Self> {
        if filled == empty {
            return Err(ScanError::InvalidAlphabet {
                reason: "filled and empty characters must differ",
            });
        }
        Ok(Self { filled, empty })
    }

    /// Returns the character representing a filled cell.
    pub fn filled(&self) -> char {
        self.filled
    }

    /// Returns the character representing an empty cell.
    pub fn empty(&self) -> char {
        self.empty
    }

    /// Maps one character to its cell value.
    pub fn cell_for(&self, ch: char) -> Cell {
        if ch == self.filled {
            Cell::Filled
        } else if ch == self.empty {
            Cell::Empty
        } else {
            Cell::Unknown
        }
    }

    /// Maps a cell value back to a character; `Unknown` renders as empty.
    pub fn char_for(&self, cell: Cell) -> char {
        match cell {
            Cell::Filled => self.filled,
            Cell::Empty | Cell::Unknown => self.empty,
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            filled: 'o',
            empty: '-',
        }
    }
}

/// Converts raw text into rows of cells, validating the overall shape.
#[derive(Copy, Clone, Debug, Default)]
pub struct GridParser {
    alphabet: Alphabet,
}

impl GridParser {
    /// Creates a parser over the given alphabet.
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// Returns the parser's alphabet.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Parses text into cell rows.
    ///
    /// Fails if the text yields no lines, any line is empty, or line lengths
    /// disagree. Line numbers in errors are 1-based. CRLF input parses the
    /// same as LF input.
    pub fn parse(&self, text: &str) -> ScanResult<Vec<Vec<Cell>>> {
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        let mut expected = 0usize;

        for (idx, line) in text.lines().enumerate() {
            if line.is_empty() {
                return Err(ScanError::EmptyLine { line: idx + 1 });
            }
            let row: Vec<Cell> = line.chars().map(|ch| self.alphabet.cell_for(ch)).collect();
            if idx == 0 {
                expected = row.len();
            } else if row.len() != expected {
                return Err(ScanError::RaggedLine {
                    line: idx + 1,
                    expected,
                    got: row.len(),
                });
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(ScanError::EmptyInput);
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_and_unknown_characters() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.cell_for('o'), Cell::Filled);
        assert_eq!(alphabet.cell_for('-'), Cell::Empty);
        assert_eq!(alphabet.cell_for('x'), Cell::Unknown);
        assert_eq!(alphabet.char_for(Cell::Unknown), '-');
    }

    #[test]
    fn rejects_equal_alphabet_characters() {
        let err = Alphabet::new('o', 'o').unwrap_err();
        assert!(matches!(err, ScanError::InvalidAlphabet { .. }));
    }

    #[test]
    fn parse_validates_shape() {
        let parser = GridParser::default();
        assert_eq!(parser.parse("").unwrap_err(), ScanError::EmptyInput);
        assert_eq!(
            parser.parse("oo\n\noo").unwrap_err(),
            ScanError::EmptyLine { line: 2 }
        );
        assert_eq!(
            parser.parse("oo\no").unwrap_err(),
            ScanError::RaggedLine {
                line: 2,
                expected: 2,
                got: 1
            }
        );
    }
}
