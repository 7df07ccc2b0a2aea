//! Plain-text grid parsing.
//!
//! The interchange format is line-oriented:
//!
//! - alphabet symbols fix a cell to that single symbol,
//! - `_` leaves a cell fully unconstrained,
//! - `#` starts a comment running to the end of the line,
//! - blank and whitespace-only lines are skipped, as are spaces and tabs
//!   inside a line,
//! - the first content line fixes the side length `N`, which must be a
//!   supported grid size; exactly `N` content lines of exactly `N` cells
//!   must follow.
//!
//! ```
//! use gridlace_core::parse::parse_grid;
//!
//! let grid = parse_grid(
//!     "# a 4x4 puzzle
//!      1 _ 2 _
//!      _ _ _ _
//!      2 _ _ _
//!      _ _ _ 1",
//! )?;
//! assert_eq!(grid.size().side_len(), 4);
//! # Ok::<(), gridlace_core::ParseError>(())
//! ```

use crate::{
    candidate_set::CandidateSet, grid::Grid, position::Position, size::GridSize, symbol::Symbol,
};

/// Error produced when grid text is malformed.
///
/// All line numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// The input holds no content lines at all.
    #[display("no grid found in the input")]
    EmptyInput,
    /// The first content line's cell count is not a supported grid size.
    #[display("line {line}: {len} cells is not a valid grid size")]
    InvalidSize {
        /// 1-based line number.
        line: usize,
        /// Number of cells found on the line.
        len: usize,
    },
    /// A content line holds the wrong number of cells.
    #[display("line {line} is malformed (wrong number of cells)")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
    },
    /// More content lines than the side length.
    #[display("too many lines in the grid (expected {expected})")]
    TooManyLines {
        /// Expected number of content lines.
        expected: usize,
    },
    /// Fewer content lines than the side length.
    #[display("too few lines in the grid (expected {expected}, found {found})")]
    TooFewLines {
        /// Expected number of content lines.
        expected: usize,
        /// Content lines actually present.
        found: usize,
    },
    /// A character that is neither a usable symbol, `_`, whitespace nor a
    /// comment.
    ///
    /// Alphabet symbols beyond the grid's side length are rejected too.
    #[display("wrong character '{ch}' at line {line}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// 1-based line number.
        line: usize,
    },
}

/// Parses grid text into a [`Grid`].
///
/// See the [module documentation](self) for the format.
///
/// # Errors
///
/// Returns a [`ParseError`] identifying the offending line (and character,
/// where applicable) on malformed input.
pub fn parse_grid(input: &str) -> Result<Grid, ParseError> {
    let mut size: Option<GridSize> = None;
    let mut rows: Vec<Vec<CandidateSet>> = Vec::new();

    for (line_index, raw) in input.lines().enumerate() {
        let line = line_index + 1;
        let content = raw.split('#').next().unwrap_or_default();
        let chars: Vec<char> = content.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.is_empty() {
            continue;
        }

        let size = match size {
            Some(size) => size,
            None => {
                let first = GridSize::new(chars.len()).map_err(|err| ParseError::InvalidSize {
                    line,
                    len: err.len,
                })?;
                size = Some(first);
                first
            }
        };

        let n = usize::from(size.side_len());
        if chars.len() != n {
            return Err(ParseError::MalformedLine { line });
        }
        if rows.len() == n {
            return Err(ParseError::TooManyLines { expected: n });
        }

        let cells = chars
            .into_iter()
            .map(|ch| cell_value(ch, size).ok_or(ParseError::UnexpectedChar { ch, line }))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(cells);
    }

    let size = size.ok_or(ParseError::EmptyInput)?;
    let n = usize::from(size.side_len());
    if rows.len() < n {
        return Err(ParseError::TooFewLines {
            expected: n,
            found: rows.len(),
        });
    }

    let mut grid = Grid::unconstrained(size);
    for (row, cells) in rows.into_iter().enumerate() {
        for (col, set) in cells.into_iter().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            grid.set_cell(Position::new(row as u8, col as u8), set);
        }
    }
    Ok(grid)
}

/// Converts one grid character into a cell value.
///
/// `None` marks characters that are invalid for this grid size.
fn cell_value(ch: char, size: GridSize) -> Option<CandidateSet> {
    if ch == '_' {
        return Some(size.full_set());
    }
    let symbol = Symbol::from_char(ch)?;
    (symbol.index() < size.side_len()).then(|| CandidateSet::from_symbol(symbol))
}
