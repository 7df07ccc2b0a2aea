//! The puzzle grid: an N×N matrix of candidate sets.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::{
    candidate_set::CandidateSet,
    parse::{self, ParseError},
    position::Position,
    size::GridSize,
};

/// An `N`×`N` matrix of [`CandidateSet`], `N` fixed for the grid's lifetime.
///
/// Each cell holds the set of symbols still possible there; a grid is
/// complete when every cell is a singleton. The solver takes a wholesale
/// copy before each speculative branch, so a failed branch leaves no trace
/// on its parent.
///
/// # Examples
///
/// ```
/// use gridlace_core::{CandidateSet, Grid, GridSize, Position};
///
/// let size = GridSize::new(4)?;
/// let mut grid = Grid::unconstrained(size);
/// assert_eq!(grid.cell(Position::new(0, 0)).len(), 4);
///
/// grid.set_cell(Position::new(0, 0), CandidateSet::from_char('3'));
/// assert!(grid.cell(Position::new(0, 0)).is_singleton());
/// # Ok::<(), gridlace_core::InvalidSizeError>(())
/// ```
///
/// Grids parse from and render to a plain-text format; see
/// [`parse_grid`](crate::parse::parse_grid) and the [`Display`] impl.
///
/// ```
/// use gridlace_core::{Grid, Position};
///
/// let grid: Grid = "1_2_\n____\n2___\n___1".parse()?;
/// assert_eq!(grid.cell(Position::new(0, 2)).to_string(), "2");
/// assert_eq!(grid.cell(Position::new(0, 1)).len(), 4);
/// # Ok::<(), gridlace_core::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: GridSize,
    cells: Vec<CandidateSet>,
}

impl Grid {
    /// Creates a grid with every cell fully unconstrained (`full(N)`).
    #[must_use]
    pub fn unconstrained(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![size.full_set(); size.cell_count()],
        }
    }

    /// Returns the grid's side length.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the candidate set of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CandidateSet {
        self.cells[self.index(pos)]
    }

    /// Replaces the candidate set of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn set_cell(&mut self, pos: Position, set: CandidateSet) {
        let index = self.index(pos);
        self.cells[index] = set;
    }

    /// Returns all cell positions, row-major.
    #[must_use]
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        self.size.positions()
    }

    /// Returns `true` if every cell holds exactly one symbol.
    ///
    /// Completeness says nothing about consistency; a complete grid may
    /// still violate a house constraint.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_singleton())
    }

    /// Returns a rendering showing each cell's full candidate string.
    ///
    /// Cells are right-aligned to the side length, so the output lines up
    /// as long as no cell holds more candidates than the side length.
    #[must_use]
    pub const fn candidates_display(&self) -> CandidatesDisplay<'_> {
        CandidatesDisplay(self)
    }

    fn index(&self, pos: Position) -> usize {
        let n = usize::from(self.size.side_len());
        let (row, col) = (usize::from(pos.row()), usize::from(pos.col()));
        assert!(row < n && col < n, "position {pos} outside {n}x{n} grid");
        row * n + col
    }
}

/// Renders the solved view: one symbol per singleton cell, `_` otherwise.
///
/// Cells are separated by single spaces, rows by newlines.
impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size.side_len();
        for row in 0..n {
            for col in 0..n {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match self.cell(Position::new(row, col)).single() {
                    Some(symbol) => Display::fmt(&symbol, f)?,
                    None => f.write_str("_")?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_grid(s)
    }
}

/// Debug rendering of a [`Grid`]: every cell's candidate string.
///
/// Created by [`Grid::candidates_display`].
#[derive(Debug, Clone, Copy)]
pub struct CandidatesDisplay<'a>(&'a Grid);

impl Display for CandidatesDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0.size.side_len();
        let width = usize::from(n);
        for row in 0..n {
            for col in 0..n {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let cell = self.0.cell(Position::new(row, col));
                write!(f, "{:>width$}", cell.to_string())?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
