//! Core data model for square grid-logic puzzles.
//!
//! A puzzle grid has side length `N` where `N` is a perfect square of at
//! most 64 ([`GridSize`]). Each cell holds a [`CandidateSet`], a 64-bit set
//! of the symbols still possible there; the [`Symbol`] alphabet covers all
//! 64 printable symbols a cell may take. Rows, columns and `√N`×`√N` blocks
//! are the grid's [`House`]s, each of which must end up holding every symbol
//! exactly once.
//!
//! Grids parse from a plain-text format ([`parse::parse_grid`], also
//! available through [`str::parse`]) and render back through [`Grid`]'s
//! `Display` impl.
//!
//! # Examples
//!
//! ```
//! use gridlace_core::{CandidateSet, Grid, Position};
//!
//! let grid: Grid = "1_2_\n____\n2___\n___1".parse()?;
//! assert_eq!(grid.size().side_len(), 4);
//! assert_eq!(grid.cell(Position::new(2, 0)).single().unwrap().to_char(), '2');
//! assert_eq!(grid.cell(Position::new(1, 1)), CandidateSet::full(4));
//! # Ok::<(), gridlace_core::ParseError>(())
//! ```

pub use self::{
    candidate_set::{CandidateSet, Symbols},
    grid::{CandidatesDisplay, Grid},
    house::House,
    parse::ParseError,
    position::Position,
    size::{GridSize, InvalidSizeError},
    symbol::Symbol,
};

pub mod candidate_set;
pub mod grid;
pub mod house;
pub mod parse;
pub mod position;
pub mod size;
pub mod symbol;
