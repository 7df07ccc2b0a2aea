//! Solver for square grid-logic puzzles.
//!
//! Solving runs in two layers. [`propagation`] applies the house
//! [`technique`]s (cross hatching, lone candidate, matched cells) to every
//! row, column and block until a pass changes nothing. When propagation
//! stalls, [`solve`] branches: it picks the undecided cell with the fewest
//! candidates, tries each candidate on a copy of the grid and recurses.
//!
//! [`check_unique`] runs the same search but counts solutions, stopping at
//! the second; puzzle generators use it to keep their puzzles uniquely
//! solvable. [`solve_with_order`] exposes the branching order so a
//! generator can randomize it.
//!
//! # Examples
//!
//! ```
//! use gridlace_core::Grid;
//! use gridlace_solver::solve;
//!
//! let mut grid: Grid = "_23_\n3_12\n21_3\n_32_".parse()?;
//! assert!(solve(&mut grid));
//! assert_eq!(grid.to_string(), "1 2 3 4\n3 4 1 2\n2 1 4 3\n4 3 2 1\n");
//! # Ok::<(), gridlace_core::ParseError>(())
//! ```

pub use self::{
    backtrack::{SolutionCount, check_unique, solve, solve_with_order},
    consistency::is_consistent,
    order::{Ascending, ValueOrder},
    propagation::Propagation,
};

pub mod backtrack;
pub mod choice;
pub mod consistency;
pub mod order;
pub mod propagation;
pub mod technique;
