//! Puzzle generation for square grid-logic puzzles.
//!
//! A puzzle is made by solving an unconstrained grid with a random
//! candidate order ([`RandomOrder`]) and then clearing cells back out of
//! the solved grid ([`Generator::generate`]). Strict mode re-checks after
//! every removal that the puzzle still has exactly one solution.
//!
//! # Examples
//!
//! ```
//! use gridlace_core::GridSize;
//! use gridlace_generator::Generator;
//!
//! let mut generator = Generator::from_seed(42);
//! let puzzle = generator.generate(GridSize::new(4)?, false);
//! println!("{puzzle}");
//! # Ok::<(), gridlace_core::InvalidSizeError>(())
//! ```

pub use self::{generator::Generator, random_order::RandomOrder};

pub mod generator;
pub mod random_order;
