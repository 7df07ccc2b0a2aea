//! Constraint groups: rows, columns and blocks.

use crate::{position::Position, size::GridSize};

/// A constraint group of a grid: a row, a column, or a `√N`×`√N` block.
///
/// Once a grid is solved, every house holds each of the `N` symbols exactly
/// once. Every cell belongs to exactly one house of each kind. Houses carry
/// no state; their member coordinates are derived from the grid size on
/// demand.
///
/// # Examples
///
/// ```
/// use gridlace_core::{GridSize, House, Position};
///
/// let size = GridSize::new(4)?;
///
/// // Rows, columns and blocks, N of each
/// assert_eq!(House::all(size).count(), 12);
///
/// // The second block of a 4×4 grid covers its top-right 2×2 tile
/// let block = House::Block { index: 1 };
/// let positions: Vec<_> = block.positions(size).collect();
/// assert_eq!(positions[0], Position::new(0, 2));
/// assert_eq!(positions[3], Position::new(1, 3));
/// # Ok::<(), gridlace_core::InvalidSizeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its index (top to bottom).
    Row {
        /// Row index (0 to N-1).
        index: u8,
    },
    /// A column identified by its index (left to right).
    Column {
        /// Column index (0 to N-1).
        index: u8,
    },
    /// A block identified by its index (left to right, top to bottom).
    Block {
        /// Block index (0 to N-1).
        index: u8,
    },
}

impl House {
    /// Returns every house of a grid: all rows, then all columns, then all
    /// blocks.
    #[must_use]
    pub fn all(size: GridSize) -> impl Iterator<Item = Self> {
        let n = size.side_len();
        (0..n)
            .map(|index| Self::Row { index })
            .chain((0..n).map(|index| Self::Column { index }))
            .chain((0..n).map(|index| Self::Block { index }))
    }

    /// Converts a cell index within the house (0 to N-1) into an absolute
    /// [`Position`].
    ///
    /// Blocks enumerate their tile row-major.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not below the side length.
    #[must_use]
    pub fn position(self, size: GridSize, i: u8) -> Position {
        assert!(i < size.side_len());
        let block = size.block_len();
        match self {
            Self::Row { index } => Position::new(index, i),
            Self::Column { index } => Position::new(i, index),
            Self::Block { index } => {
                let top = (index / block) * block;
                let left = (index % block) * block;
                Position::new(top + i / block, left + i % block)
            }
        }
    }

    /// Returns the positions of this house's `N` cells in order.
    #[must_use]
    pub fn positions(self, size: GridSize) -> impl Iterator<Item = Position> {
        (0..size.side_len()).map(move |i| self.position(size, i))
    }
}
