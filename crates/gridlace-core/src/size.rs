//! Validated grid side lengths.

use crate::candidate_set::CandidateSet;
use crate::position::Position;

/// Side lengths a grid may have.
const VALID_SIZES: [u8; 8] = [1, 4, 9, 16, 25, 36, 49, 64];

/// Error returned when a side length is not a supported grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid grid size: {len} (expected one of 1, 4, 9, 16, 25, 36, 49 or 64)")]
pub struct InvalidSizeError {
    /// The rejected side length.
    pub len: usize,
}

/// The side length of a grid: a perfect square between 1 and 64.
///
/// Fixing the side length to a perfect square makes the block side an exact
/// integer, and keeping it at most 64 lets one [`CandidateSet`] word cover
/// every cell.
///
/// # Examples
///
/// ```
/// use gridlace_core::GridSize;
///
/// let size = GridSize::new(9)?;
/// assert_eq!(size.side_len(), 9);
/// assert_eq!(size.block_len(), 3);
/// assert_eq!(size.cell_count(), 81);
///
/// assert!(GridSize::new(8).is_err());
/// # Ok::<(), gridlace_core::InvalidSizeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridSize(u8);

impl GridSize {
    /// Creates a grid size from a side length.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError`] unless `len` is one of 1, 4, 9, 16, 25,
    /// 36, 49 or 64.
    pub fn new(len: usize) -> Result<Self, InvalidSizeError> {
        VALID_SIZES
            .iter()
            .find(|&&valid| usize::from(valid) == len)
            .map(|&valid| Self(valid))
            .ok_or(InvalidSizeError { len })
    }

    /// Returns the side length `N`.
    #[must_use]
    pub const fn side_len(self) -> u8 {
        self.0
    }

    /// Returns the block side length `√N`.
    #[must_use]
    pub const fn block_len(self) -> u8 {
        self.0.isqrt()
    }

    /// Returns the number of cells, `N²`.
    #[must_use]
    pub fn cell_count(self) -> usize {
        usize::from(self.0) * usize::from(self.0)
    }

    /// Returns the set of all `N` symbols a cell of this grid may hold.
    #[must_use]
    pub fn full_set(self) -> CandidateSet {
        CandidateSet::full(u32::from(self.0))
    }

    /// Returns all cell positions of a grid of this size, row-major.
    #[must_use]
    pub fn positions(self) -> impl Iterator<Item = Position> {
        let n = self.0;
        (0..n).flat_map(move |row| (0..n).map(move |col| Position::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_perfect_squares_up_to_64() {
        for len in [1, 4, 9, 16, 25, 36, 49, 64] {
            let size = GridSize::new(len).unwrap();
            assert_eq!(usize::from(size.side_len()), len);
            assert_eq!(
                usize::from(size.block_len() * size.block_len()),
                len,
                "block side is the exact square root"
            );
        }
    }

    #[test]
    fn test_rejects_other_lengths() {
        for len in [0, 2, 3, 8, 10, 81, 100] {
            assert_eq!(GridSize::new(len), Err(InvalidSizeError { len }));
        }
    }

    #[test]
    fn test_full_set_matches_side() {
        let size = GridSize::new(16).unwrap();
        assert_eq!(size.full_set().len(), 16);
    }

    #[test]
    fn test_positions_are_row_major() {
        let size = GridSize::new(4).unwrap();
        let positions: Vec<_> = size.positions().collect();
        assert_eq!(positions.len(), 16);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[1], Position::new(0, 1));
        assert_eq!(positions[4], Position::new(1, 0));
        assert_eq!(positions[15], Position::new(3, 3));
    }

    #[test]
    fn test_error_message() {
        let err = GridSize::new(8).unwrap_err();
        assert!(err.to_string().contains("invalid grid size: 8"));
    }
}
