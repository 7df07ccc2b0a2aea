//! Grid consistency checking.

use gridlace_core::{CandidateSet, Grid, House};

/// Returns `true` if no house of the grid rules a solution out.
///
/// A house is consistent when every symbol still has at least one cell that
/// can hold it, no two decided cells hold the same symbol, and no cell has
/// run out of candidates. Every house is visited even after a failure, so
/// the check's cost is stable across inputs.
///
/// Consistency is necessary but not sufficient for solvability; an
/// unsolvable grid can pass until propagation narrows it further.
///
/// # Examples
///
/// ```
/// use gridlace_core::Grid;
/// use gridlace_solver::is_consistent;
///
/// let grid: Grid = "1_2_\n____\n2___\n___1".parse()?;
/// assert!(is_consistent(&grid));
///
/// // Two '1's in the top row
/// let clash: Grid = "1_1_\n____\n____\n____".parse()?;
/// assert!(!is_consistent(&clash));
/// # Ok::<(), gridlace_core::ParseError>(())
/// ```
#[must_use]
pub fn is_consistent(grid: &Grid) -> bool {
    let mut consistent = true;
    for house in House::all(grid.size()) {
        consistent &= house_consistent(grid, house);
    }
    consistent
}

fn house_consistent(grid: &Grid, house: House) -> bool {
    let size = grid.size();

    let mut all = CandidateSet::EMPTY;
    for pos in house.positions(size) {
        all |= grid.cell(pos);
    }
    if all != size.full_set() {
        return false;
    }

    let mut singletons = CandidateSet::EMPTY;
    for pos in house.positions(size) {
        let cell = grid.cell(pos);
        if cell.is_empty() {
            return false;
        }
        if cell.is_singleton() {
            if cell.is_subset_of(singletons) {
                return false;
            }
            singletons |= cell;
        }
    }

    true
}
