//! Constraint propagation to a fixpoint.

use gridlace_core::{CandidateSet, Grid, House};
use tinyvec::ArrayVec;

use crate::{consistency, technique};

/// Outcome of running propagation on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Every cell is a singleton and the grid is consistent.
    Solved,
    /// Still consistent, but some cells remain undecided.
    Consistent,
    /// Some house can no longer be satisfied.
    Inconsistent,
}

/// Narrows the grid's candidate sets as far as the techniques reach.
///
/// One pass visits every house (rows, then columns, then blocks), copies
/// its cells out, applies each [`technique`] and writes the cells back.
/// Passes repeat until one changes nothing, then the grid is classified.
///
/// The techniques only ever remove candidates, so the loop terminates: the
/// total candidate count strictly decreases on every pass but the last.
///
/// # Examples
///
/// ```
/// use gridlace_core::Grid;
/// use gridlace_solver::propagation::{self, Propagation};
///
/// let mut grid: Grid = "_23_\n3_12\n21_3\n_32_".parse()?;
/// assert_eq!(propagation::run(&mut grid), Propagation::Solved);
/// assert_eq!(grid.to_string(), "1 2 3 4\n3 4 1 2\n2 1 4 3\n4 3 2 1\n");
/// # Ok::<(), gridlace_core::ParseError>(())
/// ```
pub fn run(grid: &mut Grid) -> Propagation {
    let size = grid.size();
    let techniques = technique::house_techniques();

    let mut pass = 0_u32;
    loop {
        pass += 1;
        let mut changed = false;

        for house in House::all(size) {
            let mut cells: ArrayVec<[CandidateSet; 64]> =
                house.positions(size).map(|pos| grid.cell(pos)).collect();
            let mut house_changed = false;
            for technique in &techniques {
                if technique.apply(&mut cells) {
                    log::trace!("pass {pass}: {} changed {house:?}", technique.name());
                    house_changed = true;
                }
            }
            if house_changed {
                for (pos, cell) in house.positions(size).zip(cells) {
                    grid.set_cell(pos, cell);
                }
                changed = true;
            }
        }

        if !changed {
            break;
        }
    }

    if !consistency::is_consistent(grid) {
        Propagation::Inconsistent
    } else if grid.is_complete() {
        Propagation::Solved
    } else {
        Propagation::Consistent
    }
}
