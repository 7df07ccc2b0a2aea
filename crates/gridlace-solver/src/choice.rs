//! Branch cell selection.

use gridlace_core::{Grid, Position};

/// Picks the cell to branch on: the first undecided cell, in row-major
/// order, with the fewest remaining candidates.
///
/// Fewer candidates means fewer branches to explore, and ties break to the
/// earliest cell so the search order is reproducible. Returns `None` when
/// every cell is decided.
#[must_use]
pub fn branch_cell(grid: &Grid) -> Option<Position> {
    let mut best: Option<(Position, usize)> = None;
    for pos in grid.positions() {
        let len = grid.cell(pos).len();
        if len > 1 && best.is_none_or(|(_, min)| len < min) {
            best = Some((pos, len));
        }
    }
    best.map(|(pos, _)| pos)
}
