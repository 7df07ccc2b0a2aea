//! Backtracking search over candidate assignments.
//!
//! The search recurses at most once per undecided cell, so its depth is
//! bounded by `N²` (4096 for the largest grids), with one grid copy live
//! per frame along the active chain.

use gridlace_core::Grid;

use crate::{
    choice, consistency,
    order::{Ascending, ValueOrder},
    propagation::{self, Propagation},
};

/// Number of solutions a uniqueness check found, capped at two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionCount {
    /// The grid has no solution.
    Zero,
    /// The grid has exactly one solution.
    One,
    /// The grid has at least two solutions.
    Multiple,
}

/// Solves the grid in place, trying candidates in ascending symbol order.
///
/// Returns `true` and leaves the grid fully decided if a solution exists.
/// The order is deterministic, so the same input always yields the same
/// solution even when several exist. On `false` the grid is left in the
/// narrowed state the failed search reached.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Grid, GridSize};
/// use gridlace_solver::solve;
///
/// let mut grid = Grid::unconstrained(GridSize::new(9)?);
/// assert!(solve(&mut grid));
/// assert!(grid.is_complete());
/// # Ok::<(), gridlace_core::InvalidSizeError>(())
/// ```
pub fn solve(grid: &mut Grid) -> bool {
    solve_with_order(grid, &mut Ascending)
}

/// Solves the grid in place, trying candidates in the order `order` picks.
///
/// This is the seam puzzle generation plugs a random ordering into; with a
/// random order an unconstrained grid solves to a uniformly scrambled
/// solution.
pub fn solve_with_order(grid: &mut Grid, order: &mut dyn ValueOrder) -> bool {
    search(grid, 1, order) >= 1
}

/// Counts the grid's solutions, stopping at the second.
///
/// The input is not modified. Puzzle generation in strict mode calls this
/// after every removal to keep the puzzle uniquely solvable.
///
/// # Examples
///
/// ```
/// use gridlace_core::Grid;
/// use gridlace_solver::{SolutionCount, check_unique};
///
/// let grid: Grid = "_23_\n3_12\n21_3\n_32_".parse()?;
/// assert_eq!(check_unique(&grid), SolutionCount::One);
/// # Ok::<(), gridlace_core::ParseError>(())
/// ```
#[must_use]
pub fn check_unique(grid: &Grid) -> SolutionCount {
    let mut scratch = grid.clone();
    match search(&mut scratch, 2, &mut Ascending) {
        0 => SolutionCount::Zero,
        1 => SolutionCount::One,
        _ => SolutionCount::Multiple,
    }
}

/// Counts solutions up to `limit`, leaving a solution in `grid` when any
/// was found.
///
/// Each branch works on a wholesale copy of the grid, so a failed branch
/// leaves no trace on its parent. When the count reaches `limit` the search
/// stops and adopts the branch that got there; when it falls short, the
/// first solution found (if any) is adopted instead.
fn search(grid: &mut Grid, limit: u32, order: &mut dyn ValueOrder) -> u32 {
    if !consistency::is_consistent(grid) {
        return 0;
    }

    match propagation::run(grid) {
        Propagation::Solved => return 1,
        Propagation::Inconsistent => return 0,
        Propagation::Consistent => {}
    }

    // A consistent, incomplete grid always has an undecided cell
    let Some(pos) = choice::branch_cell(grid) else {
        return 0;
    };

    let mut untried = grid.cell(pos);
    log::debug!("branching at {pos} over {{{untried}}}");

    let mut count = 0;
    let mut first_solution = None;
    while !untried.is_empty() {
        let picked = order.pick(untried);
        untried -= picked;

        let mut branch = grid.clone();
        branch.set_cell(pos, picked);
        let found = search(&mut branch, limit - count, order);
        if found == 0 {
            continue;
        }

        count += found;
        if count < limit {
            if first_solution.is_none() {
                first_solution = Some(branch);
            }
        } else {
            *grid = branch;
            return count;
        }
    }

    if let Some(solution) = first_solution {
        *grid = solution;
    }
    count
}

#[cfg(test)]
mod tests {
    use gridlace_core::{CandidateSet, GridSize, House};

    use super::*;

    fn assert_valid_solution(grid: &Grid) {
        assert!(grid.is_complete());
        for house in House::all(grid.size()) {
            let union = house
                .positions(grid.size())
                .map(|pos| grid.cell(pos))
                .fold(CandidateSet::EMPTY, |acc, cell| acc | cell);
            assert_eq!(union, grid.size().full_set(), "{house:?} is not a permutation");
        }
    }

    #[test]
    fn test_solves_empty_grid() {
        // Propagation alone cannot decide anything here
        let mut grid = Grid::unconstrained(GridSize::new(4).unwrap());
        assert!(solve(&mut grid));
        assert_valid_solution(&grid);
    }

    #[test]
    fn test_solve_is_deterministic() {
        let mut first = Grid::unconstrained(GridSize::new(9).unwrap());
        let mut second = Grid::unconstrained(GridSize::new(9).unwrap());
        assert!(solve(&mut first));
        assert!(solve(&mut second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_solve_respects_givens() {
        let mut grid: Grid = "_23_\n3_12\n21_3\n_32_".parse().unwrap();
        assert!(solve(&mut grid));
        assert_eq!(grid.to_string(), "1 2 3 4\n3 4 1 2\n2 1 4 3\n4 3 2 1\n");
    }

    #[test]
    fn test_unsolvable_grid() {
        // Consistent at first glance, but no cell of the bottom row can
        // hold a 2
        let mut grid: Grid = "1_2_\n____\n2___\n___1".parse().unwrap();
        assert!(!solve(&mut grid));
    }

    #[test]
    fn test_conflicting_givens() {
        let mut grid: Grid = "11__\n____\n____\n____".parse().unwrap();
        assert!(!solve(&mut grid));
    }

    #[test]
    fn test_size_one() {
        let mut grid: Grid = "_".parse().unwrap();
        assert!(solve(&mut grid));
        assert_eq!(grid.to_string(), "1\n");
    }

    #[test]
    fn test_check_unique_zero() {
        let grid: Grid = "1_2_\n____\n2___\n___1".parse().unwrap();
        assert_eq!(check_unique(&grid), SolutionCount::Zero);
    }

    #[test]
    fn test_check_unique_multiple_on_empty_grid() {
        let grid = Grid::unconstrained(GridSize::new(4).unwrap());
        assert_eq!(check_unique(&grid), SolutionCount::Multiple);
    }

    #[test]
    fn test_check_unique_does_not_modify_input() {
        let grid = Grid::unconstrained(GridSize::new(4).unwrap());
        let before = grid.clone();
        let _ = check_unique(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_check_unique_two_solution_rectangle() {
        // A solved 9×9 grid with the 1/3 rectangle across rows 4-5 and
        // columns 6/9 blanked out; the four cells admit exactly the two
        // mirrored assignments
        let grid: Grid = "534678912\n\
                          672195348\n\
                          198342567\n\
                          85976_42_\n\
                          42685_79_\n\
                          713924856\n\
                          961537284\n\
                          287419635\n\
                          345286179"
            .parse()
            .unwrap();
        assert_eq!(check_unique(&grid), SolutionCount::Multiple);
    }

    #[test]
    fn test_check_unique_one() {
        // The same grid with only the corner rectangle cell blanked
        let grid: Grid = "534678912\n\
                          672195348\n\
                          198342567\n\
                          85976142_\n\
                          426853791\n\
                          713924856\n\
                          961537284\n\
                          287419635\n\
                          345286179"
            .parse()
            .unwrap();
        assert_eq!(check_unique(&grid), SolutionCount::One);
    }

    #[test]
    fn test_solve_9x9_puzzle() {
        // The two-solution rectangle grid still solves; ascending order
        // deterministically picks the assignment with the 1 first
        let mut grid: Grid = "534678912\n\
                              672195348\n\
                              198342567\n\
                              85976_42_\n\
                              42685_79_\n\
                              713924856\n\
                              961537284\n\
                              287419635\n\
                              345286179"
            .parse()
            .unwrap();
        assert!(solve(&mut grid));
        assert_valid_solution(&grid);
    }
}
