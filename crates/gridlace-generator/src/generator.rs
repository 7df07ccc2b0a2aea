//! Puzzle generation by removal from a random solved grid.

use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use gridlace_core::{Grid, GridSize, Position};
use gridlace_solver::{SolutionCount, check_unique, solve_with_order};
use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

use crate::random_order::RandomOrder;

/// Generates puzzle grids from a seedable random source.
///
/// Generation first solves an unconstrained grid with a random candidate
/// order, producing a random solved grid, then clears cells back to
/// "anything goes" until a size-dependent removal budget is spent. In
/// strict mode a cell is only cleared if the puzzle still has exactly one
/// solution afterwards; otherwise every visited cell is cleared and the
/// puzzle may admit several solutions.
///
/// Every grid drawn from the same seed sequence is identical, which the
/// tests lean on.
///
/// # Examples
///
/// ```
/// use gridlace_core::GridSize;
/// use gridlace_generator::Generator;
/// use gridlace_solver::{SolutionCount, check_unique};
///
/// let mut generator = Generator::from_seed(42);
/// let puzzle = generator.generate(GridSize::new(9)?, true);
/// assert_eq!(check_unique(&puzzle), SolutionCount::One);
/// # Ok::<(), gridlace_core::InvalidSizeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Generator<R = Pcg64Mcg> {
    rng: R,
}

impl Generator<Pcg64Mcg> {
    /// Creates a generator seeded from wall-clock time and process id.
    #[must_use]
    pub fn new() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let seed = now.as_secs() ^ u64::from(now.subsec_nanos()) ^ u64::from(process::id());
        Self::from_seed(seed)
    }

    /// Creates a generator with a fixed seed, for reproducible output.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(Pcg64Mcg::seed_from_u64(seed))
    }
}

impl Default for Generator<Pcg64Mcg> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Generator<R> {
    /// Creates a generator drawing from the given random source.
    #[must_use]
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a puzzle grid of the given size.
    ///
    /// With `strict` set, the returned puzzle has exactly one solution.
    /// Without it, removal never re-checks solvability, so the puzzle can
    /// have several solutions (it always has at least one).
    pub fn generate(&mut self, size: GridSize, strict: bool) -> Grid {
        let mut grid = Grid::unconstrained(size);
        {
            let mut order = RandomOrder::new(&mut self.rng);
            let solved = solve_with_order(&mut grid, &mut order);
            assert!(solved, "an unconstrained grid always has a solution");
        }

        let percent: usize = match size.side_len() {
            1 => 100,
            2..=16 => self.rng.random_range(40..60),
            17..=49 => self.rng.random_range(30..40),
            _ => self.rng.random_range(20..25),
        };
        let budget = size.cell_count() * percent / 100;
        log::debug!(
            "removing up to {budget} of {} cells ({percent}%)",
            size.cell_count()
        );

        let n = usize::from(size.side_len());
        let mut checked = vec![false; size.cell_count()];
        let mut removed = 0;
        while removed < budget && checked.iter().any(|&done| !done) {
            let mut row = self.rng.random_range(0..n);
            let mut col = self.rng.random_range(0..n);
            // Probe forward from an already-checked cell instead of
            // redrawing, so every cell is visited at most once
            while checked[row * n + col] {
                row = (row + 1) % n;
                if row == 0 {
                    col = (col + 1) % n;
                }
            }
            checked[row * n + col] = true;

            #[expect(clippy::cast_possible_truncation)]
            let pos = Position::new(row as u8, col as u8);
            if strict {
                let mut trial = grid.clone();
                trial.set_cell(pos, size.full_set());
                if check_unique(&trial) != SolutionCount::One {
                    log::trace!("keeping {pos}: removal breaks uniqueness");
                    continue;
                }
            }
            grid.set_cell(pos, size.full_set());
            removed += 1;
        }

        log::debug!("removed {removed} cells");
        grid
    }
}

#[cfg(test)]
mod tests {
    use gridlace_core::CandidateSet;
    use gridlace_solver::solve;

    use super::*;

    fn size(n: usize) -> GridSize {
        GridSize::new(n).unwrap()
    }

    fn open_cells(grid: &Grid) -> usize {
        grid.positions()
            .filter(|&pos| grid.cell(pos) == grid.size().full_set())
            .count()
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let first = Generator::from_seed(7).generate(size(9), false);
        let second = Generator::from_seed(7).generate(size(9), false);
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let first = Generator::from_seed(1).generate(size(9), false);
        let second = Generator::from_seed(2).generate(size(9), false);
        assert_ne!(first, second);
    }

    #[test]
    fn test_puzzle_is_solvable() {
        let mut puzzle = Generator::from_seed(3).generate(size(9), false);
        assert!(solve(&mut puzzle));
    }

    #[test]
    fn test_non_strict_spends_whole_budget() {
        // A 4x4 draws its percentage from [40, 59], so the budget is
        // 6 to 9 cells and non-strict removal always reaches it
        let puzzle = Generator::from_seed(11).generate(size(4), false);
        let open = open_cells(&puzzle);
        assert!((6..=9).contains(&open), "{open} cells open");
    }

    #[test]
    fn test_remaining_cells_are_givens() {
        let puzzle = Generator::from_seed(5).generate(size(4), false);
        for pos in puzzle.positions() {
            let cell = puzzle.cell(pos);
            assert!(cell.is_singleton() || cell == puzzle.size().full_set());
        }
    }

    #[test]
    fn test_strict_puzzle_is_unique() {
        for seed in 0..4 {
            let puzzle = Generator::from_seed(seed).generate(size(9), true);
            assert_eq!(check_unique(&puzzle), SolutionCount::One, "seed {seed}");
        }
    }

    #[test]
    fn test_strict_4x4() {
        let puzzle = Generator::from_seed(9).generate(size(4), true);
        assert_eq!(check_unique(&puzzle), SolutionCount::One);
        assert!(open_cells(&puzzle) > 0);
    }

    #[test]
    fn test_size_one() {
        // The whole budget is the single cell
        let puzzle = Generator::from_seed(0).generate(size(1), false);
        assert_eq!(puzzle.cell(Position::new(0, 0)), CandidateSet::full(1));
    }
}
