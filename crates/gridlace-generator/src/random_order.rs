//! Random candidate ordering for the solver.

use gridlace_core::CandidateSet;
use gridlace_solver::ValueOrder;
use rand::{Rng, RngExt as _};

/// Tries candidates in a random order drawn from a borrowed RNG.
///
/// Plugged into [`solve_with_order`](gridlace_solver::solve_with_order),
/// this turns the deterministic backtracking search into a scrambler: an
/// unconstrained grid solves to a random solved grid.
#[derive(Debug)]
pub struct RandomOrder<'a, R: Rng> {
    rng: &'a mut R,
}

impl<'a, R: Rng> RandomOrder<'a, R> {
    /// Creates an ordering drawing from `rng`.
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ValueOrder for RandomOrder<'_, R> {
    fn pick(&mut self, remaining: CandidateSet) -> CandidateSet {
        remaining.nth_leftmost(self.rng.random_range(1..=remaining.len()))
    }
}
