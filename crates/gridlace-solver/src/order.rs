//! Pluggable ordering of candidate values during search.

use gridlace_core::CandidateSet;

/// Chooses which candidate a backtracking branch tries next.
///
/// The search hands each implementation the set of values not yet tried in
/// the current cell; `pick` must return a singleton subset of it. Orderings
/// may carry state (a random number generator, say), hence `&mut self`.
pub trait ValueOrder {
    /// Picks one value out of `remaining`.
    ///
    /// `remaining` is never empty when the search calls this.
    fn pick(&mut self, remaining: CandidateSet) -> CandidateSet;
}

/// Tries candidates in ascending symbol order.
///
/// This is the deterministic default: with it, the same puzzle always
/// produces the same solution.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ascending;

impl ValueOrder for Ascending {
    fn pick(&mut self, remaining: CandidateSet) -> CandidateSet {
        remaining.leftmost()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending_picks_smallest() {
        let mut order = Ascending;
        let set = "357"
            .chars()
            .map(CandidateSet::from_char)
            .fold(CandidateSet::EMPTY, |acc, s| acc | s);
        assert_eq!(order.pick(set).to_string(), "3");
    }
}
