//! Candidate-elimination techniques applied per house.
//!
//! Each technique implements the [`Technique`] trait and narrows the
//! candidate sets of one house (a row, a column or a block) in place.
//! Techniques never look outside the house they are given; propagation
//! across houses happens by applying them to every house until a fixpoint
//! (see [`propagation`](crate::propagation)).

use std::fmt::Debug;

use gridlace_core::CandidateSet;

pub use self::{
    cross_hatching::CrossHatching, lone_candidate::LoneCandidate, matched_cells::MatchedCells,
};

mod cross_hatching;
mod lone_candidate;
mod matched_cells;

/// A candidate-elimination rule over the cells of one house.
pub trait Technique: Debug {
    /// Returns the name of the technique.
    fn name(&self) -> &'static str;

    /// Narrows `cells` in place, returning `true` if anything changed.
    ///
    /// `cells` holds the candidate sets of one house's `N` cells.
    fn apply(&self, cells: &mut [CandidateSet]) -> bool;
}

/// A boxed technique.
pub type BoxedTechnique = Box<dyn Technique>;

/// Returns the house techniques in their fixed application order.
///
/// The order matters for reproducibility, not correctness: each technique
/// only removes candidates, so any order reaches the same fixpoint.
#[must_use]
pub fn house_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(CrossHatching),
        Box::new(LoneCandidate),
        Box::new(MatchedCells),
    ]
}
