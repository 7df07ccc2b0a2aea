use gridlace_core::CandidateSet;

use super::Technique;

/// Pins symbols that have only one possible cell left in the house.
///
/// A single linear scan partitions the house's symbols into those seen in
/// exactly one cell (`lone`) and those seen in two or more (`more`). An
/// undecided cell that holds lone symbols is the only place they can go, so
/// it is restricted to them.
///
/// When a cell holds two or more lone symbols at once the restriction keeps
/// them all. Such a cell cannot host every one of them, so the house has no
/// solution; the consistency check reports that after propagation settles.
///
/// # Examples
///
/// ```
/// use gridlace_core::CandidateSet;
/// use gridlace_solver::technique::{LoneCandidate, Technique};
///
/// // Only the second cell may hold '4'
/// let mut cells = [
///     CandidateSet::from_char('1'),
///     CandidateSet::full(4),
///     CandidateSet::from_char('1') | CandidateSet::from_char('2'),
///     CandidateSet::from_char('2') | CandidateSet::from_char('3'),
/// ];
/// assert!(LoneCandidate.apply(&mut cells));
/// assert_eq!(cells[1].to_string(), "4");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct LoneCandidate;

impl Technique for LoneCandidate {
    fn name(&self) -> &'static str {
        "lone candidate"
    }

    fn apply(&self, cells: &mut [CandidateSet]) -> bool {
        let mut changed = false;

        // lone and more stay disjoint: a symbol moves from lone to more the
        // second time it is seen and never comes back.
        let mut lone = CandidateSet::EMPTY;
        let mut more = CandidateSet::EMPTY;
        for cell in cells.iter() {
            let next_lone = (*cell ^ lone) - more;
            let next_more = (*cell & lone) | more;
            lone = next_lone;
            more = next_more;
        }

        for cell in cells.iter_mut() {
            if !cell.is_singleton() {
                let pinned = *cell & lone;
                if !pinned.is_empty() && pinned != *cell {
                    *cell = pinned;
                    changed = true;
                }
            }
        }

        changed
    }
}
