use gridlace_core::CandidateSet;

use super::Technique;

/// Eliminates the symbols of a saturated group of identical cells.
///
/// When exactly `k` cells of a house hold the same `k`-symbol set, those
/// cells must absorb all `k` symbols between them, so the symbols cannot
/// appear anywhere else in the house.
///
/// Only literally equal cells form a group. A cell holding a strict subset
/// of the shared set does not count towards it, even though the textbook
/// naked-subset rule would include it; keeping the narrower rule keeps
/// the solver's deductions (and hence its branching order) reproducible
/// against its ancestors.
///
/// # Examples
///
/// ```
/// use gridlace_core::CandidateSet;
/// use gridlace_solver::technique::{MatchedCells, Technique};
///
/// let pair = CandidateSet::from_char('1') | CandidateSet::from_char('2');
/// let mut cells = [pair, pair, CandidateSet::full(4), CandidateSet::full(4)];
/// assert!(MatchedCells.apply(&mut cells));
/// assert_eq!(cells[2].to_string(), "34");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MatchedCells;

impl Technique for MatchedCells {
    fn name(&self) -> &'static str {
        "matched cells"
    }

    fn apply(&self, cells: &mut [CandidateSet]) -> bool {
        let mut changed = false;

        // Read cells[i] fresh each round so groups completed by an earlier
        // round's eliminations still fire within this application.
        for i in 0..cells.len() {
            let group = cells[i];
            let matching = cells.iter().filter(|&&cell| cell == group).count();
            if matching != group.len() {
                continue;
            }
            for cell in cells.iter_mut() {
                if !cell.is_singleton() && *cell != group {
                    let narrowed = *cell - group;
                    if narrowed != *cell {
                        *cell = narrowed;
                        changed = true;
                    }
                }
            }
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::technique::testing::{house, render};

    #[test]
    fn test_matched_pair() {
        let mut cells = house(&["12", "12", "1234", "1234"]);
        assert!(MatchedCells.apply(&mut cells));
        assert_eq!(render(&cells), ["12", "12", "34", "34"]);
    }

    #[test]
    fn test_subset_cells_do_not_join_a_group() {
        // "12" is not literally equal to "123", so the three cells do not
        // form a group even though {1,2} ⊂ {1,2,3}
        let mut cells = house(&["12", "123", "123", "1234"]);
        assert!(!MatchedCells.apply(&mut cells));
    }

    #[test]
    fn test_triple_completed_by_earlier_round() {
        // Eliminating {1,2} from "123" leaves "3"; re-reading cells lets
        // the fresh singleton fire in the same application
        let mut cells = house(&["12", "12", "123", "1234"]);
        assert!(MatchedCells.apply(&mut cells));
        assert_eq!(render(&cells), ["12", "12", "3", "4"]);
    }

    #[test]
    fn test_undersized_groups_do_not_fire() {
        // Every pair set occurs once, so no group is saturated
        let mut cells = house(&["12", "13", "23", "1234"]);
        assert!(!MatchedCells.apply(&mut cells));
    }

    #[test]
    fn test_singleton_group() {
        let mut cells = house(&["2", "1234", "1234", "1234"]);
        assert!(MatchedCells.apply(&mut cells));
        assert_eq!(render(&cells), ["2", "134", "134", "134"]);
    }
}
