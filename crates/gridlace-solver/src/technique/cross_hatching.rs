use gridlace_core::CandidateSet;

use super::Technique;

/// Removes every decided symbol from the undecided cells of a house.
///
/// A singleton cell pins its symbol to that cell, so the symbol cannot
/// appear anywhere else in the house. This is the workhorse technique; the
/// other two only fire on patterns this one cannot see.
///
/// # Examples
///
/// ```
/// use gridlace_core::CandidateSet;
/// use gridlace_solver::technique::{CrossHatching, Technique};
///
/// let mut cells = [
///     CandidateSet::from_char('1'),
///     CandidateSet::full(4),
///     CandidateSet::full(4),
///     CandidateSet::from_char('4'),
/// ];
/// assert!(CrossHatching.apply(&mut cells));
/// assert_eq!(cells[1].to_string(), "23");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct CrossHatching;

impl Technique for CrossHatching {
    fn name(&self) -> &'static str {
        "cross hatching"
    }

    fn apply(&self, cells: &mut [CandidateSet]) -> bool {
        let mut changed = false;

        let mut singletons = CandidateSet::EMPTY;
        for cell in cells.iter() {
            if cell.is_singleton() {
                singletons |= *cell;
            }
        }

        for cell in cells.iter_mut() {
            if !cell.is_singleton() {
                let narrowed = *cell - singletons;
                if narrowed != *cell {
                    *cell = narrowed;
                    changed = true;
                }
            }
        }

        changed
    }
}
