//! Candidate sets over the 64-symbol alphabet.
//!
//! This module provides [`CandidateSet`], a fixed-width bitset recording
//! which symbols are still possible in one grid cell. All set algebra is
//! `O(1)` on a single 64-bit word.

use std::fmt::{self, Debug, Display};
use std::iter::FusedIterator;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Sub, SubAssign,
};

use crate::symbol::Symbol;

/// A set of candidate symbols for one grid cell.
///
/// Bit `i` means "symbol `i` of the alphabet is still possible in this
/// cell". A grid of side `N` only ever sets the low `N` bits; that invariant
/// is maintained by construction, not enforced here. In particular
/// [`complement`](Self::complement) flips the bits beyond `N` too, so callers
/// either mask with [`full`](Self::full) or rely on `N`-scoped usage.
///
/// Operations are pure: they return new sets instead of mutating shared
/// state, except for the explicit [`insert`](Self::insert) and
/// [`remove`](Self::remove) on an owned value.
///
/// # Examples
///
/// ```
/// use gridlace_core::{CandidateSet, Symbol};
///
/// let cell = CandidateSet::full(9);
/// assert_eq!(cell.len(), 9);
///
/// let fixed = CandidateSet::from_char('5');
/// assert!(fixed.is_singleton());
/// assert!(fixed.is_subset_of(cell));
///
/// // Remove the fixed symbol from the open cell
/// let reduced = cell.difference(fixed);
/// assert_eq!(reduced.len(), 8);
/// assert_eq!(reduced.to_string(), "12346789");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CandidateSet(u64);

impl CandidateSet {
    /// The set containing no symbols.
    pub const EMPTY: Self = Self(0);

    /// Returns the set of the first `range` symbols of the alphabet.
    ///
    /// A `range` greater than 64 is clamped to 64.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlace_core::CandidateSet;
    ///
    /// assert_eq!(CandidateSet::full(9).len(), 9);
    /// assert_eq!(CandidateSet::full(100).len(), 64);
    /// assert_eq!(CandidateSet::full(0), CandidateSet::EMPTY);
    /// ```
    #[must_use]
    pub const fn full(range: u32) -> Self {
        if range >= 64 {
            Self(u64::MAX)
        } else {
            Self((1 << range) - 1)
        }
    }

    /// Returns the singleton set of `symbol`.
    #[must_use]
    pub const fn from_symbol(symbol: Symbol) -> Self {
        Self(1 << symbol.index())
    }

    /// Returns the singleton set of the symbol written as `c`.
    ///
    /// Characters outside the alphabet yield the empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlace_core::CandidateSet;
    ///
    /// assert!(CandidateSet::from_char('A').is_singleton());
    /// assert!(CandidateSet::from_char('!').is_empty());
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Self {
        Symbol::from_char(c).map_or(Self::EMPTY, Self::from_symbol)
    }

    /// Adds a symbol to the set.
    pub fn insert(&mut self, symbol: Symbol) {
        self.0 |= Self::from_symbol(symbol).0;
    }

    /// Removes a symbol from the set.
    pub fn remove(&mut self, symbol: Symbol) {
        self.0 &= !Self::from_symbol(symbol).0;
    }

    /// Returns `true` if the set contains `symbol`.
    #[must_use]
    pub const fn contains(self, symbol: Symbol) -> bool {
        self.0 & (1 << symbol.index()) != 0
    }

    /// Returns the symbols of `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns the symbols present in both sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the symbols present in either set.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the symbols present in exactly one of the two sets.
    #[must_use]
    pub const fn symmetric_difference(self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }

    /// Returns the absolute complement over the full 64-bit universe.
    ///
    /// Bits beyond the grid's side length are flipped too; mask with
    /// [`full`](Self::full) when working relative to a grid size.
    #[must_use]
    pub const fn complement(self) -> Self {
        Self(!self.0)
    }

    /// Returns `true` if every symbol of `self` is also in `other`.
    #[must_use]
    pub const fn is_subset_of(self, other: Self) -> bool {
        self.0 & other.0 == self.0
    }

    /// Returns `true` if the set contains no symbols.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the set contains exactly one symbol.
    ///
    /// The empty set is not a singleton.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        // A power of two has no bits in common with its predecessor.
        self.0 != 0 && self.0 & (self.0 - 1) == 0
    }

    /// Returns the number of symbols in the set (its cardinality).
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns the singleton set of the lowest-order symbol.
    ///
    /// The empty set yields the empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlace_core::CandidateSet;
    ///
    /// let set = CandidateSet::from_char('3').union(CandidateSet::from_char('7'));
    /// assert_eq!(set.leftmost(), CandidateSet::from_char('3'));
    /// assert_eq!(CandidateSet::EMPTY.leftmost(), CandidateSet::EMPTY);
    /// ```
    #[must_use]
    pub const fn leftmost(self) -> Self {
        Self(self.0 & self.0.wrapping_neg())
    }

    /// Returns the singleton set of the `n`-th lowest-order symbol, 1-indexed.
    ///
    /// `n == 0` returns the set unchanged (identity, not an error); an `n`
    /// beyond the cardinality yields the empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlace_core::CandidateSet;
    ///
    /// let set = CandidateSet::full(4);
    /// assert_eq!(set.nth_leftmost(0), set);
    /// assert_eq!(set.nth_leftmost(1), CandidateSet::from_char('1'));
    /// assert_eq!(set.nth_leftmost(4), CandidateSet::from_char('4'));
    /// assert_eq!(set.nth_leftmost(5), CandidateSet::EMPTY);
    /// ```
    #[must_use]
    pub fn nth_leftmost(self, n: usize) -> Self {
        if n == 0 {
            return self;
        }
        let mut rest = self;
        for _ in 0..n - 1 {
            rest = rest.difference(rest.leftmost());
        }
        rest.leftmost()
    }

    /// Returns the symbol if the set is a singleton.
    #[must_use]
    pub fn single(self) -> Option<Symbol> {
        if self.is_singleton() {
            #[expect(clippy::cast_possible_truncation)]
            Some(Symbol::from_index(self.0.trailing_zeros() as u8))
        } else {
            None
        }
    }

    /// Returns an iterator over the symbols of the set in alphabet order.
    #[must_use]
    pub const fn iter(self) -> Symbols {
        Symbols(self.0)
    }
}

/// Iterator over the symbols of a [`CandidateSet`], lowest index first.
#[derive(Debug, Clone)]
pub struct Symbols(u64);

impl Iterator for Symbols {
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let symbol = Symbol::from_index(self.0.trailing_zeros() as u8);
        self.0 &= self.0 - 1;
        Some(symbol)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Symbols {}
impl FusedIterator for Symbols {}

impl IntoIterator for CandidateSet {
    type Item = Symbol;
    type IntoIter = Symbols;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Symbol> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for symbol in iter {
            set.insert(symbol);
        }
        set
    }
}

impl BitOr for CandidateSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for CandidateSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for CandidateSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for CandidateSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl BitXor for CandidateSet {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self {
        self.symmetric_difference(rhs)
    }
}

impl BitXorAssign for CandidateSet {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = self.symmetric_difference(rhs);
    }
}

impl Sub for CandidateSet {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl SubAssign for CandidateSet {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.difference(rhs);
    }
}

impl Not for CandidateSet {
    type Output = Self;
    fn not(self) -> Self {
        self.complement()
    }
}

impl Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.iter() {
            Display::fmt(&symbol, f)?;
        }
        Ok(())
    }
}

impl Debug for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CandidateSet({self})")
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn set(s: &str) -> CandidateSet {
        s.chars().map(CandidateSet::from_char).fold(
            CandidateSet::EMPTY,
            CandidateSet::union,
        )
    }

    #[test]
    fn test_full_cardinality() {
        for n in [1, 4, 9, 16, 25, 36, 49, 64] {
            assert_eq!(CandidateSet::full(n).len(), n as usize);
        }
        assert_eq!(CandidateSet::full(100).len(), 64);
    }

    #[test]
    fn test_from_char_unknown_is_empty() {
        assert_eq!(CandidateSet::from_char('?'), CandidateSet::EMPTY);
        assert_eq!(CandidateSet::from_char('_'), CandidateSet::EMPTY);
    }

    #[test]
    fn test_algebra() {
        let a = set("125");
        let b = set("256");

        assert_eq!(a.union(b), set("1256"));
        assert_eq!(a.intersection(b), set("25"));
        assert_eq!(a.difference(b), set("1"));
        assert_eq!(a.symmetric_difference(b), set("16"));

        assert!(set("25").is_subset_of(a));
        assert!(!a.is_subset_of(b));
        assert!(CandidateSet::EMPTY.is_subset_of(a));
    }

    #[test]
    fn test_operators_match_named_operations() {
        let a = set("139A");
        let b = set("9Az");

        assert_eq!(a | b, a.union(b));
        assert_eq!(a & b, a.intersection(b));
        assert_eq!(a ^ b, a.symmetric_difference(b));
        assert_eq!(a - b, a.difference(b));
        assert_eq!(!a, a.complement());
    }

    #[test]
    fn test_singletons() {
        assert!(!CandidateSet::EMPTY.is_singleton());
        assert!(CandidateSet::from_char('1').is_singleton());
        assert!(CandidateSet::from_char('*').is_singleton());
        assert!(!set("12").is_singleton());
    }

    #[test]
    fn test_leftmost() {
        assert_eq!(CandidateSet::EMPTY.leftmost(), CandidateSet::EMPTY);
        assert_eq!(set("47").leftmost(), set("4"));
        assert_eq!(CandidateSet::full(64).leftmost(), set("1"));
    }

    #[test]
    fn test_nth_leftmost() {
        let s = set("1359");
        assert_eq!(s.nth_leftmost(0), s);
        assert_eq!(s.nth_leftmost(1), set("1"));
        assert_eq!(s.nth_leftmost(2), set("3"));
        assert_eq!(s.nth_leftmost(4), set("9"));
        assert_eq!(s.nth_leftmost(5), CandidateSet::EMPTY);
    }

    #[test]
    fn test_iteration_order() {
        let symbols: Vec<char> = set("9A1z").iter().map(Symbol::to_char).collect();
        assert_eq!(symbols, vec!['1', '9', 'A', 'z']);
    }

    #[test]
    fn test_display() {
        assert_eq!(set("1Az*").to_string(), "1Az*");
        assert_eq!(CandidateSet::EMPTY.to_string(), "");
        assert_eq!(
            CandidateSet::full(64).to_string(),
            "123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz@&*"
        );
    }

    #[test]
    fn test_insert_remove() {
        let mut s = CandidateSet::EMPTY;
        let a = Symbol::from_char('A').unwrap();
        s.insert(a);
        assert!(s.contains(a));
        assert_eq!(s.len(), 1);
        s.remove(a);
        assert!(s.is_empty());
        // Removing an absent symbol is a no-op
        s.remove(a);
        assert!(s.is_empty());
    }

    proptest! {
        #[test]
        fn prop_complement_involution(bits: u64) {
            let s = CandidateSet(bits);
            prop_assert_eq!(s.complement().complement(), s);
        }

        #[test]
        fn prop_singleton_iff_cardinality_one(bits: u64) {
            let s = CandidateSet(bits);
            prop_assert_eq!(s.is_singleton(), s.len() == 1);
        }

        #[test]
        fn prop_leftmost_is_smallest_singleton(bits: u64) {
            let s = CandidateSet(bits);
            let leftmost = s.leftmost();
            if s.is_empty() {
                prop_assert_eq!(leftmost, CandidateSet::EMPTY);
            } else {
                prop_assert!(leftmost.is_singleton());
                prop_assert!(leftmost.is_subset_of(s));
                prop_assert_eq!(s.iter().next(), leftmost.single());
            }
        }

        #[test]
        fn prop_nth_leftmost_enumerates(bits: u64) {
            let s = CandidateSet(bits);
            for (i, symbol) in s.iter().enumerate() {
                prop_assert_eq!(s.nth_leftmost(i + 1), CandidateSet::from_symbol(symbol));
            }
            prop_assert_eq!(s.nth_leftmost(s.len() + 1), CandidateSet::EMPTY);
        }

        #[test]
        fn prop_difference_and_union_partition(a: u64, b: u64) {
            let a = CandidateSet(a);
            let b = CandidateSet(b);
            prop_assert_eq!(a.difference(b).union(a.intersection(b)), a);
            prop_assert!(a.difference(b).intersection(b).is_empty());
        }
    }
}
