//! The ordered 64-symbol alphabet shared by every grid size.

use std::fmt::{self, Display};

/// The alphabet, in bit order: digits, upper case, lower case, then `@&*`.
const ALPHABET: &[u8; 64] = b"123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz@&*";

/// A symbol of the 64-character grid alphabet.
///
/// A grid of side `N` uses the first `N` symbols of the alphabet. A symbol's
/// index is also its bit position in a [`CandidateSet`](crate::CandidateSet).
///
/// # Examples
///
/// ```
/// use gridlace_core::Symbol;
///
/// let symbol = Symbol::from_char('A').unwrap();
/// assert_eq!(symbol.index(), 9);
/// assert_eq!(symbol.to_char(), 'A');
///
/// assert!(Symbol::from_char('!').is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// Number of symbols in the alphabet.
    pub const COUNT: u8 = 64;

    /// Looks a character up in the alphabet.
    ///
    /// Returns `None` for characters outside the alphabet (this includes
    /// `_`, `#`, `0` and all whitespace).
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlace_core::Symbol;
    ///
    /// assert_eq!(Symbol::from_char('1').map(Symbol::index), Some(0));
    /// assert_eq!(Symbol::from_char('*').map(Symbol::index), Some(63));
    /// assert_eq!(Symbol::from_char('0'), None);
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let byte = u8::try_from(c).ok()?;
        let index = ALPHABET.iter().position(|&a| a == byte)?;
        #[expect(clippy::cast_possible_truncation)]
        Some(Self(index as u8))
    }

    /// Creates a symbol from its alphabet index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`Symbol::COUNT`].
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        assert!(index < Self::COUNT, "invalid symbol index: {index}");
        Self(index)
    }

    /// Returns this symbol's position in the alphabet (0-63).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the character this symbol renders as.
    #[must_use]
    pub fn to_char(self) -> char {
        char::from(ALPHABET[usize::from(self.0)])
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_char(), f)
    }
}
