use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Number of letters a mask can represent (`a`..=`z`).
pub const ALPHABET_LEN: usize = 26;

/// One bit per letter. Repeated letters collapse to a single bit.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LetterMask(u32);

impl LetterMask {
    pub const EMPTY: LetterMask = LetterMask(0);

    /// Mask of a single lowercase ASCII letter.
    #[must_use]
    pub fn letter(letter: u8) -> Self {
        debug_assert!(letter.is_ascii_lowercase());
        LetterMask(1 << (letter - b'a'))
    }

    /// Letter set of `word`. Callers pass validated lowercase words.
    #[must_use]
    pub fn of(word: &str) -> Self {
        word.bytes()
            .fold(LetterMask::EMPTY, |mask, c| mask | LetterMask::letter(c))
    }

    /// True when no letter appears in both masks.
    #[must_use]
    pub fn is_disjoint(self, other: LetterMask) -> bool {
        self.0 & other.0 == 0
    }

    #[must_use]
    pub fn contains_letter(self, letter: u8) -> bool {
        !self.is_disjoint(LetterMask::letter(letter))
    }

    #[must_use]
    pub fn union(self, other: LetterMask) -> Self {
        LetterMask(self.0 | other.0)
    }

    /// Number of distinct letters.
    #[must_use]
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order.
    pub fn letters(self) -> impl Iterator<Item = char> {
        (0..ALPHABET_LEN as u8)
            .filter(move |i| self.0 & (1 << i) != 0)
            .map(|i| char::from(b'a' + i))
    }
}

impl BitOr for LetterMask {
    type Output = LetterMask;

    fn bitor(self, rhs: LetterMask) -> LetterMask {
        self.union(rhs)
    }
}

impl BitOrAssign for LetterMask {
    fn bitor_assign(&mut self, rhs: LetterMask) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for LetterMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LetterMask(")?;
        for c in self.letters() {
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}
