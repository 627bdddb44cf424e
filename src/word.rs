//! The five letter word every guess and target is made of.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::WordError;
use crate::{ALPHABET_SIZE, WORD_LENGTH};

/// A fixed-length word of ASCII lowercase letters.
///
/// Words are plain `Copy` values so candidate lists and scoring loops never
/// allocate per word.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse a word, normalizing surrounding whitespace and case.
    pub fn parse(s: &str) -> Result<Self, WordError> {
        let s = s.trim();
        let len = s.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength {
                expected: WORD_LENGTH,
                found: len,
            });
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, c) in letters.iter_mut().zip(s.chars()) {
            let c = c.to_ascii_lowercase();
            if !c.is_ascii_lowercase() {
                return Err(WordError::InvalidLetter(c));
            }
            *slot = c as u8;
        }
        Ok(Self(letters))
    }

    /// Build a word from bytes already known to be ASCII lowercase.
    pub(crate) const fn from_ascii(letters: [u8; WORD_LENGTH]) -> Self {
        Self(letters)
    }

    /// The letters as ASCII bytes.
    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// The letter at `position`, as an ASCII byte.
    pub fn letter(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Occurrences of each letter, indexed `a` = 0 .. `z` = 25.
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &b in &self.0 {
            counts[letter_index(b)] += 1;
        }
        counts
    }

    pub fn to_uppercase(&self) -> String {
        self.0.iter().map(|&b| (b as char).to_ascii_uppercase()).collect()
    }
}

/// Alphabet index of an ASCII lowercase letter.
#[inline]
pub(crate) fn letter_index(b: u8) -> usize {
    debug_assert!(b.is_ascii_lowercase(), "not a lowercase letter: {b:#04x}");
    (b - b'a') as usize
}

/// Alphabet index of `b`, or `None` when it is not an ASCII lowercase letter.
#[inline]
pub(crate) fn checked_letter_index(b: u8) -> Option<usize> {
    b.is_ascii_lowercase().then(|| letter_index(b))
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self)
    }
}

impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
