//! Feedback calculation for Wordle guesses.
//!
//! This module handles computing the feedback pattern (green/yellow/gray)
//! for a guess against a target word.

use serde::{Serialize, Serializer};

use crate::word::Word;
use crate::WORD_LENGTH;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Match,
    /// Letter occurs elsewhere in the target (yellow)
    Present,
    /// Letter not in word, or all its occurrences already accounted for (gray)
    Absent,
}

impl Feedback {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Match => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// The single-letter code used on the wire: `g`, `y` or `-`.
    pub fn to_code(self) -> char {
        match self {
            Feedback::Match => 'g',
            Feedback::Present => 'y',
            Feedback::Absent => '-',
        }
    }

    /// Parse from a character (g=green, y=yellow, b/-=black/gray)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Match),
            'y' | '1' => Some(Feedback::Present),
            'b' | 'x' | '-' | '0' => Some(Feedback::Absent),
            _ => None,
        }
    }
}

/// A complete feedback pattern for a 5-letter guess.
/// Encoded as a single u8 value (0-242) for efficiency.
/// Each position can be 0 (absent), 1 (present), or 2 (match).
/// Pattern = p0 + 3*p1 + 9*p2 + 27*p3 + 81*p4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(u8);

impl FeedbackPattern {
    /// The pattern indicating all matches (winning)
    pub const ALL_MATCH: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27 + 2 * 81); // 242

    /// Total number of possible patterns (3^5)
    pub const NUM_PATTERNS: usize = 243;

    /// Wrap a packed code, rejecting anything past the last valid pattern.
    pub fn from_code(code: u8) -> Option<Self> {
        ((code as usize) < Self::NUM_PATTERNS).then_some(Self(code))
    }

    /// The packed base-3 code, always below [`FeedbackPattern::NUM_PATTERNS`].
    pub fn code(self) -> u8 {
        self.0
    }

    /// Create a new pattern from individual feedback values
    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let mut pattern: u8 = 0;
        let mut multiplier: u8 = 1;
        for fb in feedbacks {
            let value = match fb {
                Feedback::Absent => 0,
                Feedback::Present => 1,
                Feedback::Match => 2,
            };
            pattern += value * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Calculate the feedback pattern for a guess against a target word.
    ///
    /// Matches are marked first and consume their target position. Every
    /// other guess letter, left to right, then claims the first unconsumed
    /// target position holding the same letter and becomes Present, or is
    /// Absent when none is left. This is what makes repeated letters come
    /// out right: a guess never gets more green and yellow marks for a
    /// letter than the target contains.
    pub fn compute(guess: &Word, target: &Word) -> Self {
        let guess = guess.letters();
        let target = target.letters();

        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        for i in 0..WORD_LENGTH {
            if guess[i] == target[i] {
                feedback[i] = Feedback::Match;
                consumed[i] = true;
            }
        }

        for i in 0..WORD_LENGTH {
            if feedback[i] == Feedback::Match {
                continue;
            }
            if let Some(j) = (0..WORD_LENGTH).find(|&j| !consumed[j] && target[j] == guess[i]) {
                feedback[i] = Feedback::Present;
                consumed[j] = true;
            }
        }

        Self::new(feedback)
    }

    /// Convert pattern to array of feedbacks
    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut pattern = self.0;
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for feedback in feedbacks.iter_mut() {
            *feedback = match pattern % 3 {
                0 => Feedback::Absent,
                1 => Feedback::Present,
                _ => Feedback::Match,
            };
            pattern /= 3;
        }
        feedbacks
    }

    /// Check if this pattern represents a win (all matches)
    pub fn is_win(self) -> bool {
        self == Self::ALL_MATCH
    }

    /// Parse a pattern from a string like "gybbb", "gy---" or "21000"
    pub fn parse(s: &str) -> Option<Self> {
        if s.chars().count() != WORD_LENGTH {
            return None;
        }
        let feedbacks: Option<Vec<_>> = s.chars().map(Feedback::from_char).collect();
        let arr: [Feedback; WORD_LENGTH] = feedbacks?.try_into().ok()?;
        Some(Self::new(arr))
    }

    /// The `g`/`y`/`-` form, e.g. `"gy---"`
    pub fn to_code_string(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_code()).collect()
    }

    /// Display as emoji string
    pub fn to_emoji_string(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_char()).collect()
    }
}

impl std::fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}

impl Serialize for FeedbackPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_code_string())
    }
}
