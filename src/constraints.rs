//! Constraints accumulated from the feedback of a solve.
//!
//! Repeated letters are tracked with per-letter occurrence bounds rather than
//! a set of "gray" letters. A gray tile only says the target holds no more
//! copies of that letter than the guess got green or yellow tiles for, which
//! is an upper bound, not absence.

use crate::error::Contradiction;
use crate::feedback::{Feedback, FeedbackPattern};
use crate::word::{checked_letter_index, letter_index, Word};
use crate::{ALPHABET_SIZE, WORD_LENGTH};

/// Everything learned about the target so far.
///
/// Within one solve the state only ever tightens: greens are fixed once set,
/// minimum counts rise and maximum counts fall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintState {
    /// Letter required at each position (green).
    greens: [Option<u8>; WORD_LENGTH],
    /// Letters banned at each position (yellow), one bit per letter.
    yellows: [u32; WORD_LENGTH],
    min_counts: [u8; ALPHABET_SIZE],
    max_counts: [u8; ALPHABET_SIZE],
}

impl Default for ConstraintState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintState {
    pub fn new() -> Self {
        Self {
            greens: [None; WORD_LENGTH],
            yellows: [0; WORD_LENGTH],
            min_counts: [0; ALPHABET_SIZE],
            max_counts: [WORD_LENGTH as u8; ALPHABET_SIZE],
        }
    }

    /// Forget everything, as at the start of a new solve.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Fold one round of feedback into the state.
    ///
    /// On a contradiction the state is left untouched.
    pub fn update(&mut self, guess: &Word, pattern: FeedbackPattern) -> Result<(), Contradiction> {
        let feedbacks = pattern.to_feedbacks();
        let letters = guess.letters();
        let mut next = *self;

        let mut gy_count = [0u8; ALPHABET_SIZE];
        for (&letter, &fb) in letters.iter().zip(&feedbacks) {
            if fb != Feedback::Absent {
                gy_count[letter_index(letter)] += 1;
            }
        }

        for (min, &seen) in next.min_counts.iter_mut().zip(&gy_count) {
            *min = (*min).max(seen);
        }

        for (i, (&letter, &fb)) in letters.iter().zip(&feedbacks).enumerate() {
            let idx = letter_index(letter);
            match fb {
                Feedback::Absent => {
                    // gy_count is zero when the letter is absent from the target entirely
                    next.max_counts[idx] = next.max_counts[idx].min(gy_count[idx]);
                }
                Feedback::Match => match next.greens[i] {
                    Some(fixed) if fixed != letter => {
                        return Err(Contradiction::GreenConflict {
                            position: i,
                            fixed: fixed as char,
                            found: letter as char,
                        });
                    }
                    _ => next.greens[i] = Some(letter),
                },
                Feedback::Present => {
                    next.yellows[i] |= 1 << idx;
                }
            }
        }

        next.check()?;
        *self = next;
        Ok(())
    }

    fn check(&self) -> Result<(), Contradiction> {
        for (idx, (&min, &max)) in self.min_counts.iter().zip(&self.max_counts).enumerate() {
            if min > max {
                return Err(Contradiction::CountBounds {
                    letter: (b'a' + idx as u8) as char,
                    min,
                    max,
                });
            }
        }

        for (i, green) in self.greens.iter().enumerate() {
            if let Some(letter) = *green {
                if self.banned_at(i, letter) {
                    return Err(Contradiction::GreenBanned {
                        position: i,
                        letter: letter as char,
                    });
                }
            }
        }

        let required: usize = self.min_counts.iter().map(|&n| n as usize).sum();
        if required > WORD_LENGTH {
            return Err(Contradiction::TooManyLetters { required });
        }

        Ok(())
    }

    /// The letter fixed at `position`, if any.
    pub fn green(&self, position: usize) -> Option<u8> {
        self.greens[position]
    }

    /// Whether `letter` is banned at `position`. Bytes outside `a..=z` can
    /// never be placed, so they are never reported as banned.
    pub fn banned_at(&self, position: usize, letter: u8) -> bool {
        checked_letter_index(letter).is_some_and(|idx| self.yellows[position] & (1 << idx) != 0)
    }

    /// The bitmask of letters banned at `position`, bit 0 = `a`.
    pub fn banned_mask(&self, position: usize) -> u32 {
        self.yellows[position]
    }

    /// Bounds on the occurrences of `letter`. A byte outside `a..=z` occurs
    /// in no word, so both of its bounds are 0.
    pub fn min_count(&self, letter: u8) -> u8 {
        checked_letter_index(letter).map_or(0, |idx| self.min_counts[idx])
    }

    pub fn max_count(&self, letter: u8) -> u8 {
        checked_letter_index(letter).map_or(0, |idx| self.max_counts[idx])
    }

    pub fn min_counts(&self) -> &[u8; ALPHABET_SIZE] {
        &self.min_counts
    }

    pub fn max_counts(&self) -> &[u8; ALPHABET_SIZE] {
        &self.max_counts
    }

    /// True when no feedback has been folded in yet.
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::new()
    }
}
