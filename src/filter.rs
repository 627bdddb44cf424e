//! Candidate filtering.
//!
//! A [`CandidateSet`] is a list of indices into a shared [`Vocabulary`], so
//! a solve only pays for the words it still considers.

use crate::constraints::ConstraintState;
use crate::vocabulary::Vocabulary;
use crate::word::Word;

/// The vocabulary words still consistent with a solve's feedback, in
/// vocabulary order.
#[derive(Debug, Clone)]
pub struct CandidateSet<'v> {
    vocab: &'v Vocabulary,
    indices: Vec<u32>,
}

impl<'v> CandidateSet<'v> {
    /// Every word in the vocabulary.
    pub fn full(vocab: &'v Vocabulary) -> Self {
        Self {
            vocab,
            indices: (0..vocab.len() as u32).collect(),
        }
    }

    pub fn vocabulary(&self) -> &'v Vocabulary {
        self.vocab
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// True while nothing has been filtered out.
    pub fn is_full(&self) -> bool {
        self.indices.len() == self.vocab.len()
    }

    pub fn get(&self, i: usize) -> Option<Word> {
        self.indices.get(i).map(|&idx| self.vocab.word(idx as usize))
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Word> + '_ {
        self.indices.iter().map(|&idx| self.vocab.word(idx as usize))
    }

    pub fn contains(&self, word: &Word) -> bool {
        // indices stay sorted because filtering preserves order
        match self.vocab.index_of(word) {
            Some(idx) => self.indices.binary_search(&(idx as u32)).is_ok(),
            None => false,
        }
    }

    pub fn to_words(&self) -> Vec<Word> {
        self.iter().collect()
    }
}

/// Whether `word` satisfies every constraint in `state`.
pub fn is_valid(word: &Word, state: &ConstraintState) -> bool {
    let letters = word.letters();

    for (i, &letter) in letters.iter().enumerate() {
        if let Some(green) = state.green(i) {
            if letter != green {
                return false;
            }
        }
        if state.banned_at(i, letter) {
            return false;
        }
    }

    let counts = word.letter_counts();
    counts
        .iter()
        .zip(state.min_counts())
        .zip(state.max_counts())
        .all(|((&count, &min), &max)| count >= min && count <= max)
}

/// Keep the candidates that satisfy `state`, preserving their order.
pub fn filter_candidates<'v>(candidates: &CandidateSet<'v>, state: &ConstraintState) -> CandidateSet<'v> {
    let vocab = candidates.vocab;
    let indices = candidates
        .indices
        .iter()
        .copied()
        .filter(|&idx| is_valid(&vocab.word(idx as usize), state))
        .collect();
    CandidateSet { vocab, indices }
}
