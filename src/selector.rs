//! Entropy-based guess selection.
//!
//! This module implements an information-theoretic approach to choosing the
//! next guess. The key insight is that we want to maximize the expected
//! information gain (entropy) from each guess, which minimizes the expected
//! number of remaining possible words.

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::config::{GuessPool, SolverConfig};
use crate::constraints::ConstraintState;
use crate::feedback::FeedbackPattern;
use crate::filter::CandidateSet;
use crate::vocabulary::Vocabulary;
use crate::word::Word;

/// Result of analyzing a potential guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessAnalysis {
    pub word: Word,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub is_candidate: bool,
}

/// Shannon entropy, in bits, of the feedback patterns `guess` produces
/// against each of `targets`.
pub fn entropy(guess: &Word, targets: &[Word]) -> f64 {
    if targets.len() <= 1 {
        return 0.0;
    }
    let n = targets.len() as f64;

    let mut pattern_counts = [0u32; FeedbackPattern::NUM_PATTERNS];
    for target in targets {
        let pattern = FeedbackPattern::compute(guess, target);
        pattern_counts[pattern.code() as usize] += 1;
    }

    // summed in sorted order so equal partitions always score exactly equal
    let mut buckets: Vec<u32> = pattern_counts.into_iter().filter(|&c| c > 0).collect();
    buckets.sort_unstable();

    let mut entropy = 0.0;
    for count in buckets {
        let p = count as f64 / n;
        entropy -= p * p.log2();
    }
    entropy
}

/// A scored guess together with its position in the pool.
#[derive(Debug, Clone)]
struct Ranked {
    index: usize,
    analysis: GuessAnalysis,
}

/// Higher entropy first, then the earliest pool position.
fn rank(a: &Ranked, b: &Ranked) -> Ordering {
    b.analysis
        .entropy
        .total_cmp(&a.analysis.entropy)
        .then_with(|| a.index.cmp(&b.index))
}

/// Chooses guesses for a solve.
#[derive(Debug, Clone, Default)]
pub struct GuessSelector {
    opener: Option<Word>,
    pool: GuessPool,
}

impl GuessSelector {
    pub fn new(config: &SolverConfig) -> Self {
        Self {
            opener: config.opener,
            pool: config.pool,
        }
    }

    pub fn pool(&self) -> GuessPool {
        self.pool
    }

    /// Pick the next guess, or `None` when no candidate is left.
    ///
    /// Outside the opener, the guess is the pool word with the highest
    /// entropy over `candidates`. With the default candidate pool it is
    /// always a word that can still win.
    pub fn next_guess(
        &self,
        state: &ConstraintState,
        candidates: &CandidateSet<'_>,
    ) -> Option<GuessAnalysis> {
        match candidates.len() {
            0 => return None,
            1 => {
                return candidates.get(0).map(|word| GuessAnalysis {
                    word,
                    entropy: 0.0,
                    expected_remaining: 1.0,
                    is_candidate: true,
                })
            }
            _ => {}
        }

        if candidates.is_full() && state.is_unconstrained() {
            return self.opener_for(candidates.vocabulary());
        }

        self.score_pool(candidates).into_iter().min_by(rank).map(|r| r.analysis)
    }

    /// The `n` best guesses for the current candidates, best first.
    pub fn top_guesses(&self, candidates: &CandidateSet<'_>, n: usize) -> Vec<GuessAnalysis> {
        if candidates.is_empty() {
            return vec![];
        }

        let mut ranked = self.score_pool(candidates);
        ranked.sort_by(rank);
        ranked.truncate(n);
        ranked.into_iter().map(|r| r.analysis).collect()
    }

    /// Score every vocabulary word against the whole vocabulary and return
    /// the best. This is the expensive round the opener shortcut skips; run
    /// it once and pin the result in [`SolverConfig::opener`].
    pub fn derive_opener(vocab: &Vocabulary) -> Option<GuessAnalysis> {
        let words = vocab.words();
        score(words, words, |_| true).into_iter().min_by(rank).map(|r| r.analysis)
    }

    fn opener_for(&self, vocab: &Vocabulary) -> Option<GuessAnalysis> {
        match self.opener.filter(|w| vocab.contains(w)) {
            Some(word) => {
                let words = vocab.words();
                let entropy = entropy(&word, words);
                Some(GuessAnalysis {
                    word,
                    entropy,
                    expected_remaining: words.len() as f64 / entropy.exp2(),
                    is_candidate: true,
                })
            }
            None => vocab.cached_opener(|| Self::derive_opener(vocab)).cloned(),
        }
    }

    fn score_pool(&self, candidates: &CandidateSet<'_>) -> Vec<Ranked> {
        let targets = candidates.to_words();
        match self.pool {
            GuessPool::Candidates => score(&targets, &targets, |_| true),
            GuessPool::Vocabulary => {
                let words = candidates.vocabulary().words();
                score(words, &targets, |w| candidates.contains(w))
            }
        }
    }
}

/// Score each word of `pool` against `targets` in parallel, in pool order.
fn score<F>(pool: &[Word], targets: &[Word], is_candidate: F) -> Vec<Ranked>
where
    F: Fn(&Word) -> bool + Sync,
{
    let n = targets.len() as f64;
    pool.par_iter()
        .enumerate()
        .map(|(index, word)| {
            let entropy = entropy(word, targets);
            Ranked {
                index,
                analysis: GuessAnalysis {
                    word: *word,
                    entropy,
                    expected_remaining: n / entropy.exp2(),
                    is_candidate: is_candidate(word),
                },
            }
        })
        .collect()
}
