//! # Wordle Entropy
//!
//! A Wordle solver that narrows the candidate vocabulary with positional and
//! letter-count constraints, and picks each guess to maximize the expected
//! information gain (Shannon entropy) of the feedback it will produce.
//!
//! The pieces, leaf first:
//!
//! - [`Word`]: a five letter lowercase word.
//! - [`FeedbackPattern`]: the green/yellow/gray answer to a guess.
//! - [`ConstraintState`]: everything learned so far in a solve.
//! - [`CandidateSet`]: the vocabulary words still consistent with it.
//! - [`GuessSelector`]: the entropy scorer.
//! - [`Solver`]: the round loop tying them together.
//!
//! A [`Vocabulary`] is built once and shared by reference with every solve.

pub mod config;
pub mod constraints;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod selector;
pub mod simulation;
pub mod solver;
pub mod vocabulary;
pub mod word;

pub use config::{GuessPool, SolverConfig};
pub use constraints::ConstraintState;
pub use error::{ConfigError, Contradiction, LoadError, SolverError, WordError};
pub use feedback::{Feedback, FeedbackPattern};
pub use filter::{filter_candidates, is_valid, CandidateSet};
pub use selector::{GuessAnalysis, GuessSelector};
pub use simulation::{CancelToken, Simulation, SimulationReport};
pub use solver::{Round, SolveEvent, SolveObserver, SolveReport, SolveStatus, Solver};
pub use vocabulary::{EmbeddedWordLists, FileWordLists, Vocabulary, WordListProvider, WordLists};
pub use word::Word;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Default number of guesses allowed per solve
pub const MAX_ROUNDS: usize = 6;

/// Load the embedded answer and allowed-guess lists into a shared vocabulary
pub fn load_vocabulary() -> Result<Vocabulary, LoadError> {
    EmbeddedWordLists.load().map(Vocabulary::new)
}
