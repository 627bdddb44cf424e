//! Error types shared across the solver.

use std::path::PathBuf;

use thiserror::Error;

/// A string that cannot be turned into a [`Word`](crate::Word).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("word contains {0:?}, only letters a-z are allowed")]
    InvalidLetter(char),
    #[error("{0:?} is not in the dictionary")]
    NotInVocabulary(String),
}

/// Feedback that cannot be reconciled with what earlier rounds established.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Contradiction {
    #[error("letter '{letter}' needs at least {min} occurrences but at most {max} are allowed")]
    CountBounds { letter: char, min: u8, max: u8 },
    #[error("position {position} is fixed to '{fixed}' but feedback marks '{found}' as a match")]
    GreenConflict {
        position: usize,
        fixed: char,
        found: char,
    },
    #[error("position {position} must be '{letter}' but '{letter}' is banned there")]
    GreenBanned { position: usize, letter: char },
    #[error("feedback requires {required} letters, more than a word holds")]
    TooManyLetters { required: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("contradictory feedback: {0}")]
    Contradiction(#[from] Contradiction),
    #[error("the puzzle is already finished")]
    Finished,
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: invalid word", path.display())]
    InvalidWord {
        path: PathBuf,
        line: usize,
        #[source]
        source: WordError,
    },
    #[error("word lists are empty")]
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} is not a valid word")]
    InvalidWord {
        name: &'static str,
        #[source]
        source: WordError,
    },
    #[error("unknown guess pool {0:?}, expected \"candidates\" or \"vocabulary\"")]
    UnknownPool(String),
}
