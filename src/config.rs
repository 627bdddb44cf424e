//! Solver configuration.
//!
//! Defaults can be overridden from the environment:
//!
//! - `WORDLE_MAX_ROUNDS`: guesses allowed per solve (default 6)
//! - `WORDLE_OPENER`: fixed first guess, see [`SolverConfig::opener`]
//! - `WORDLE_GUESS_POOL`: `candidates` (default) or `vocabulary`
//! - `RAYON_NUM_THREADS`: worker threads for scoring and simulation

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ConfigError;
use crate::word::Word;
use crate::MAX_ROUNDS;

/// Which words the selector is allowed to score as guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GuessPool {
    /// Only words that could still be the answer.
    #[default]
    Candidates,
    /// Every word in the vocabulary, including ones already ruled out.
    /// Can split the remaining candidates better, at the cost of sometimes
    /// guessing a word that cannot win.
    Vocabulary,
}

impl FromStr for GuessPool {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "candidates" => Ok(GuessPool::Candidates),
            "vocabulary" | "vocab" | "all" => Ok(GuessPool::Vocabulary),
            _ => Err(ConfigError::UnknownPool(s.to_string())),
        }
    }
}

impl fmt::Display for GuessPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessPool::Candidates => write!(f, "candidates"),
            GuessPool::Vocabulary => write!(f, "vocabulary"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Guesses allowed before the solve ends unsolved.
    pub max_rounds: usize,
    /// First guess used while nothing is known yet.
    ///
    /// Meant to be the word with the highest entropy over the full
    /// vocabulary, found once with `wordle-entropy opener` and pinned here.
    /// When unset, or when the word is not in the vocabulary, the opener is
    /// scored on first use and cached on the vocabulary.
    pub opener: Option<Word>,
    pub pool: GuessPool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_rounds: MAX_ROUNDS,
            opener: None,
            pool: GuessPool::Candidates,
        }
    }
}

impl SolverConfig {
    pub fn with_opener(mut self, opener: Word) -> Self {
        self.opener = Some(opener);
        self
    }

    pub fn with_pool(mut self, pool: GuessPool) -> Self {
        self.pool = pool;
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Read `WORDLE_MAX_ROUNDS`, `WORDLE_OPENER` and `WORDLE_GUESS_POOL`,
    /// keeping the default for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`SolverConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("WORDLE_MAX_ROUNDS") {
            config.max_rounds = match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        name: "WORDLE_MAX_ROUNDS",
                        value,
                    })
                }
            };
        }

        if let Some(value) = lookup("WORDLE_OPENER") {
            let opener = Word::parse(&value).map_err(|source| ConfigError::InvalidWord {
                name: "WORDLE_OPENER",
                source,
            })?;
            config.opener = Some(opener);
        }

        if let Some(value) = lookup("WORDLE_GUESS_POOL") {
            config.pool = value.parse()?;
        }

        Ok(config)
    }
}

/// Read `RAYON_NUM_THREADS` and build the global rayon pool.
/// Tolerates an already-initialized pool. Returns the thread count.
pub fn init_rayon_threads() -> usize {
    let requested = std::env::var("RAYON_NUM_THREADS")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&n| n > 0);

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = requested {
        builder = builder.num_threads(n);
    }
    builder.build_global().ok(); // May fail if already initialized
    rayon::current_num_threads()
}
