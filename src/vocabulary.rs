//! Word lists and the shared vocabulary built from them.
//!
//! A [`Vocabulary`] is loaded once per process and handed to every solve by
//! reference. It is never mutated after construction, apart from the opener
//! cache which is filled at most once.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{LoadError, WordError};
use crate::selector::GuessAnalysis;
use crate::word::Word;

const EMBEDDED_ANSWERS: &str = include_str!("../data/answers.txt");
const EMBEDDED_ALLOWED: &str = include_str!("../data/allowed.txt");

/// The raw output of a [`WordListProvider`].
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    /// Words that can be the hidden target.
    pub answers: Vec<Word>,
    /// Extra words accepted as guesses.
    pub guesses: Vec<Word>,
}

/// A source of answer and allowed-guess word lists.
pub trait WordListProvider {
    fn load(&self) -> Result<WordLists, LoadError>;
}

/// The word lists compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWordLists;

impl EmbeddedWordLists {
    /// The highest-entropy first guess for the embedded lists, as reported
    /// by `wordle-entropy opener`. Re-derive it whenever the lists change.
    pub const OPENER: Word = Word::from_ascii(*b"tares");
}

impl WordListProvider for EmbeddedWordLists {
    fn load(&self) -> Result<WordLists, LoadError> {
        Ok(WordLists {
            answers: parse_lines(EMBEDDED_ANSWERS, Path::new("data/answers.txt"))?,
            guesses: parse_lines(EMBEDDED_ALLOWED, Path::new("data/allowed.txt"))?,
        })
    }
}

/// Two line-delimited files, one word per line.
#[derive(Debug, Clone)]
pub struct FileWordLists {
    pub answers_path: PathBuf,
    pub guesses_path: PathBuf,
}

impl FileWordLists {
    pub fn new(answers_path: impl Into<PathBuf>, guesses_path: impl Into<PathBuf>) -> Self {
        Self {
            answers_path: answers_path.into(),
            guesses_path: guesses_path.into(),
        }
    }
}

impl WordListProvider for FileWordLists {
    fn load(&self) -> Result<WordLists, LoadError> {
        Ok(WordLists {
            answers: read_list(&self.answers_path)?,
            guesses: read_list(&self.guesses_path)?,
        })
    }
}

fn read_list(path: &Path) -> Result<Vec<Word>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_lines(&text, path)
}

fn parse_lines(text: &str, path: &Path) -> Result<Vec<Word>, LoadError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            Word::parse(line).map_err(|source| LoadError::InvalidWord {
                path: path.to_path_buf(),
                line: i + 1,
                source,
            })
        })
        .collect()
}

/// The immutable set of words a solve works over.
#[derive(Debug)]
pub struct Vocabulary {
    /// Sorted, deduplicated union of answers and allowed guesses.
    words: Vec<Word>,
    /// Possible targets, in provider order.
    answers: Vec<Word>,
    opener: OnceLock<Option<GuessAnalysis>>,
}

impl Vocabulary {
    pub fn new(lists: WordLists) -> Self {
        let WordLists { answers, guesses } = lists;
        let mut words: Vec<Word> = answers.iter().chain(&guesses).copied().collect();
        words.sort_unstable();
        words.dedup();
        Self {
            words,
            answers,
            opener: OnceLock::new(),
        }
    }

    /// Build a vocabulary where every word is also an answer.
    pub fn from_words(words: Vec<Word>) -> Self {
        Self::new(WordLists {
            answers: words,
            guesses: Vec::new(),
        })
    }

    /// Load from a provider, rejecting an empty result.
    pub fn load(provider: &impl WordListProvider) -> Result<Self, LoadError> {
        let vocab = Self::new(provider.load()?);
        if vocab.is_empty() || vocab.answers.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(vocab)
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, index: usize) -> Word {
        self.words[index]
    }

    pub fn index_of(&self, word: &Word) -> Option<usize> {
        self.words.binary_search(word).ok()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.index_of(word).is_some()
    }

    /// Parse user input and check it against the vocabulary.
    pub fn resolve(&self, input: &str) -> Result<Word, WordError> {
        let word = Word::parse(input)?;
        if !self.contains(&word) {
            return Err(WordError::NotInVocabulary(word.to_string()));
        }
        Ok(word)
    }

    /// The best opener for this vocabulary, scoring it with `derive` the
    /// first time it is asked for.
    pub(crate) fn cached_opener<F>(&self, derive: F) -> Option<&GuessAnalysis>
    where
        F: FnOnce() -> Option<GuessAnalysis>,
    {
        self.opener.get_or_init(derive).as_ref()
    }
}
