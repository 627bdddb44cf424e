//! The round loop: guess, get feedback, tighten constraints, filter, repeat.

use serde::Serialize;

use crate::config::SolverConfig;
use crate::constraints::ConstraintState;
use crate::error::SolverError;
use crate::feedback::FeedbackPattern;
use crate::filter::{filter_candidates, CandidateSet};
use crate::selector::{GuessAnalysis, GuessSelector};
use crate::vocabulary::Vocabulary;
use crate::word::Word;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    /// Still guessing.
    Active,
    /// The last feedback was all matches.
    Solved,
    /// No candidate is consistent with the feedback.
    Exhausted,
    /// Every allowed guess was used without solving.
    RoundLimitReached,
}

impl SolveStatus {
    pub fn is_finished(self) -> bool {
        self != SolveStatus::Active
    }
}

/// One guess and the feedback it got.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Round {
    /// 1-based round number.
    pub round: usize,
    pub guess: Word,
    pub feedback: FeedbackPattern,
}

/// The outcome of a solve, as handed to a host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    pub rounds: Vec<Round>,
    pub status: SolveStatus,
    pub solved: bool,
    pub rounds_used: usize,
}

/// Something worth reporting while a solve runs.
#[derive(Debug, Clone, Copy)]
pub enum SolveEvent<'a> {
    /// A guess was chosen out of `candidates` remaining words.
    Guess {
        round: usize,
        analysis: &'a GuessAnalysis,
        candidates: usize,
    },
    /// Feedback was applied, leaving `remaining` candidates.
    Feedback {
        round: usize,
        guess: Word,
        feedback: FeedbackPattern,
        remaining: usize,
    },
    Finished { status: SolveStatus, rounds: usize },
}

/// Receives [`SolveEvent`]s. The solver itself never prints.
pub trait SolveObserver: Sync {
    fn observe(&self, event: &SolveEvent<'_>);
}

impl<F> SolveObserver for F
where
    F: Fn(&SolveEvent<'_>) + Sync,
{
    fn observe(&self, event: &SolveEvent<'_>) {
        self(event)
    }
}

struct Silent;

impl SolveObserver for Silent {
    fn observe(&self, _event: &SolveEvent<'_>) {}
}

static SILENT: Silent = Silent;

/// A single solve over a shared vocabulary.
#[derive(Clone)]
pub struct Solver<'v> {
    vocab: &'v Vocabulary,
    config: SolverConfig,
    selector: GuessSelector,
    state: ConstraintState,
    candidates: CandidateSet<'v>,
    history: Vec<Round>,
    status: SolveStatus,
    observer: &'v dyn SolveObserver,
}

impl<'v> Solver<'v> {
    pub fn new(vocab: &'v Vocabulary, config: SolverConfig) -> Self {
        Self {
            vocab,
            selector: GuessSelector::new(&config),
            config,
            state: ConstraintState::new(),
            candidates: CandidateSet::full(vocab),
            history: Vec::new(),
            status: SolveStatus::Active,
            observer: &SILENT,
        }
    }

    pub fn with_observer(mut self, observer: &'v dyn SolveObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Start a new solve over the same vocabulary.
    pub fn reset(&mut self) {
        self.state.reset();
        self.candidates = CandidateSet::full(self.vocab);
        self.history.clear();
        self.status = SolveStatus::Active;
    }

    pub fn vocabulary(&self) -> &'v Vocabulary {
        self.vocab
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn status(&self) -> SolveStatus {
        self.status
    }

    pub fn history(&self) -> &[Round] {
        &self.history
    }

    pub fn candidates(&self) -> &CandidateSet<'v> {
        &self.candidates
    }

    pub fn constraints(&self) -> &ConstraintState {
        &self.state
    }

    /// The number of the round about to be played.
    pub fn round(&self) -> usize {
        self.history.len() + 1
    }

    /// The guess the solver would play next, without committing to it.
    pub fn suggest(&self) -> Option<GuessAnalysis> {
        if self.status.is_finished() {
            return None;
        }
        self.selector.next_guess(&self.state, &self.candidates)
    }

    /// The `n` best guesses for the current candidates.
    pub fn top_guesses(&self, n: usize) -> Vec<GuessAnalysis> {
        self.selector.top_guesses(&self.candidates, n)
    }

    /// Record the feedback for one guess and move the solve forward.
    ///
    /// Contradictory feedback is rejected without recording the round, so
    /// the caller can correct it and try again.
    pub fn apply_feedback(
        &mut self,
        guess: &Word,
        feedback: FeedbackPattern,
    ) -> Result<SolveStatus, SolverError> {
        if self.status.is_finished() {
            return Err(SolverError::Finished);
        }
        let round = self.round();

        if feedback.is_win() {
            self.history.push(Round {
                round,
                guess: *guess,
                feedback,
            });
            // only the guess itself is left once it wins
            self.observer.observe(&SolveEvent::Feedback {
                round,
                guess: *guess,
                feedback,
                remaining: 1,
            });
            return Ok(self.finish(SolveStatus::Solved));
        }

        self.state.update(guess, feedback)?;
        self.history.push(Round {
            round,
            guess: *guess,
            feedback,
        });
        self.candidates = filter_candidates(&self.candidates, &self.state);

        self.observer.observe(&SolveEvent::Feedback {
            round,
            guess: *guess,
            feedback,
            remaining: self.candidates.len(),
        });

        if self.history.len() >= self.config.max_rounds {
            return Ok(self.finish(SolveStatus::RoundLimitReached));
        }
        if self.candidates.is_empty() {
            return Ok(self.finish(SolveStatus::Exhausted));
        }
        Ok(self.status)
    }

    /// Solve a puzzle automatically, given a function that provides feedback.
    pub fn solve_with_feedback<F>(&mut self, mut get_feedback: F) -> Result<SolveReport, SolverError>
    where
        F: FnMut(&Word) -> FeedbackPattern,
    {
        while !self.status.is_finished() {
            let analysis = match self.suggest() {
                Some(analysis) => analysis,
                None => {
                    self.finish(SolveStatus::Exhausted);
                    break;
                }
            };
            self.observer.observe(&SolveEvent::Guess {
                round: self.round(),
                analysis: &analysis,
                candidates: self.candidates.len(),
            });

            let feedback = get_feedback(&analysis.word);
            self.apply_feedback(&analysis.word, feedback)?;
        }
        Ok(self.report())
    }

    /// Solve a puzzle knowing the target word (for testing/benchmarking)
    pub fn solve_for_target(&mut self, target: &Word) -> Result<SolveReport, SolverError> {
        self.solve_with_feedback(|guess| FeedbackPattern::compute(guess, target))
    }

    pub fn report(&self) -> SolveReport {
        SolveReport {
            rounds: self.history.clone(),
            status: self.status,
            solved: self.status == SolveStatus::Solved,
            rounds_used: self.history.len(),
        }
    }

    fn finish(&mut self, status: SolveStatus) -> SolveStatus {
        self.status = status;
        self.observer.observe(&SolveEvent::Finished {
            status,
            rounds: self.history.len(),
        });
        status
    }
}
