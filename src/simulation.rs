//! Batch simulation: solve many targets and collect the guess distribution.
//!
//! Solves are independent and share only the read-only vocabulary, so they
//! fan out across the rayon pool. Targets are drawn up front from a seeded
//! RNG and results are merged in trial order, so a seed always reproduces
//! the same report regardless of thread count.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::SolverConfig;
use crate::error::SolverError;
use crate::solver::Solver;
use crate::vocabulary::Vocabulary;
use crate::word::Word;

/// Cooperative cancellation for a batch of solves.
///
/// Checked between solves only; a solve that has started runs to the end.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Guess distribution over a batch of solves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    /// Seed the targets were drawn with, if they were drawn at random.
    pub seed: Option<u64>,
    /// Solves requested.
    pub trials: usize,
    /// Solves that ran before any cancellation.
    pub completed: usize,
    /// `histogram[i]` counts the solves finished in `i + 1` guesses.
    pub histogram: Vec<u64>,
    /// Solves that ran out of rounds or candidates.
    pub failures: u64,
    pub cancelled: bool,
}

impl SimulationReport {
    fn new(max_rounds: usize, trials: usize) -> Self {
        Self {
            seed: None,
            trials,
            completed: 0,
            histogram: vec![0; max_rounds],
            failures: 0,
            cancelled: false,
        }
    }

    fn record(&mut self, rounds_to_solve: Option<usize>) {
        self.completed += 1;
        match rounds_to_solve {
            Some(rounds) if rounds >= 1 && rounds <= self.histogram.len() => {
                self.histogram[rounds - 1] += 1
            }
            _ => self.failures += 1,
        }
    }

    /// Number of solves that found the target.
    pub fn solved(&self) -> u64 {
        self.histogram.iter().sum()
    }

    /// Mean guesses over the solved games.
    pub fn average_rounds(&self) -> Option<f64> {
        let solved = self.solved();
        if solved == 0 {
            return None;
        }
        let total: u64 = self
            .histogram
            .iter()
            .enumerate()
            .map(|(i, &count)| (i as u64 + 1) * count)
            .sum();
        Some(total as f64 / solved as f64)
    }

    /// Write the `Guesses,Count` table, one row per round plus a `fail` row.
    pub fn write_csv<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "Guesses,Count")?;
        for (i, count) in self.histogram.iter().enumerate() {
            writeln!(out, "{},{}", i + 1, count)?;
        }
        writeln!(out, "fail,{}", self.failures)?;
        out.flush()
    }
}

/// Solve randomly drawn answers.
#[derive(Debug, Clone, Copy)]
pub struct Simulation {
    pub trials: usize,
    /// Fixed seed for reproducible runs. A random one is drawn otherwise.
    pub seed: Option<u64>,
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            trials: 1000,
            seed: None,
        }
    }
}

impl Simulation {
    pub fn new(trials: usize) -> Self {
        Self { trials, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draw `trials` targets from the answer list and solve each one.
    pub fn run(
        &self,
        vocab: &Vocabulary,
        config: &SolverConfig,
        cancel: &CancelToken,
    ) -> Result<SimulationReport, SolverError> {
        let seed = self.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);

        let answers = vocab.answers();
        let targets: Vec<Word> = if answers.is_empty() {
            Vec::new()
        } else {
            (0..self.trials)
                .map(|_| answers[rng.gen_range(0..answers.len())])
                .collect()
        };

        let mut report = run_targets(vocab, config, &targets, cancel)?;
        report.trials = self.trials;
        report.seed = Some(seed);
        Ok(report)
    }

    /// Solve every answer in the vocabulary once.
    pub fn exhaustive(
        vocab: &Vocabulary,
        config: &SolverConfig,
        cancel: &CancelToken,
    ) -> Result<SimulationReport, SolverError> {
        run_targets(vocab, config, vocab.answers(), cancel)
    }
}

/// Solve each target independently and merge the outcomes.
pub fn run_targets(
    vocab: &Vocabulary,
    config: &SolverConfig,
    targets: &[Word],
    cancel: &CancelToken,
) -> Result<SimulationReport, SolverError> {
    // Derive the opener before fanning out so no solve scores it inside the pool.
    Solver::new(vocab, config.clone()).suggest();

    let outcomes = targets
        .par_iter()
        .map(|target| -> Result<Option<Option<usize>>, SolverError> {
            if cancel.is_cancelled() {
                return Ok(None);
            }
            let mut solver = Solver::new(vocab, config.clone());
            let report = solver.solve_for_target(target)?;
            Ok(Some(report.solved.then_some(report.rounds_used)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut report = SimulationReport::new(config.max_rounds, targets.len());
    for outcome in outcomes.into_iter().flatten() {
        report.record(outcome);
    }
    report.cancelled = report.completed < targets.len();
    Ok(report)
}
