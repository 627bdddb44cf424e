//! Wordle Entropy CLI
//!
//! Interactive solver plus batch commands for solving, simulating and
//! benchmarking.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use wordle_entropy::config::init_rayon_threads;
use wordle_entropy::{
    CancelToken, EmbeddedWordLists, FeedbackPattern, FileWordLists, GuessPool, GuessSelector,
    Simulation, SimulationReport, SolveEvent, SolveReport, SolveStatus, Solver, SolverConfig,
    Vocabulary, Word,
};

const BANNER_TEXT: &str = include_str!("text/banner.txt");

#[derive(Parser)]
#[command(name = "wordle-entropy", version, about)]
struct Cli {
    /// Answer list, one word per line (defaults to the built-in list)
    #[arg(long, requires = "guesses")]
    answers: Option<PathBuf>,
    /// Allowed-guess list, one word per line
    #[arg(long, requires = "answers")]
    guesses: Option<PathBuf>,
    /// Guesses allowed per puzzle [env: WORDLE_MAX_ROUNDS]
    #[arg(long)]
    max_rounds: Option<usize>,
    /// Fixed first guess [env: WORDLE_OPENER]
    #[arg(long)]
    opener: Option<Word>,
    /// Words scored as guesses: "candidates" or "vocabulary" [env: WORDLE_GUESS_POOL]
    #[arg(long)]
    pool: Option<GuessPool>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve for a known target word
    Solve {
        target: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Print each round as it is played
        #[arg(short, long)]
        verbose: bool,
    },
    /// Solve randomly drawn answers and report the guess distribution
    Simulate {
        #[arg(short = 'n', long, default_value_t = 1000)]
        trials: usize,
        #[arg(long)]
        seed: Option<u64>,
        /// Write the distribution as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        json: bool,
        /// Stop starting new solves after this many seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Solve every answer once
    Benchmark,
    /// Score the full vocabulary to find the opener worth pinning
    Opener,
}

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut i = 0;
            let mut stderr = io::stderr();
            while running_clone.load(Ordering::Relaxed) {
                let _ = write!(stderr, "\r{} {}", frames[i % frames.len()], message);
                let _ = stderr.flush();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            let _ = write!(stderr, "\r{}\r", " ".repeat(message.len() + 3));
            let _ = stderr.flush();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn uses_embedded_lists(cli: &Cli) -> bool {
    cli.answers.is_none() || cli.guesses.is_none()
}

fn load_vocabulary(cli: &Cli) -> Result<Vocabulary> {
    match (&cli.answers, &cli.guesses) {
        (Some(answers), Some(guesses)) => {
            Vocabulary::load(&FileWordLists::new(answers, guesses)).context("loading word lists")
        }
        _ => Vocabulary::load(&EmbeddedWordLists).context("loading built-in word lists"),
    }
}

fn solver_config(cli: &Cli) -> Result<SolverConfig> {
    let mut config = SolverConfig::from_env().context("reading configuration from environment")?;
    if config.opener.is_none() && uses_embedded_lists(cli) {
        config.opener = Some(EmbeddedWordLists::OPENER);
    }
    if let Some(max_rounds) = cli.max_rounds {
        if max_rounds == 0 {
            bail!("--max-rounds must be at least 1");
        }
        config.max_rounds = max_rounds;
    }
    if let Some(opener) = cli.opener {
        config.opener = Some(opener);
    }
    if let Some(pool) = cli.pool {
        config.pool = pool;
    }
    Ok(config)
}

fn print_verbose(event: &SolveEvent<'_>) {
    match event {
        SolveEvent::Guess {
            round,
            analysis,
            candidates,
        } => eprintln!(
            "[round {}] {} candidates, guessing {} ({:.3} bits)",
            round,
            candidates,
            analysis.word.to_uppercase(),
            analysis.entropy
        ),
        SolveEvent::Feedback {
            round,
            guess,
            feedback,
            remaining,
        } => eprintln!(
            "[round {}] {} → {}, {} remaining",
            round,
            guess.to_uppercase(),
            feedback,
            remaining
        ),
        SolveEvent::Finished { status, rounds } => {
            eprintln!("[done] {:?} after {} rounds", status, rounds)
        }
    }
}

fn print_solve_report(report: &SolveReport, max_rounds: usize) {
    for round in &report.rounds {
        println!(
            "Guess {}: {} → {}",
            round.round,
            round.guess.to_uppercase(),
            round.feedback
        );
    }

    println!();
    match report.status {
        SolveStatus::Solved => println!("✓ Solved in {} guesses!", report.rounds_used),
        SolveStatus::RoundLimitReached => {
            println!("✗ Failed to solve within {} guesses.", max_rounds)
        }
        SolveStatus::Exhausted => println!("✗ No words match the feedback."),
        SolveStatus::Active => {}
    }
}

fn print_distribution(report: &SimulationReport) {
    let total = report.completed.max(1) as u64;

    println!("Guess distribution:");
    for (i, &count) in report.histogram.iter().enumerate() {
        let pct = count as f64 / total as f64 * 100.0;
        let bar = "█".repeat(((count * 40 / total) as usize).max(1));
        println!("  {} guesses: {:>5} ({:>5.1}%) {}", i + 1, count, pct, bar);
    }
    println!("  failed:    {:>5}", report.failures);
    println!();
    if let Some(average) = report.average_rounds() {
        println!("Average guesses: {:.3}", average);
    }
    println!("Games played: {}", report.completed);
    if report.cancelled {
        println!(
            "Stopped early: {} of {} games were not played.",
            report.trials - report.completed,
            report.trials
        );
    }
}

fn run_solve(vocab: &Vocabulary, config: SolverConfig, target: &str, json: bool, verbose: bool) -> Result<()> {
    let target = vocab.resolve(target).context("invalid target")?;
    let max_rounds = config.max_rounds;

    let observer = print_verbose;
    let mut solver = Solver::new(vocab, config);
    if verbose {
        solver = solver.with_observer(&observer);
    }
    let report = solver.solve_for_target(&target)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Solving for: {}", target.to_uppercase());
        println!();
        print_solve_report(&report, max_rounds);
    }
    Ok(())
}

fn run_simulate(
    vocab: &Vocabulary,
    config: &SolverConfig,
    simulation: Simulation,
    csv: Option<PathBuf>,
    json: bool,
    timeout: Option<u64>,
) -> Result<()> {
    let cancel = CancelToken::new();
    if let Some(secs) = timeout {
        let cancel = cancel.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_secs(secs));
            cancel.cancel();
        });
    }

    let spinner = Spinner::new("Simulating...");
    let start = Instant::now();
    let result = simulation.run(vocab, config, &cancel);
    let elapsed = start.elapsed();
    spinner.stop();
    let report = result?;

    if let Some(path) = csv {
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        report
            .write_csv(BufWriter::new(file))
            .with_context(|| format!("writing {}", path.display()))?;
        eprintln!("Results saved to {}", path.display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(seed) = report.seed {
        println!("Seed: {}", seed);
    }
    println!();
    print_distribution(&report);
    println!("Time elapsed: {:.2?}", elapsed);
    Ok(())
}

fn run_benchmark(vocab: &Vocabulary, config: &SolverConfig) -> Result<()> {
    println!("Running benchmark on all {} answers...", vocab.answers().len());

    let spinner = Spinner::new("Computing...");
    let start = Instant::now();
    let result = Simulation::exhaustive(vocab, config, &CancelToken::new());
    let elapsed = start.elapsed();
    spinner.stop();
    let report = result?;

    println!();
    print_distribution(&report);
    println!("Time elapsed: {:.2?}", elapsed);
    if report.failures == 0 {
        println!("✓ All words solved within {} guesses!", config.max_rounds);
    }
    Ok(())
}

fn run_opener(vocab: &Vocabulary) -> Result<()> {
    let spinner = Spinner::new("Scoring the full vocabulary...");
    let best = GuessSelector::derive_opener(vocab);
    spinner.stop();

    match best {
        Some(analysis) => {
            println!("Best opening guess: {}", analysis.word.to_uppercase());
            println!("Entropy: {:.3} bits", analysis.entropy);
            println!();
            println!("Pin it with --opener {} or WORDLE_OPENER={}", analysis.word, analysis.word);
            Ok(())
        }
        None => bail!("no words available"),
    }
}

fn print_banner() {
    for line in BANNER_TEXT.lines().take(6) {
        println!("{}", line);
    }
}

fn print_help() {
    println!("{}", BANNER_TEXT);
}

fn run_interactive(vocab: &Vocabulary, config: SolverConfig) -> Result<()> {
    print_banner();
    println!("Loaded {} words ({} possible answers).", vocab.len(), vocab.answers().len());
    println!();

    let mut solver = Solver::new(vocab, config.clone());
    println!("Type 'help' for commands or 'suggest' to get started.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => {
                print_help();
            }
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "suggest" | "s" | "best" => match solver.suggest() {
                Some(analysis) => {
                    println!();
                    println!("Best guess: {} ", analysis.word.to_uppercase());
                    println!("  Entropy: {:.3} bits", analysis.entropy);
                    println!("  Expected remaining: {:.1} words", analysis.expected_remaining);
                    if analysis.is_candidate {
                        println!("  ✓ This word is a possible answer");
                    } else {
                        println!("  ✗ This word is NOT a possible answer");
                    }
                    println!();
                    println!("Remaining possibilities: {}", solver.candidates().len());
                    println!();
                }
                None => {
                    println!("No guess to make ({:?}). Use 'reset' to start over.", solver.status());
                }
            },
            "top" | "t" => {
                let n: usize = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(5);
                let top = solver.top_guesses(n);

                if top.is_empty() {
                    println!("No possible words remaining.");
                } else {
                    println!();
                    println!("Top {} guesses:", top.len());
                    println!("{:>4} {:>8} {:>8} {:>12} Possible?", "#", "Word", "Entropy", "Exp. Remain");
                    println!("{}", "-".repeat(50));
                    for (i, analysis) in top.iter().enumerate() {
                        println!(
                            "{:>4} {:>8} {:>8.3} {:>12.1} {}",
                            i + 1,
                            analysis.word.to_uppercase(),
                            analysis.entropy,
                            analysis.expected_remaining,
                            if analysis.is_candidate { "✓" } else { "" }
                        );
                    }
                    println!();
                }
            }
            "feedback" | "f" | "fb" => {
                if parts.len() < 3 {
                    println!("Usage: feedback <word> <pattern>");
                    println!("Example: feedback crane gy---");
                    continue;
                }

                let word = match Word::parse(parts[1]) {
                    Ok(word) => word,
                    Err(e) => {
                        println!("Invalid word: {}", e);
                        continue;
                    }
                };
                let pattern = match FeedbackPattern::parse(parts[2]) {
                    Some(pattern) => pattern,
                    None => {
                        println!("Invalid pattern: {}", parts[2]);
                        println!("Use g=green, y=yellow, b or -=gray (5 characters)");
                        continue;
                    }
                };

                let prev_count = solver.candidates().len();
                match solver.apply_feedback(&word, pattern) {
                    Ok(status) => {
                        let new_count = solver.candidates().len();
                        println!();
                        println!("Guess: {}", word.to_uppercase());
                        println!("Feedback: {}", pattern);
                        println!(
                            "Eliminated {} words ({} → {})",
                            prev_count - new_count,
                            prev_count,
                            new_count
                        );

                        match status {
                            SolveStatus::Solved => {
                                println!();
                                println!("🎉 Congratulations! You solved it!");
                            }
                            SolveStatus::Exhausted => {
                                println!();
                                println!("⚠️  No words match this feedback pattern!");
                                println!("The answer may not be in the word list. Use 'reset' to start over.");
                            }
                            SolveStatus::RoundLimitReached => {
                                println!();
                                println!("Out of guesses. Use 'reset' to start over.");
                            }
                            SolveStatus::Active if new_count <= 10 => {
                                println!();
                                println!(
                                    "Remaining words: {:?}",
                                    solver
                                        .candidates()
                                        .iter()
                                        .map(|w| w.to_uppercase())
                                        .collect::<Vec<_>>()
                                );
                            }
                            SolveStatus::Active => {}
                        }
                        println!();
                    }
                    Err(e) => {
                        println!("Rejected: {}", e);
                        println!("Check the pattern and try again.");
                    }
                }
            }
            "remaining" | "r" | "left" => {
                let remaining = solver.candidates();
                println!();
                println!("Remaining possibilities: {}", remaining.len());
                if remaining.len() <= 20 {
                    for (i, word) in remaining.iter().enumerate() {
                        if i > 0 && i % 10 == 0 {
                            println!();
                        }
                        print!("{:>8}", word.to_uppercase());
                    }
                    println!();
                }
                println!();
            }
            "solve" => {
                if parts.len() < 2 {
                    println!("Usage: solve <target_word>");
                    continue;
                }

                let target = match vocab.resolve(parts[1]) {
                    Ok(target) => target,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };

                println!();
                println!("Solving for: {}", target.to_uppercase());
                println!();

                let mut demo = Solver::new(vocab, config.clone());
                match demo.solve_for_target(&target) {
                    Ok(report) => print_solve_report(&report, config.max_rounds),
                    Err(e) => println!("Solver error: {}", e),
                }
                println!();
            }
            "reset" => {
                solver.reset();
                println!("Reset to initial state. {} words available.", solver.candidates().len());
            }
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_rayon_threads();

    let vocab = load_vocabulary(&cli)?;
    let config = solver_config(&cli)?;

    match cli.command {
        Some(Command::Solve {
            target,
            json,
            verbose,
        }) => run_solve(&vocab, config, &target, json, verbose),
        Some(Command::Simulate {
            trials,
            seed,
            csv,
            json,
            timeout,
        }) => {
            let simulation = Simulation { trials, seed };
            run_simulate(&vocab, &config, simulation, csv, json, timeout)
        }
        Some(Command::Benchmark) => run_benchmark(&vocab, &config),
        Some(Command::Opener) => run_opener(&vocab),
        None => run_interactive(&vocab, config),
    }
}
