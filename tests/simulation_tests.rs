use wordle_entropy::simulation::run_targets;
use wordle_entropy::{
    load_vocabulary, CancelToken, EmbeddedWordLists, Simulation, SolverConfig, Vocabulary, Word,
};

fn w(s: &str) -> Word {
    Word::parse(s).unwrap()
}

fn get_test_words() -> Vocabulary {
    let words = [
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    ];
    Vocabulary::from_words(words.iter().map(|s| w(s)).collect())
}

#[test]
fn test_same_seed_same_report() {
    let vocab = get_test_words();
    let config = SolverConfig::default();
    let simulation = Simulation::new(200).with_seed(42);

    let first = simulation.run(&vocab, &config, &CancelToken::new()).unwrap();
    let second = simulation.run(&vocab, &config, &CancelToken::new()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.seed, Some(42));
}

#[test]
fn test_counts_add_up() {
    let vocab = get_test_words();
    let report = Simulation::new(100)
        .with_seed(7)
        .run(&vocab, &SolverConfig::default(), &CancelToken::new())
        .unwrap();

    assert_eq!(report.trials, 100);
    assert_eq!(report.completed, 100);
    assert!(!report.cancelled);
    assert_eq!(report.histogram.len(), 6);
    assert_eq!(report.solved() + report.failures, 100);
    assert_eq!(report.failures, 0);

    let average = report.average_rounds().unwrap();
    assert!((1.0..=6.0).contains(&average));
}

#[test]
fn test_random_seed_is_reported() {
    let vocab = get_test_words();
    let report = Simulation::new(5)
        .run(&vocab, &SolverConfig::default(), &CancelToken::new())
        .unwrap();

    assert!(report.seed.is_some());
    assert_eq!(report.completed, 5);
}

#[test]
fn test_cancelled_before_start() {
    let vocab = get_test_words();
    let cancel = CancelToken::new();
    cancel.cancel();
    assert!(cancel.is_cancelled());

    let report = Simulation::new(50)
        .with_seed(1)
        .run(&vocab, &SolverConfig::default(), &cancel)
        .unwrap();

    assert!(report.cancelled);
    assert_eq!(report.completed, 0);
    assert_eq!(report.solved(), 0);
    assert_eq!(report.failures, 0);
    assert_eq!(report.average_rounds(), None);
}

#[test]
fn test_round_limit_counts_as_failure() {
    let vocab = get_test_words();
    let config = SolverConfig::default().with_max_rounds(1);
    let report = run_targets(&vocab, &config, &[w("toast"), w("crane")], &CancelToken::new()).unwrap();

    // the opener "crane" is the only target found in one guess
    assert_eq!(report.histogram, vec![1]);
    assert_eq!(report.failures, 1);
    assert_eq!(report.completed, 2);
}

#[test]
fn test_exhaustive_small_vocabulary() {
    let vocab = get_test_words();
    let report = Simulation::exhaustive(&vocab, &SolverConfig::default(), &CancelToken::new()).unwrap();

    assert_eq!(report.completed, vocab.answers().len());
    assert_eq!(report.failures, 0);
    assert_eq!(report.histogram[0], 1);
}

#[test]
fn test_csv_output() {
    let vocab = get_test_words();
    let config = SolverConfig::default().with_max_rounds(1);
    let report = run_targets(&vocab, &config, &[w("toast"), w("crane")], &CancelToken::new()).unwrap();

    let mut out = Vec::new();
    report.write_csv(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Guesses,Count\n1,1\nfail,1\n");
}

#[test]
fn test_report_serializes() {
    let vocab = get_test_words();
    let report = Simulation::new(10)
        .with_seed(3)
        .run(&vocab, &SolverConfig::default(), &CancelToken::new())
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["seed"], 3);
    assert_eq!(json["trials"], 10);
    assert_eq!(json["histogram"].as_array().unwrap().len(), 6);
    assert_eq!(json["cancelled"], false);
}

#[test]
fn test_full_dictionary_is_reproducible() {
    let vocab = load_vocabulary().unwrap();
    let config = SolverConfig::default().with_opener(EmbeddedWordLists::OPENER);
    let simulation = Simulation::new(1000).with_seed(2024);

    let first = simulation.run(&vocab, &config, &CancelToken::new()).unwrap();
    let second = simulation.run(&vocab, &config, &CancelToken::new()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.completed, 1000);
    assert_eq!(first.failures, 0);
}

#[test]
fn test_every_answer_within_six() {
    let vocab = load_vocabulary().unwrap();
    let config = SolverConfig::default().with_opener(EmbeddedWordLists::OPENER);
    let report = Simulation::exhaustive(&vocab, &config, &CancelToken::new()).unwrap();

    assert_eq!(report.completed, vocab.answers().len());
    assert_eq!(report.failures, 0);
}
