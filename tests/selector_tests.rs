use wordle_entropy::selector::entropy;
use wordle_entropy::{
    filter_candidates, is_valid, CandidateSet, ConstraintState, FeedbackPattern, GuessPool,
    GuessSelector, SolverConfig, Vocabulary, Word,
};

fn w(s: &str) -> Word {
    Word::parse(s).unwrap()
}

fn vocab(words: &[&str]) -> Vocabulary {
    Vocabulary::from_words(words.iter().map(|s| w(s)).collect())
}

fn get_test_words() -> Vocabulary {
    vocab(&[
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    ])
}

/// Six "-atch" words plus "blimp", filtered down to the six.
fn atch_vocab() -> Vocabulary {
    vocab(&["batch", "hatch", "latch", "match", "patch", "watch", "blimp"])
}

fn atch_state() -> ConstraintState {
    let mut state = ConstraintState::new();
    state
        .update(&w("fizzy"), FeedbackPattern::parse("-----").unwrap())
        .unwrap();
    state
}

#[test]
fn test_entropy_calculation() {
    let targets: Vec<Word> = ["crane", "trace", "crate", "slate"].iter().map(|s| w(s)).collect();

    // "crane" gives a different pattern for each of the four
    let e = entropy(&w("crane"), &targets);
    assert!((e - 2.0).abs() < 1e-12);

    let e = entropy(&w("slate"), &targets);
    assert!(e > 0.0);
    assert!(e <= 2.0);

    assert_eq!(entropy(&w("crane"), &targets[..1]), 0.0);
}

#[test]
fn test_empty_candidates_yield_no_guess() {
    let vocab = get_test_words();
    let mut state = ConstraintState::new();
    state
        .update(&w("zzzzz"), FeedbackPattern::parse("g----").unwrap())
        .unwrap();
    let candidates = filter_candidates(&CandidateSet::full(&vocab), &state);
    assert!(candidates.is_empty());

    let selector = GuessSelector::default();
    assert!(selector.next_guess(&state, &candidates).is_none());
    assert!(selector.top_guesses(&candidates, 5).is_empty());
}

#[test]
fn test_single_candidate_is_returned_directly() {
    let vocab = vocab(&["crane"]);
    let selector = GuessSelector::default();
    let analysis = selector
        .next_guess(&ConstraintState::new(), &CandidateSet::full(&vocab))
        .unwrap();

    assert_eq!(analysis.word, w("crane"));
    assert_eq!(analysis.entropy, 0.0);
    assert!(analysis.is_candidate);
}

#[test]
fn test_configured_opener_on_first_round() {
    let vocab = get_test_words();
    let config = SolverConfig::default().with_opener(w("toast"));
    let selector = GuessSelector::new(&config);

    let analysis = selector
        .next_guess(&ConstraintState::new(), &CandidateSet::full(&vocab))
        .unwrap();
    assert_eq!(analysis.word, w("toast"));
}

#[test]
fn test_unknown_opener_falls_back_to_derived() {
    let vocab = get_test_words();
    let config = SolverConfig::default().with_opener(w("fuzzy"));
    let selector = GuessSelector::new(&config);

    let derived = GuessSelector::derive_opener(&vocab).unwrap();
    let analysis = selector
        .next_guess(&ConstraintState::new(), &CandidateSet::full(&vocab))
        .unwrap();
    assert_eq!(analysis.word, derived.word);
    assert_eq!(analysis.word, w("crane"));
}

#[test]
fn test_ties_go_to_earliest_word() {
    let vocab = vocab(&["trace", "crane"]);
    let selector = GuessSelector::default();

    let analysis = selector
        .next_guess(&ConstraintState::new(), &CandidateSet::full(&vocab))
        .unwrap();
    assert_eq!(analysis.word, w("crane"));
    assert_eq!(analysis.entropy, 1.0);
}

#[test]
fn test_candidate_pool_stays_inside_candidates() {
    let vocab = atch_vocab();
    let state = atch_state();
    let candidates = filter_candidates(&CandidateSet::full(&vocab), &state);
    assert_eq!(candidates.len(), 6);
    assert!(!candidates.contains(&w("blimp")));

    let selector = GuessSelector::default();
    let analysis = selector.next_guess(&state, &candidates).unwrap();
    assert_eq!(analysis.word, w("batch"));
    assert!(analysis.is_candidate);
    assert!(candidates.contains(&analysis.word));
}

#[test]
fn test_vocabulary_pool_can_pick_non_candidate() {
    let vocab = atch_vocab();
    let state = atch_state();
    let candidates = filter_candidates(&CandidateSet::full(&vocab), &state);

    let config = SolverConfig::default().with_pool(GuessPool::Vocabulary);
    let selector = GuessSelector::new(&config);
    let analysis = selector.next_guess(&state, &candidates).unwrap();

    assert_eq!(analysis.word, w("blimp"));
    assert!(!analysis.is_candidate);
    assert!(analysis.entropy > 2.0);
}

#[test]
fn test_vocabulary_pool_tie_goes_to_earliest_word() {
    // "axxxx" is ruled out but splits the two candidates as well as they do
    let vocab = vocab(&["axxxx", "bbbbx", "bbbby"]);
    let mut state = ConstraintState::new();
    state
        .update(&w("bbbbz"), FeedbackPattern::parse("gggg-").unwrap())
        .unwrap();
    let candidates = filter_candidates(&CandidateSet::full(&vocab), &state);
    assert_eq!(candidates.to_words(), vec![w("bbbbx"), w("bbbby")]);

    let config = SolverConfig::default().with_pool(GuessPool::Vocabulary);
    let analysis = GuessSelector::new(&config)
        .next_guess(&state, &candidates)
        .unwrap();
    assert_eq!(analysis.word, w("axxxx"));
    assert_eq!(analysis.entropy, 1.0);
    assert!(!analysis.is_candidate);

    let analysis = GuessSelector::default()
        .next_guess(&state, &candidates)
        .unwrap();
    assert_eq!(analysis.word, w("bbbbx"));
}

#[test]
fn test_top_guesses_sorted() {
    let vocab = get_test_words();
    let selector = GuessSelector::default();
    let top = selector.top_guesses(&CandidateSet::full(&vocab), 3);

    assert_eq!(top.len(), 3);
    for i in 1..top.len() {
        assert!(top[i - 1].entropy >= top[i].entropy);
    }
    assert_eq!(top[0].word, w("crane"));
}

#[test]
fn test_filter_preserves_order() {
    let vocab = get_test_words();
    let mut state = ConstraintState::new();
    state
        .update(&w("crane"), FeedbackPattern::compute(&w("crane"), &w("toast")))
        .unwrap();

    let full = CandidateSet::full(&vocab);
    let filtered = filter_candidates(&full, &state);
    let words = filtered.to_words();

    assert!(filtered.len() <= full.len());
    assert!(words.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(words.iter().all(|word| is_valid(word, &state)));
    assert!(filtered.contains(&w("toast")));
}
