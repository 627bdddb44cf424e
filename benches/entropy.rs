use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wordle_entropy::selector::entropy;
use wordle_entropy::{
    filter_candidates, load_vocabulary, CandidateSet, ConstraintState, EmbeddedWordLists, FeedbackPattern,
    GuessSelector, SolverConfig, Word,
};

fn bench_feedback(c: &mut Criterion) {
    let guess = Word::parse("geese").unwrap();
    let target = Word::parse("creep").unwrap();

    c.bench_function("feedback_compute", |b| {
        b.iter(|| FeedbackPattern::compute(black_box(&guess), black_box(&target)))
    });
}

fn bench_entropy(c: &mut Criterion) {
    let vocab = load_vocabulary().unwrap();
    let words = vocab.words();

    c.bench_function("entropy_opener_full_vocabulary", |b| {
        b.iter(|| entropy(black_box(&EmbeddedWordLists::OPENER), black_box(words)))
    });
}

fn bench_next_guess(c: &mut Criterion) {
    let vocab = load_vocabulary().unwrap();
    let selector = GuessSelector::new(&SolverConfig::default());

    let opener = EmbeddedWordLists::OPENER;
    let target = Word::parse("basis").unwrap();
    let mut state = ConstraintState::new();
    state
        .update(&opener, FeedbackPattern::compute(&opener, &target))
        .unwrap();
    let candidates = filter_candidates(&CandidateSet::full(&vocab), &state);

    c.bench_function("next_guess_after_opener", |b| {
        b.iter(|| selector.next_guess(black_box(&state), black_box(&candidates)))
    });
}

fn bench_derive_opener(c: &mut Criterion) {
    let vocab = load_vocabulary().unwrap();

    let mut group = c.benchmark_group("opener");
    group.sample_size(10);
    group.bench_function("derive_opener", |b| {
        b.iter(|| GuessSelector::derive_opener(black_box(&vocab)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_feedback,
    bench_entropy,
    bench_next_guess,
    bench_derive_opener
);
criterion_main!(benches);
