use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spellfix::{Corrector, FrequencyModel};
use std::collections::BTreeMap;

fn build_model() -> FrequencyModel {
    let words = [
        "the", "of", "and", "a", "to", "in", "is", "was", "he", "for", "it", "with", "as", "his",
        "on", "be", "at", "by", "had", "not", "are", "but", "from", "or", "have", "an", "they",
        "which", "one", "you",
    ];
    let counts: BTreeMap<String, u64> = words
        .iter()
        .enumerate()
        .map(|(rank, word)| (word.to_string(), 10_000 - rank as u64))
        .collect();
    FrequencyModel::from_counts(counts).unwrap()
}

// Per-call cost is dominated by the distance-2 expansion: ~54n distance-1
// seeds, each re-expanded into ~54n strings. Quadratic in word length,
// independent of model size.
fn bench_correct(c: &mut Criterion) {
    let model = build_model();
    let corrector = Corrector::new(&model);

    let mut group = c.benchmark_group("correct");
    for len in [4usize, 8, 16, 32] {
        // unknown input with no known neighbors forces the full expansion
        let word = "zq".repeat(len / 2);
        group.bench_with_input(BenchmarkId::from_parameter(len), &word, |b, word| {
            b.iter(|| corrector.correct(black_box(word)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_correct);
criterion_main!(benches);
