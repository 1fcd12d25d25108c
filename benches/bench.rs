//! Micro-benchmarks for the analysis pipeline.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use relish::analysis::WordTokenizer;
use relish::frequency::frequency_after_merge;
use relish::schema::ReviewRecord;
use relish::similarity::{select_top_by_cosine_with, TfIdfBackend};
use relish::vocabulary::Vocabulary;

fn sample_records(n: usize) -> Vec<ReviewRecord> {
    let reviews = [
        "Great food and friendly service, will definitely come back",
        "Dirty tables and rude staff, the wait was far too long",
        "Clean and fast service right downtown, parking was easy",
        "The burger was bland and overcooked but the fries were fresh",
    ];

    (0..n)
        .map(|i| {
            ReviewRecord::new(
                format!("Restaurant {}", i % 25),
                reviews[i % reviews.len()],
            )
        })
        .collect()
}

fn bench_tokenizer(c: &mut Criterion) {
    let tokenizer = WordTokenizer::default();
    let text = "Great food and friendly service, we didn't wait long at all";

    c.bench_function("tokenize_review", |b| {
        b.iter(|| tokenizer.terms(black_box(text)))
    });
}

fn bench_frequency(c: &mut Criterion) {
    let records = sample_records(1000);
    let vocabulary = Vocabulary::default();

    c.bench_function("frequency_1000_reviews", |b| {
        b.iter(|| frequency_after_merge(black_box(&records), &vocabulary))
    });
}

fn bench_similarity(c: &mut Criterion) {
    let records = sample_records(1000);
    let vocabulary = Vocabulary::default();
    let backend = TfIdfBackend::new();

    c.bench_function("select_top_200_of_1000", |b| {
        b.iter(|| select_top_by_cosine_with(black_box(&records), &vocabulary, 200, &backend))
    });
}

criterion_group!(benches, bench_tokenizer, bench_frequency, bench_similarity);
criterion_main!(benches);
