//! Benchmarks for query curation
//!
//! Run with: cargo bench --package pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::MovieDataset;
use pipeline::{curate, SearchQuery};

fn load_test_data() -> MovieDataset {
    MovieDataset::bundled().expect("Failed to load bundled dataset")
}

fn bench_genre_query(c: &mut Criterion) {
    let dataset = load_test_data();
    let query = SearchQuery::default().with_genre("action");

    c.bench_function("curate_genre", |b| {
        b.iter(|| {
            let outcome = curate(black_box(&dataset), black_box(&query));
            black_box(outcome)
        })
    });
}

fn bench_full_query(c: &mut Criterion) {
    let dataset = load_test_data();
    let query = SearchQuery::default()
        .with_genre("action")
        .with_country("united")
        .with_avg_vote("7");

    c.bench_function("curate_all_constraints", |b| {
        b.iter(|| {
            let outcome = curate(black_box(&dataset), black_box(&query));
            black_box(outcome)
        })
    });
}

criterion_group!(benches, bench_genre_query, bench_full_query);
criterion_main!(benches);
