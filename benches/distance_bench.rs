use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fornax::distance::{DistanceMetric, StringDistance};

fn generate_test_words(count: usize) -> Vec<String> {
    let stems = ["sift", "shift", "retriev", "index", "classif", "correct"];
    let suffixes = ["", "s", "ed", "ing", "ings", "er", "ion"];

    (0..count)
        .map(|i| {
            let stem = stems[i % stems.len()];
            let suffix = suffixes[(i / stems.len()) % suffixes.len()];
            format!("{stem}{suffix}")
        })
        .collect()
}

fn bench_distances(c: &mut Criterion) {
    let targets = generate_test_words(100);
    let query = "siftingg";

    let mut group = c.benchmark_group("distance_metrics");

    for metric in [
        DistanceMetric::Levenshtein,
        DistanceMetric::NGram { n: 2 },
        DistanceMetric::NGram { n: 3 },
        DistanceMetric::jaro_winkler(0.7),
    ] {
        group.bench_function(metric.to_string(), |b| {
            b.iter(|| {
                for target in &targets {
                    black_box(metric.distance(black_box(query), black_box(target)));
                }
            })
        });
    }

    group.finish();
}

fn bench_batch_distance(c: &mut Criterion) {
    let targets = generate_test_words(1000);
    let metric = DistanceMetric::Levenshtein;

    c.bench_function("batch_distance_1000", |b| {
        b.iter(|| black_box(metric.batch_distance(black_box("siftingg"), &targets)))
    });
}

criterion_group!(benches, bench_distances, bench_batch_distance);
criterion_main!(benches);
