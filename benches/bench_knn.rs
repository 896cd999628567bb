use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use knnimpute::estimators::knn::KNearestNeighbor;
use knnimpute::helpers::test_helpers::{generate_random_data, generate_ratings};
use knnimpute::{collaborative_filtering, Aggregator, DistanceMeasure};

fn bench_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("predict");
    group.sample_size(10);

    for n_samples in [100, 1000] {
        for measure in [
            DistanceMeasure::Euclidean,
            DistanceMeasure::Manhattan,
            DistanceMeasure::Cosine,
        ] {
            let x = generate_random_data(n_samples, 20, 42);
            let y = generate_random_data(n_samples, 2, 43);
            let query = generate_random_data(50, 20, 44);

            let mut model = KNearestNeighbor::try_new(5, measure, Aggregator::Mean).unwrap();
            model.fit(x.view(), &y).unwrap();
            let config_string = format!("{}, {}", n_samples, measure);

            group.bench_with_input(
                BenchmarkId::new("knnimpute", config_string),
                &n_samples,
                |b, _| b.iter(|| model.predict(&query, false).unwrap()),
            );
        }
    }

    group.finish();
}

fn bench_collaborative_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("collaborative_filtering");
    group.sample_size(10);

    for n_users in [50, 200] {
        let ratings = generate_ratings(n_users, 30, 0.2, 42);

        group.bench_with_input(
            BenchmarkId::new("knnimpute", n_users),
            &n_users,
            |b, _| {
                b.iter(|| {
                    let mut x = ratings.clone();
                    collaborative_filtering(&mut x, 5, DistanceMeasure::Euclidean, Aggregator::Mode)
                        .unwrap();
                    x
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_predict, bench_collaborative_filtering);
criterion_main!(benches);
