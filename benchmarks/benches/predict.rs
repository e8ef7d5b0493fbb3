use benchmarks::{sequence, synthetic_cars};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linfit::model::InferenceModel;
use linfit::{predict, Fitted, LinearModel, Trainer};

/// Train a model once for prediction benchmarks
fn train_model_for_prediction() -> LinearModel<Fitted> {
    let samples = synthetic_cars(1_000, 7).expect("Failed to build dataset");
    Trainer::builder()
        .iterations(5_000)
        .record_history(false)
        .build()
        .expect("Failed to build trainer")
        .fit(&samples)
        .expect("Failed to fit model")
        .model
}

fn bench_predict_single(c: &mut Criterion) {
    let model = train_model_for_prediction();

    c.bench_function("predict_single", |b| {
        b.iter(|| black_box(model.predict(black_box(&100_000.0))));
    });
}

fn bench_predict_batch(c: &mut Criterion) {
    let model = train_model_for_prediction();

    // Test different batch sizes
    for batch_size in [10, 100, 1_000, 10_000].iter() {
        let km = sequence(*batch_size, 25.0);
        c.bench_with_input(
            BenchmarkId::new("predict_batch", batch_size),
            batch_size,
            |b, _| {
                b.iter(|| black_box(model.predict_batch(black_box(&km))));
            },
        );
    }
}

fn bench_predict_free_fn(c: &mut Criterion) {
    let model = train_model_for_prediction();
    let (theta0, theta1) = (model.theta0(), model.theta1());
    let km = sequence(10_000, 25.0);

    c.bench_function("predict_fn_10k", |b| {
        b.iter(|| black_box(predict(theta0, theta1, black_box(&km))));
    });
}

criterion_group!(
    benches,
    bench_predict_single,
    bench_predict_batch,
    bench_predict_free_fn
);
criterion_main!(benches);
