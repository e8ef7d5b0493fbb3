use linfit::{Result, Samples};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Noisy mileage/price pairs shaped like the used-car dataset:
/// `price ≈ 8500 - 0.02 * km ± 500`, with `km` in `[10 000, 250 000)`.
///
/// The same `seed` always yields the same samples.
pub fn synthetic_cars(n: usize, seed: u64) -> Result<Samples> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut km = Vec::with_capacity(n);
    let mut price = Vec::with_capacity(n);
    for _ in 0..n {
        let x: f64 = rng.random_range(10_000.0..250_000.0);
        let noise: f64 = rng.random_range(-500.0..500.0);
        km.push(x);
        price.push(8500.0 - 0.02 * x + noise);
    }
    Samples::new(km, price)
}

/// `0.0, step, 2 * step, ...` with `n` values.
pub fn sequence(n: usize, step: f64) -> Vec<f64> {
    (0..n).map(|i| i as f64 * step).collect()
}
