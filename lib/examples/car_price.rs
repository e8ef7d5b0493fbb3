//! End-to-end example: used-car price from mileage.
//!
//! - load a `km,price` CSV (embedded here)
//! - hold out 20% of the rows with a seeded shuffle
//! - train with both normalization conventions and compare
//! - save the parameter record, load it back and predict
//!
//! Run with: cargo run --example car_price

use linfit::model::InferenceModel;
use linfit::{CsvLoader, Metrics, ParameterRecord, Trainer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;

const DATA: &str = "km,price
240000,3650
139800,3800
150500,4400
185530,4450
176000,5250
114800,5350
166800,5800
89000,5990
144500,5999
84000,6200
82029,6390
63060,6390
74000,6600
97500,6800
67000,6800
76025,6900
48235,6900
93000,6990
60949,7490
65674,7555
54000,7990
68500,7990
22899,7990
61789,8290
";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Car Price Regression ===\n");

    // 1. Load
    let samples = CsvLoader::new().load_from_reader(DATA.as_bytes())?.samples;
    println!("Loaded {} samples", samples.len());

    // 2. Split
    let mut rng = StdRng::seed_from_u64(42);
    let (train, test) = samples.split(0.8, &mut rng)?;
    println!("Train: {} / Test: {}\n", train.len(), test.len());

    // 3. Train with both conventions
    for normalize_target in [false, true] {
        let report = Trainer::builder()
            .learning_rate(0.1)
            .iterations(10_000)
            .normalize_target(normalize_target)
            .build()?
            .fit(&train)?;

        let preds = report.model.predict_batch(test.x());
        let metrics = Metrics::calculate_all(test.y(), &preds)?;

        println!(
            "normalize_target = {normalize_target}: theta0 = {:.4}, theta1 = {:.6}",
            report.model.theta0(),
            report.model.theta1()
        );
        println!(
            "  loss {:.4} -> {:.4}",
            report.history.first().unwrap_or(f64::NAN),
            report.history.last().unwrap_or(f64::NAN)
        );
        println!("{metrics}\n");
    }

    // 4. Persist and reload
    let report = Trainer::builder().build()?.fit(&train)?;
    let path = std::env::temp_dir().join("linfit_car_price.json");
    ParameterRecord::from_report(&report).save_to_file(&path)?;

    let model = ParameterRecord::load_from_file(&path)?.to_model()?;
    for km in [20_000.0, 100_000.0, 200_000.0] {
        println!("Estimated price for {km} km: {:.2}", model.predict(&km));
    }

    std::fs::remove_file(&path)?;
    Ok(())
}
