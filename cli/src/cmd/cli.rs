use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::cmd::config::{Action, Config, Evaluate, Predict, Train};

fn parse_ratio(s: &str) -> Result<f64, String> {
    let ratio: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("{ratio} is not in [0, 1)"))
    }
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "\\t" | "tab" => Ok(b'\t'),
        _ => match s.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(format!("'{s}' is not a single ASCII character")),
        },
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "linfit",
    about = "Estimate a car's price from its mileage with a linear model",
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Path to the JSON parameter record
    #[arg(
        long = "params",
        value_name = "PATH",
        default_value = "thetas.json",
        global = true,
        value_hint = ValueHint::FilePath
    )]
    pub params_path: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fit theta0/theta1 on a km,price dataset and save them
    Train(TrainArgs),

    /// Estimate the price for a mileage
    Predict(PredictArgs),

    /// Score the saved parameters against a dataset
    Evaluate(EvaluateArgs),
}

#[derive(Debug, Args)]
pub struct DataArgs {
    /// CSV file with a header row, mileage in column 0 and price in column 1
    #[arg(long = "data", value_name = "PATH", default_value = "data.csv", value_hint = ValueHint::FilePath)]
    pub data_path: PathBuf,

    /// Abort on the first malformed row instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Field delimiter: one ASCII character, or `tab`
    #[arg(long, short = 'd', default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

#[derive(Debug, Args)]
pub struct TrainArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Gradient descent step size
    #[arg(long = "learning-rate", short = 'l', default_value_t = 0.1)]
    pub learning_rate: f64,

    /// Number of full-batch gradient steps
    #[arg(long, short = 'n', default_value_t = 10_000)]
    pub iterations: usize,

    /// Min-max scale the price as well as the mileage during training
    #[arg(long = "normalize-target")]
    pub normalize_target: bool,

    /// Fraction of rows held out for testing (0 trains on everything)
    #[arg(long = "test-ratio", default_value_t = 0.0, value_parser = parse_ratio)]
    pub test_ratio: f64,

    /// Seed for the train/test shuffle; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the per-iteration loss as CSV (iteration,mse)
    #[arg(long = "history", value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub history_path: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    /// Mileage to estimate; prompts on stdin when omitted
    #[arg(long, allow_negative_numbers = true)]
    pub km: Option<f64>,
}

#[derive(Debug, Args)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub data: DataArgs,
}

impl Cli {
    pub fn into_config(self) -> Config {
        let params_path = self.params_path;

        let action = match self.command {
            Commands::Train(args) => Action::Train(Train {
                data_path: args.data.data_path,
                strict: args.data.strict,
                delimiter: args.data.delimiter,
                learning_rate: args.learning_rate,
                iterations: args.iterations,
                normalize_target: args.normalize_target,
                test_ratio: args.test_ratio,
                seed: args.seed,
                history_path: args.history_path,
            }),
            Commands::Predict(args) => Action::Predict(Predict { km: args.km }),
            Commands::Evaluate(args) => Action::Evaluate(Evaluate {
                data_path: args.data.data_path,
                strict: args.data.strict,
                delimiter: args.data.delimiter,
            }),
        };

        Config { params_path, action }
    }
}
