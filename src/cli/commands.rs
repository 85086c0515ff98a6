// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `train` and `serve`
// and all their configurable flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::train_use_case::TrainConfig;
use crate::web::ServeConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fit the logistic regression model on the patient CSV
    Train(TrainArgs),

    /// Serve the screening form using a trained model
    Serve(ServeArgs),
}

/// All arguments for the `train` command.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Labelled dataset: 32 feature columns, Diagnosis, PatientID, DoctorInCharge
    #[arg(long, default_value = "alzheimers_disease_data.csv")]
    pub data: String,

    /// Where to write the model artifact (parent dirs are created)
    #[arg(long, default_value = "models/model.json")]
    pub model_path: String,

    /// Share of each class held out for the test accuracy
    #[arg(long, default_value_t = 0.1)]
    pub test_fraction: f64,

    /// Seed for the stratified split; same seed → same partitions
    #[arg(long, default_value_t = 1)]
    pub seed: u64,

    /// Upper bound on optimiser iterations
    #[arg(long, default_value_t = 1000)]
    pub max_iterations: u64,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// The application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            data_path:      a.data,
            model_path:     a.model_path,
            test_fraction:  a.test_fraction,
            seed:           a.seed,
            max_iterations: a.max_iterations,
        }
    }
}

/// All arguments for the `serve` command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Model artifact written by `train`
    #[arg(long, default_value = "models/model.json")]
    pub model_path: String,

    /// Listen address
    #[arg(long, default_value = "0.0.0.0:5000")]
    pub bind: String,
}

impl From<ServeArgs> for ServeConfig {
    fn from(a: ServeArgs) -> Self {
        ServeConfig {
            model_path: a.model_path,
            bind:       a.bind,
        }
    }
}
