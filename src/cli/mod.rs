// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and delegates to Layer 2 (train) or the web server.
//
// Two commands are supported:
//   1. `train` — fits the model and writes the artifact
//   2. `serve` — loads the artifact and serves the web form
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ServeArgs, TrainArgs};

/// The main CLI struct
#[derive(Parser, Debug)]
#[command(
    name = "alz-screen",
    version,
    about = "Train a logistic regression Alzheimer's screening model, then serve it over a web form."
)]
pub struct Cli {
    /// The subcommand to run (train or serve)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch.
    /// The CLI layer only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args) => run_train(args),
            Commands::Serve(args) => run_serve(args),
        }
    }
}

fn run_train(args: TrainArgs) -> Result<()> {
    use crate::application::train_use_case::TrainUseCase;

    tracing::info!("Starting training on '{}'", args.data);

    let report = TrainUseCase::new(args.into()).execute()?;

    println!("Features ({}): {}", report.feature_order.len(), report.feature_order.join(", "));
    println!("Train accuracy: {:.4}", report.metrics.train_accuracy);
    println!("Test accuracy:  {:.4}", report.metrics.test_accuracy);
    println!("Training complete. Model artifact saved.");
    Ok(())
}

/// Only `serve` needs an async runtime.
fn run_serve(args: ServeArgs) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(crate::web::serve(args.into()))
}
