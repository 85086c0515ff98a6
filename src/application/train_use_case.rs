// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the full training pipeline in order:
//
//   Step 1: Load the dataset CSV        (Layer 4 - data)
//   Step 2: Stratified train/test split (Layer 4 - data)
//   Step 3: Build linfa datasets        (Layer 4 - data)
//   Step 4: Fit logistic regression     (Layer 5 - ml)
//   Step 5: Score both partitions       (Layer 5 - ml)
//   Step 6: Save the artifact           (Layer 6 - infra)
//   Step 7: Append run metrics          (Layer 6 - infra)
//
// The artifact is written only after fitting succeeds, so a
// failed run leaves any previous artifact untouched.
//
// Reference: Rust Book §13 (Iterators and Closures)
//            linfa documentation

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::data::{loader::CsvLoader, splitter::stratified_split};
use crate::domain::traits::LabeledSource;
use crate::infra::{
    artifact::{ArtifactStore, ModelArtifact},
    metrics::{MetricsLogger, RunMetrics},
};
use crate::ml::trainer::{accuracy, fit};

// ─── Training Configuration ──────────────────────────────────────────────────
// Everything a training run depends on. Same config + same CSV
// gives the same partitions, the same model, the same metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub data_path:      String,
    pub model_path:     String,
    pub test_fraction:  f64,
    pub seed:           u64,
    pub max_iterations: u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            data_path:      "alzheimers_disease_data.csv".to_string(),
            model_path:     "models/model.json".to_string(),
            test_fraction:  0.1,
            seed:           1,
            max_iterations: 1000,
        }
    }
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    pub feature_order: Vec<String>,
    pub metrics:       RunMetrics,
    /// Row indices (into the CSV body) that were held out
    pub test_rows:     Vec<usize>,
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the full training pipeline end to end
    pub fn execute(&self) -> Result<TrainReport> {
        let cfg = &self.config;

        // ── Step 1: Load the labelled table ──────────────────────────────────
        // Fails before anything is written if the CSV is missing or
        // its columns don't match the schema.
        let table         = CsvLoader::new(&cfg.data_path).load()?;
        let feature_order = table.feature_order().to_vec();

        // ── Step 2: Stratified split ─────────────────────────────────────────
        let split = stratified_split(table.labels(), cfg.test_fraction, cfg.seed);
        ensure!(
            !split.train.is_empty() && !split.test.is_empty(),
            "Dataset of {} rows is too small to hold out {:.0}% for testing",
            table.len(),
            cfg.test_fraction * 100.0
        );
        tracing::info!(
            "Split: {} train, {} test (seed {})",
            split.train.len(),
            split.test.len(),
            cfg.seed
        );

        // ── Step 3: linfa datasets ───────────────────────────────────────────
        let train_ds = table.select(&split.train).into_dataset()?;
        let test_ds  = table.select(&split.test).into_dataset()?;

        // ── Step 4: Fit ──────────────────────────────────────────────────────
        let model = fit(&train_ds, cfg.max_iterations)?;
        tracing::debug!(
            "Fitted {} weights, intercept {:.4}",
            model.weights().len(),
            model.intercept()
        );

        // ── Step 5: Sanity-check accuracy ────────────────────────────────────
        let train_accuracy = accuracy(&model, &train_ds)?;
        let test_accuracy  = accuracy(&model, &test_ds)?;
        tracing::info!("Train accuracy: {:.4}", train_accuracy);
        tracing::info!("Test accuracy:  {:.4}", test_accuracy);

        // ── Step 6: Save artifact ────────────────────────────────────────────
        let store = ArtifactStore::new(&cfg.model_path);
        store.save(&ModelArtifact {
            feature_order: feature_order.clone(),
            model,
        })?;
        tracing::info!("Saved model to '{}'", store.path().display());

        // ── Step 7: Record the run ───────────────────────────────────────────
        let metrics = RunMetrics {
            seed:           cfg.seed,
            train_rows:     split.train.len(),
            test_rows:      split.test.len(),
            train_accuracy,
            test_accuracy,
        };
        let logger = MetricsLogger::new(store.dir())?;
        logger.log(&metrics)?;
        tracing::info!("Appended run metrics to '{}'", logger.csv_path().display());

        Ok(TrainReport {
            feature_order,
            metrics,
            test_rows: split.test,
        })
    }
}
