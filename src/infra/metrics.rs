// ============================================================
// Layer 6 — Training Metrics Logger
// ============================================================
// Appends one row per training run to metrics.csv next to the
// model artifact.
//
// Why log runs to CSV?
//   - Shows at a glance whether a retrain changed anything
//   - Two runs with the same seed must produce the same row;
//     a difference means the dataset changed
//
// Example CSV output:
//   seed,train_rows,test_rows,train_accuracy,test_accuracy
//   1,1934,215,0.835057,0.827907
//
// Reference: csv crate documentation (serde support)

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One row of metrics for a single training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    pub seed:           u64,
    pub train_rows:     usize,
    pub test_rows:      usize,
    /// Fraction of training rows labelled correctly, in [0, 1]
    pub train_accuracy: f32,
    /// Fraction of held-out rows labelled correctly, in [0, 1]
    pub test_accuracy:  f32,
}

/// Appends RunMetrics rows to a CSV file.
pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Logger writing to `<dir>/metrics.csv`; creates `dir` if needed.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create directory '{}'", dir.display()))?;

        Ok(Self { csv_path: dir.join("metrics.csv") })
    }

    /// Append one run. The header is written only when the file is empty.
    pub fn log(&self, m: &RunMetrics) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open '{}'", self.csv_path.display()))?;
        let is_new = file.metadata()?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);
        writer.serialize(m)?;
        writer.flush()?;

        tracing::debug!(
            "Logged run metrics: train_acc={:.4}, test_acc={:.4}",
            m.train_accuracy,
            m.test_accuracy,
        );
        Ok(())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}
