// ============================================================
// Layer 5 — Diagnosis Model
// ============================================================
// Thin wrapper around a fitted linfa logistic regression.
//
// The wrapper exists so that:
//   - no other layer names linfa types directly
//   - the model can implement the domain Classifier trait
//   - serde sees one transparent value inside the artifact
//
// Inference only reads the fitted weights and intercept, so a
// single DiagnosisModel behind an Arc serves any number of
// concurrent requests without a lock.
//
// Reference: linfa-logistic documentation

use anyhow::{anyhow, ensure, Result};
use linfa::traits::Predict;
use linfa_logistic::FittedLogisticRegression;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::domain::features::FeatureRow;
use crate::domain::traits::Classifier;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagnosisModel {
    inner: FittedLogisticRegression<f64, usize>,
}

impl DiagnosisModel {
    pub fn new(inner: FittedLogisticRegression<f64, usize>) -> Self {
        Self { inner }
    }

    /// Predict one label per row of `records` (n_rows × n_features)
    pub fn predict_batch(&self, records: &Array2<f64>) -> Array1<usize> {
        self.inner.predict(records)
    }

    pub fn intercept(&self) -> f64 {
        self.inner.intercept()
    }

    pub fn weights(&self) -> &Array1<f64> {
        self.inner.params()
    }
}

impl Classifier for DiagnosisModel {
    fn feature_count(&self) -> usize {
        self.inner.params().len()
    }

    fn predict_label(&self, row: &FeatureRow) -> Result<usize> {
        ensure!(
            row.len() == self.feature_count(),
            "row has {} features, model expects {}",
            row.len(),
            self.feature_count()
        );

        // Single-row matrix: shape (1, n_features)
        let x = Array2::from_shape_vec((1, row.len()), row.values().to_vec())?;

        self.predict_batch(&x)
            .first()
            .copied()
            .ok_or_else(|| anyhow!("classifier returned no prediction"))
    }
}
