// ============================================================
// Layer 5 — Logistic Regression Trainer
// ============================================================
// Fits the classifier and scores it.
//
//   fit()      — L2-regularised logistic regression, optimised
//                with L-BFGS for at most `max_iterations` steps
//   accuracy() — share of rows whose predicted label matches
//
// Accuracy is a sanity signal for the operator only; nothing
// downstream branches on it.
//
// Reference: linfa-logistic documentation (winequality example)

use std::collections::BTreeSet;

use anyhow::{anyhow, ensure, Result};
use linfa::prelude::*;
use linfa::Dataset;
use linfa_logistic::LogisticRegression;
use ndarray::Ix1;

use crate::ml::model::DiagnosisModel;

/// Fit a binary logistic regression on `train`.
pub fn fit(train: &Dataset<f64, usize, Ix1>, max_iterations: u64) -> Result<DiagnosisModel> {
    tracing::debug!(
        "Fitting logistic regression on {} rows × {} features (max {} iterations)",
        train.nsamples(),
        train.nfeatures(),
        max_iterations,
    );

    let classes: BTreeSet<usize> = train.targets.iter().copied().collect();
    ensure!(
        classes.len() == 2,
        "training partition must contain exactly two classes, found {:?}",
        classes
    );

    let fitted = LogisticRegression::<f64>::default()
        .max_iterations(max_iterations)
        .fit(train)
        .map_err(|e| anyhow!("Logistic regression failed to fit: {e}"))?;

    Ok(DiagnosisModel::new(fitted))
}

/// Fraction of rows in `data` the model labels correctly, in [0, 1].
pub fn accuracy(model: &DiagnosisModel, data: &Dataset<f64, usize, Ix1>) -> Result<f32> {
    let predicted = model.predict_batch(&data.records);
    let cm = predicted
        .confusion_matrix(data)
        .map_err(|e| anyhow!("Cannot score predictions: {e}"))?;
    Ok(cm.accuracy())
}
