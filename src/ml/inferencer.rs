// ============================================================
// Layer 5 — Inferencer
// ============================================================
// Binds a classifier to the feature order it was trained on.
//
// Built once at server startup from the loaded artifact:
//   1. resolve the recorded order against the schema table
//      (so every column has a declared kind)
//   2. check the model's weight count matches that order
//
// After that it is immutable and shared by every request.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{ensure, Context, Result};

use crate::domain::diagnosis::Diagnosis;
use crate::domain::features::{validate_form, FeatureRow, ValidationErrors};
use crate::domain::schema::{self, FeatureSpec};
use crate::domain::traits::Classifier;
use crate::infra::artifact::ModelArtifact;

pub struct Inferencer {
    classifier: Arc<dyn Classifier>,
    order:      Vec<&'static FeatureSpec>,
}

impl Inferencer {
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        Self::new(Arc::new(artifact.model), &artifact.feature_order)
    }

    pub fn new(classifier: Arc<dyn Classifier>, feature_order: &[String]) -> Result<Self> {
        let order = schema::resolve_order(feature_order)
            .context("Artifact feature order does not match the feature schema")?;

        ensure!(
            classifier.feature_count() == order.len(),
            "Model was fitted on {} features but the artifact lists {}",
            classifier.feature_count(),
            order.len()
        );

        tracing::info!("Inferencer ready with {} features", order.len());
        Ok(Self { classifier, order })
    }

    /// Features in the order the classifier consumes them
    pub fn feature_order(&self) -> &[&'static FeatureSpec] {
        &self.order
    }

    /// Coerce a submitted form into a row in training order
    pub fn validate(&self, form: &HashMap<String, String>) -> Result<FeatureRow, ValidationErrors> {
        validate_form(&self.order, form)
    }

    pub fn predict(&self, row: &FeatureRow) -> Result<Diagnosis> {
        let label = self.classifier.predict_label(row)?;
        Ok(Diagnosis::from_label(label))
    }
}
