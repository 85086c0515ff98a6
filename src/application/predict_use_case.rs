// ============================================================
// Layer 2 — Predict Use Case
// ============================================================
// One form submission in, one outcome out:
//
//   1. Pull the pass-through contact fields (name, email)
//   2. Validate ALL feature fields against the recorded order
//   3. Any error → outcome with every message, no inference
//   4. Otherwise → classify the row, map label → Diagnosis
//
// Built once at startup and shared read-only by every request.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;

use crate::domain::contact::ContactInfo;
use crate::domain::diagnosis::Diagnosis;
use crate::domain::features::{FieldError, ValidationErrors};
use crate::domain::schema::FeatureSpec;
use crate::infra::artifact::ArtifactStore;
use crate::ml::inferencer::Inferencer;

/// What the result page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    pub contact:   ContactInfo,
    /// Diagnosis message, or every validation error joined by "; "
    pub message:   String,
    pub error:     bool,
    /// Individual validation messages (empty on success)
    pub errors:    Vec<String>,
    pub diagnosis: Option<Diagnosis>,
}

impl PredictionOutcome {
    fn invalid(contact: ContactInfo, errors: ValidationErrors) -> Self {
        Self {
            contact,
            message:   errors.to_string(),
            error:     true,
            errors:    errors.messages(),
            diagnosis: None,
        }
    }

    fn diagnosed(contact: ContactInfo, diagnosis: Diagnosis) -> Self {
        Self {
            contact,
            message:   diagnosis.message().to_string(),
            error:     false,
            errors:    Vec::new(),
            diagnosis: Some(diagnosis),
        }
    }
}

pub struct PredictUseCase {
    inferencer: Inferencer,
}

impl PredictUseCase {
    pub fn new(inferencer: Inferencer) -> Self {
        Self { inferencer }
    }

    /// Load the artifact at `model_path`; fails if it is absent or invalid.
    pub fn from_model_path(model_path: impl AsRef<Path>) -> Result<Self> {
        let store    = ArtifactStore::new(model_path.as_ref());
        let artifact = store.load()?;
        tracing::info!(
            "Loaded model artifact '{}' ({} features)",
            store.path().display(),
            artifact.feature_order.len()
        );
        Ok(Self::new(Inferencer::from_artifact(artifact)?))
    }

    pub fn feature_order(&self) -> &[&'static FeatureSpec] {
        self.inferencer.feature_order()
    }

    /// Validate and classify one submission.
    ///
    /// Validation failures are an `Ok` outcome with `error = true`;
    /// only a failure inside the classifier is an `Err`.
    pub fn execute(&self, form: &HashMap<String, String>) -> Result<PredictionOutcome> {
        let contact = ContactInfo::from_form(form);

        let row = match self.inferencer.validate(form) {
            Ok(row) => row,
            Err(errors) => {
                let fields: Vec<&str> = errors.errors().iter().map(FieldError::feature).collect();
                tracing::debug!(
                    "Rejected submission with {} field errors ({})",
                    errors.len(),
                    fields.join(", ")
                );
                return Ok(PredictionOutcome::invalid(contact, errors));
            }
        };

        let diagnosis = self.inferencer.predict(&row)?;
        tracing::debug!("Prediction: {:?}", diagnosis);
        Ok(PredictionOutcome::diagnosed(contact, diagnosis))
    }
}
