// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The seams between layers. The application layer talks to
// these traits; concrete implementations live in the data and
// ml layers, and tests can substitute their own.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::features::FeatureRow;

// ─── LabeledSource ────────────────────────────────────────────────────────────
/// Any component that can produce a labelled feature table.
///
/// Implementations:
///   - CsvLoader → reads the dataset CSV from disk
pub trait LabeledSource {
    type Table;

    /// Load the whole table. Fails if the source is unavailable
    /// or does not match the feature schema.
    fn load(&self) -> Result<Self::Table>;
}

// ─── Classifier ───────────────────────────────────────────────────────────────
/// Any fitted model that maps one typed feature row to a class label.
///
/// Implementations must be callable concurrently from many requests,
/// hence `&self` and the `Send + Sync` bound.
///
/// Implementations:
///   - DiagnosisModel → fitted logistic regression
pub trait Classifier: Send + Sync {
    /// Number of features the model was fitted on
    fn feature_count(&self) -> usize;

    /// Predict the raw class label for one row
    fn predict_label(&self, row: &FeatureRow) -> Result<usize>;
}
