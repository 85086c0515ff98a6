// ============================================================
// Layer 3 — Typed Feature Row and Form Validation
// ============================================================
// Turns a submitted form (feature name → raw string) into a
// row of numbers in the exact order the classifier was trained
// on.
//
// Validation is CUMULATIVE: every feature is checked and every
// problem is recorded before deciding success or failure, so the
// user sees all mistakes at once instead of fixing them one by one.
//
// Reference: Rust Book §9 (Recoverable Errors with Result)
//            Rust Book §13 (Iterators)

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::domain::schema::FeatureSpec;

/// A single problem with one submitted field.
/// The Display strings are what the end user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("missing value for {feature}")]
    Missing { feature: String },

    #[error("invalid value for {feature}: {raw}")]
    Invalid { feature: String, raw: String },
}

impl FieldError {
    /// Name of the feature this error is about
    pub fn feature(&self) -> &str {
        match self {
            FieldError::Missing { feature } | FieldError::Invalid { feature, .. } => feature.as_str(),
        }
    }
}

/// Every field error collected for one submission, in feature order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Separator used when the errors are shown as one line
    pub const DELIMITER: &'static str = "; ";

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The user-facing messages, one per error
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(Self::DELIMITER))
    }
}

impl std::error::Error for ValidationErrors {}

/// One fully typed observation, ordered like the training columns.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    values: Vec<f64>,
}

impl FeatureRow {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// Validate a submitted form against the recorded feature order.
///
/// # Arguments
/// * `order` - Features in the order the classifier expects them
/// * `form`  - Raw submitted values; extra keys are ignored
///
/// # Returns
/// The typed row, or every field error found.
pub fn validate_form(
    order: &[&FeatureSpec],
    form:  &HashMap<String, String>,
) -> Result<FeatureRow, ValidationErrors> {
    let mut values = Vec::with_capacity(order.len());
    let mut errors = Vec::new();

    for spec in order {
        // Absent and blank are the same thing to the user
        let raw = match form.get(spec.name) {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                errors.push(FieldError::Missing { feature: spec.name.to_string() });
                continue;
            }
        };

        match spec.kind.coerce(raw) {
            Some(value) => values.push(value),
            None => errors.push(FieldError::Invalid {
                feature: spec.name.to_string(),
                raw:     raw.clone(),
            }),
        }
    }

    if errors.is_empty() {
        Ok(FeatureRow::new(values))
    } else {
        Err(ValidationErrors(errors))
    }
}
