// ============================================================
// Layer 3 — Diagnosis Domain Type
// ============================================================
// The two possible outcomes of a prediction and the fixed
// message shown to the user for each.

/// Label value the classifier uses for a positive diagnosis
pub const POSITIVE_LABEL: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnosis {
    Positive,
    Negative,
}

impl Diagnosis {
    pub const POSITIVE_MESSAGE: &'static str =
        "The model predicts that this patient HAS Alzheimer's disease.";
    pub const NEGATIVE_MESSAGE: &'static str =
        "The model predicts that this patient does NOT have Alzheimer's disease.";

    /// Interpret a raw classifier label.
    ///
    /// Only exactly 1 is positive; 0 and any other value read as negative.
    /// Labels outside {0, 1} are logged since they mean the model was
    /// fitted on something other than the binary Diagnosis column.
    pub fn from_label(label: usize) -> Self {
        match label {
            POSITIVE_LABEL => Diagnosis::Positive,
            0 => Diagnosis::Negative,
            other => {
                tracing::warn!("Classifier returned unexpected label {other}; reporting negative");
                Diagnosis::Negative
            }
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Diagnosis::Positive => Self::POSITIVE_MESSAGE,
            Diagnosis::Negative => Self::NEGATIVE_MESSAGE,
        }
    }
}
