// ============================================================
// Layer 3 — Feature Schema
// ============================================================
// The fixed table of the 32 clinical/demographic features the
// classifier consumes, each with its declared scalar kind.
//
// This one table is read by BOTH sides of the system:
//   - training:  to check the CSV carries exactly these columns
//   - serving:   to know how to coerce each submitted form value
//
// The ORDER of this table is only the order the form renders
// fields in. The order the classifier sees is the one recorded
// in the artifact at training time (the CSV column order).
//
// Reference: Rust Book §6 (Enums), §8 (Collections)

use std::collections::HashSet;
use std::fmt;

use anyhow::{bail, Result};

/// Declared scalar type of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    /// Whole numbers: codes, flags, ages, blood pressure
    Integer,
    /// Continuous measurements: BMI, cholesterol, scores
    Float,
}

impl FeatureKind {
    /// Coerce a raw string into the numeric value fed to the model.
    ///
    /// Surrounding whitespace is ignored. Integers must parse as `i64`;
    /// floats must parse as a finite `f64`. Returns None on failure.
    pub fn coerce(self, raw: &str) -> Option<f64> {
        let trimmed = raw.trim();
        match self {
            FeatureKind::Integer => trimmed.parse::<i64>().ok().map(|v| v as f64),
            FeatureKind::Float => trimmed.parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }

    /// HTML input `step` attribute for this kind
    pub fn input_step(self) -> &'static str {
        match self {
            FeatureKind::Integer => "1",
            FeatureKind::Float   => "any",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureKind::Integer => write!(f, "integer"),
            FeatureKind::Float   => write!(f, "float"),
        }
    }
}

/// One entry of the schema table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSpec {
    pub name: &'static str,
    pub kind: FeatureKind,
}

const fn int(name: &'static str) -> FeatureSpec {
    FeatureSpec { name, kind: FeatureKind::Integer }
}

const fn float(name: &'static str) -> FeatureSpec {
    FeatureSpec { name, kind: FeatureKind::Float }
}

/// Number of features the classifier is trained on
pub const FEATURE_COUNT: usize = 32;

/// Binary label column in the dataset
pub const LABEL_COLUMN: &str = "Diagnosis";

/// Columns present in the dataset that are never features.
/// The label is listed here too so it is dropped from the feature table.
pub const NON_FEATURE_COLUMNS: [&str; 3] = [LABEL_COLUMN, "PatientID", "DoctorInCharge"];

/// The canonical feature table.
pub static FEATURE_SCHEMA: [FeatureSpec; FEATURE_COUNT] = [
    int("Age"),
    int("Gender"),
    int("Ethnicity"),
    int("EducationLevel"),
    float("BMI"),
    int("Smoking"),
    float("AlcoholConsumption"),
    float("PhysicalActivity"),
    float("DietQuality"),
    float("SleepQuality"),
    int("FamilyHistoryAlzheimers"),
    int("CardiovascularDisease"),
    int("Diabetes"),
    int("Depression"),
    int("HeadInjury"),
    int("Hypertension"),
    int("SystolicBP"),
    int("DiastolicBP"),
    float("CholesterolTotal"),
    float("CholesterolLDL"),
    float("CholesterolHDL"),
    float("CholesterolTriglycerides"),
    float("MMSE"),
    float("FunctionalAssessment"),
    int("MemoryComplaints"),
    int("BehavioralProblems"),
    float("ADL"),
    int("Confusion"),
    int("Disorientation"),
    int("PersonalityChanges"),
    int("DifficultyCompletingTasks"),
    int("Forgetfulness"),
];

/// Look up a feature by exact (case-sensitive) name.
pub fn lookup(name: &str) -> Option<&'static FeatureSpec> {
    FEATURE_SCHEMA.iter().find(|spec| spec.name == name)
}

/// Resolve a recorded feature order against the schema.
///
/// The order must name every schema feature exactly once and nothing
/// else. Used when training picks its columns and again when the
/// server loads an artifact, so the two sides can never drift apart.
pub fn resolve_order(order: &[String]) -> Result<Vec<&'static FeatureSpec>> {
    let mut seen       = HashSet::new();
    let mut unknown    = Vec::new();
    let mut duplicates = Vec::new();
    let mut resolved   = Vec::with_capacity(order.len());

    for name in order {
        match lookup(name) {
            Some(spec) => {
                if !seen.insert(spec.name) {
                    duplicates.push(name.as_str());
                }
                resolved.push(spec);
            }
            None => unknown.push(name.as_str()),
        }
    }

    let missing: Vec<&str> = FEATURE_SCHEMA
        .iter()
        .map(|spec| spec.name)
        .filter(|name| !seen.contains(name))
        .collect();

    if !unknown.is_empty() || !missing.is_empty() || !duplicates.is_empty() {
        bail!(
            "feature columns do not match the schema (unknown: [{}], missing: [{}], duplicated: [{}])",
            unknown.join(", "),
            missing.join(", "),
            duplicates.join(", "),
        );
    }

    Ok(resolved)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn schema_order() -> Vec<String> {
        FEATURE_SCHEMA.iter().map(|s| s.name.to_string()).collect()
    }

    #[test]
    fn test_schema_names_are_unique() {
        let names: HashSet<_> = FEATURE_SCHEMA.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_non_feature_columns_not_in_schema() {
        for col in NON_FEATURE_COLUMNS {
            assert!(lookup(col).is_none(), "{col} must not be a feature");
        }
    }

    #[test]
    fn test_declared_kinds() {
        assert_eq!(lookup("BMI").unwrap().kind, FeatureKind::Float);
        assert_eq!(lookup("Age").unwrap().kind, FeatureKind::Integer);
        assert_eq!(lookup("ADL").unwrap().kind, FeatureKind::Float);
        assert!(lookup("bmi").is_none());
    }

    #[test]
    fn test_integer_coercion() {
        assert_eq!(FeatureKind::Integer.coerce(" 72 "), Some(72.0));
        assert_eq!(FeatureKind::Integer.coerce("-3"), Some(-3.0));
        // A decimal point is not an integer
        assert_eq!(FeatureKind::Integer.coerce("72.0"), None);
        assert_eq!(FeatureKind::Integer.coerce("abc"), None);
    }

    #[test]
    fn test_float_coercion() {
        assert_eq!(FeatureKind::Float.coerce("22.5"), Some(22.5));
        assert_eq!(FeatureKind::Float.coerce("7"), Some(7.0));
        assert_eq!(FeatureKind::Float.coerce("abc"), None);
        assert_eq!(FeatureKind::Float.coerce("NaN"), None);
        assert_eq!(FeatureKind::Float.coerce("inf"), None);
    }

    #[test]
    fn test_resolve_accepts_any_permutation() {
        let mut order = schema_order();
        order.reverse();
        let resolved = resolve_order(&order).unwrap();
        assert_eq!(resolved.len(), FEATURE_COUNT);
        assert_eq!(resolved[0].name, "Forgetfulness");
    }

    #[test]
    fn test_resolve_rejects_missing_and_unknown() {
        let mut order = schema_order();
        order.retain(|n| n != "MMSE");
        order.push("Shoesize".to_string());
        let err = resolve_order(&order).unwrap_err().to_string();
        assert!(err.contains("MMSE"));
        assert!(err.contains("Shoesize"));
    }

    #[test]
    fn test_resolve_rejects_duplicates() {
        let mut order = schema_order();
        order.push("Age".to_string());
        let err = resolve_order(&order).unwrap_err().to_string();
        assert!(err.contains("duplicated: [Age]"));
    }
}
