// Shared fixtures for unit tests: a synthetic patient dataset whose
// diagnosis is driven by MMSE and FunctionalAssessment, so a linear
// model separates it easily.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::domain::schema::{FeatureKind, FeatureSpec, FEATURE_SCHEMA};

pub const DROPPED_AND_LABEL: [&str; 3] = ["PatientID", "Diagnosis", "DoctorInCharge"];

/// Raw cell text for one feature of one patient
pub fn feature_value(spec: &FeatureSpec, positive: bool, rng: &mut StdRng) -> String {
    match (spec.name, spec.kind) {
        ("MMSE", _) if positive => format!("{:.3}", rng.gen_range(2.0..14.0)),
        ("MMSE", _) => format!("{:.3}", rng.gen_range(16.0..30.0)),
        ("FunctionalAssessment", _) if positive => format!("{:.3}", rng.gen_range(0.0..4.0)),
        ("FunctionalAssessment", _) => format!("{:.3}", rng.gen_range(5.0..10.0)),
        (_, FeatureKind::Integer) => rng.gen_range(0..5).to_string(),
        (_, FeatureKind::Float) => format!("{:.3}", rng.gen_range(0.0..10.0)),
    }
}

/// A complete, valid form submission drawn from the same distribution
pub fn random_form(rng: &mut StdRng) -> HashMap<String, String> {
    let positive = rng.gen_bool(0.5);
    FEATURE_SCHEMA
        .iter()
        .map(|spec| (spec.name.to_string(), feature_value(spec, positive, rng)))
        .collect()
}

/// Write `n` synthetic patients to `<dir>/patients.csv`.
///
/// `header` sets the column order; by default it is PatientID, the
/// schema features, Diagnosis, DoctorInCharge. Every third patient
/// is positive.
pub fn write_dataset(dir: &Path, n: usize, header: Option<&[&str]>) -> PathBuf {
    let default_header: Vec<&str> = std::iter::once("PatientID")
        .chain(FEATURE_SCHEMA.iter().map(|s| s.name))
        .chain(["Diagnosis", "DoctorInCharge"])
        .collect();
    let header = header.unwrap_or(default_header.as_slice());

    let mut rng  = StdRng::seed_from_u64(42);
    let mut text = header.join(",");
    text.push('\n');

    for i in 0..n {
        let positive = i % 3 == 0;
        let cells: Vec<String> = header
            .iter()
            .map(|col| match *col {
                "PatientID" => (4751 + i).to_string(),
                "Diagnosis" => String::from(if positive { "1" } else { "0" }),
                "DoctorInCharge" => "XXXConfid".to_string(),
                name => {
                    let spec = FEATURE_SCHEMA.iter().find(|s| s.name == name).unwrap();
                    feature_value(spec, positive, &mut rng)
                }
            })
            .collect();
        text.push_str(&cells.join(","));
        text.push('\n');
    }

    let path = dir.join("patients.csv");
    fs::write(&path, text).unwrap();
    path
}

/// Every CSV body row as a header → cell map
pub fn read_rows(path: &Path) -> Vec<HashMap<String, String>> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader.deserialize().collect::<Result<_, _>>().unwrap()
}
