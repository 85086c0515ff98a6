// ============================================================
// Layer 4 — Dataset CSV Loader
// ============================================================
// Loads the labelled patient dataset using the csv crate.
//
// Expected columns (any order):
//   - the 32 schema features     → become the feature table
//   - Diagnosis (0/1)            → becomes the label vector
//   - PatientID, DoctorInCharge  → dropped
//
// The header order of the file, minus the dropped columns, IS
// the feature order recorded in the artifact. Nothing here
// reorders columns to match the schema table.
//
// Every problem is fatal: a missing file, a column set that does
// not match the schema, or a cell that is not a number.
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};

use crate::data::dataset::LabeledTable;
use crate::domain::schema::{self, LABEL_COLUMN, NON_FEATURE_COLUMNS};
use crate::domain::traits::LabeledSource;

/// Loads the training table from a CSV file.
/// Implements the LabeledSource trait from Layer 3.
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LabeledSource for CsvLoader {
    type Table = LabeledTable;

    fn load(&self) -> Result<LabeledTable> {
        if !self.path.exists() {
            bail!(
                "Dataset '{}' not found. Place the CSV there or pass --data.",
                self.path.display()
            );
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .with_context(|| format!("Cannot open dataset '{}'", self.path.display()))?;

        let headers = reader
            .headers()
            .with_context(|| format!("Cannot read header row of '{}'", self.path.display()))?
            .clone();

        // ── Split header into label / dropped / feature columns ──────────────
        let mut label_idx    = None;
        let mut feature_cols: Vec<(usize, String)> = Vec::new();

        for (idx, name) in headers.iter().enumerate() {
            if name == LABEL_COLUMN {
                label_idx = Some(idx);
            } else if !NON_FEATURE_COLUMNS.iter().any(|c| *c == name) {
                feature_cols.push((idx, name.to_string()));
            }
        }

        let label_idx = label_idx.ok_or_else(|| {
            anyhow!("Dataset '{}' has no '{}' column", self.path.display(), LABEL_COLUMN)
        })?;

        let feature_order: Vec<String> = feature_cols.iter().map(|(_, n)| n.clone()).collect();
        schema::resolve_order(&feature_order)
            .with_context(|| format!("Dataset '{}'", self.path.display()))?;

        // ── Parse every record ───────────────────────────────────────────────
        let mut rows   = Vec::new();
        let mut labels = Vec::new();

        for (i, record) in reader.records().enumerate() {
            // +2: one for the header row, one because humans count from 1
            let line   = i + 2;
            let record = record.with_context(|| format!("Malformed CSV at line {line}"))?;

            let mut row = Vec::with_capacity(feature_cols.len());
            for (idx, name) in &feature_cols {
                let cell = record.get(*idx).unwrap_or("");
                let value: f64 = cell.parse().map_err(|_| {
                    anyhow!("Line {line}, column '{name}': '{cell}' is not a number")
                })?;
                row.push(value);
            }

            let cell = record.get(label_idx).unwrap_or("");
            labels.push(parse_label(cell).with_context(|| format!("Line {line}"))?);
            rows.push(row);
        }

        if rows.is_empty() {
            bail!("Dataset '{}' has a header but no rows", self.path.display());
        }

        tracing::info!(
            "Loaded {} rows × {} features from '{}'",
            rows.len(),
            feature_order.len(),
            self.path.display()
        );

        LabeledTable::new(feature_order, rows, labels)
    }
}

/// Diagnosis cells must be 0 or 1 (pandas may have written "1.0")
fn parse_label(cell: &str) -> Result<usize> {
    match cell.parse::<f64>() {
        Ok(v) if v == 0.0 => Ok(0),
        Ok(v) if v == 1.0 => Ok(1),
        _ => bail!("'{LABEL_COLUMN}' must be 0 or 1, found '{cell}'"),
    }
}
