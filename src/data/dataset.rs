// ============================================================
// Layer 4 — Labelled Feature Table
// ============================================================
// The in-memory form of the training CSV after the non-feature
// columns are dropped: one row of f64 per patient, one 0/1 label
// per patient, and the column order the rows are laid out in.
//
// into_dataset() hands the table to linfa as a
// DatasetBase<Array2<f64>, Array1<usize>> (one target per row).

use anyhow::{ensure, Result};
use linfa::Dataset;
use ndarray::{Array1, Array2, Ix1};

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledTable {
    feature_order: Vec<String>,
    rows:          Vec<Vec<f64>>,
    labels:        Vec<usize>,
}

impl LabeledTable {
    pub fn new(feature_order: Vec<String>, rows: Vec<Vec<f64>>, labels: Vec<usize>) -> Result<Self> {
        ensure!(
            rows.len() == labels.len(),
            "{} rows but {} labels",
            rows.len(),
            labels.len()
        );
        let width = feature_order.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            anyhow::bail!("row {i} has {} values, expected {width}", row.len());
        }
        Ok(Self { feature_order, rows, labels })
    }

    pub fn feature_order(&self) -> &[String] {
        &self.feature_order
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Copy out the rows at `indices`, in that order
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            feature_order: self.feature_order.clone(),
            rows:          indices.iter().map(|&i| self.rows[i].clone()).collect(),
            labels:        indices.iter().map(|&i| self.labels[i]).collect(),
        }
    }

    /// Convert to a linfa dataset: records are n_rows × n_features
    pub fn into_dataset(self) -> Result<Dataset<f64, usize, Ix1>> {
        let n_rows     = self.rows.len();
        let n_features = self.feature_order.len();
        let flat: Vec<f64> = self.rows.into_iter().flatten().collect();

        let records = Array2::from_shape_vec((n_rows, n_features), flat)?;
        let targets = Array1::from(self.labels);

        Ok(Dataset::new(records, targets).with_feature_names(self.feature_order))
    }
}
