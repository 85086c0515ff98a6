// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the dataset CSV on disk and the linfa
// dataset the trainer fits on.
//
// The pipeline flows in this order:
//
//   alzheimers_disease_data.csv
//       │
//       ▼
//   CsvLoader          → drops non-feature columns, records order
//       │
//       ▼
//   LabeledTable       → rows of f64 + 0/1 labels
//       │
//       ▼
//   stratified_split   → 90% train / 10% held out, per class
//       │
//       ▼
//   linfa Dataset      → handed to the trainer
//
// Reference: csv crate documentation
//            linfa documentation (DatasetBase)

/// Reads the labelled CSV into a LabeledTable
pub mod loader;

/// The labelled feature table and its linfa conversion
pub mod dataset;

/// Seeded, class-preserving train/test split
pub mod splitter;
