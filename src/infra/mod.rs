// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting persistence concerns that don't belong in any
// specific business layer:
//
//   artifact.rs — Saving and loading the model artifact
//                 (fitted classifier + feature order) as
//                 JSON. The one file shared between the
//                 training job and the server.
//
//   metrics.rs  — Training run logging
//                 Appends seed, partition sizes, and
//                 accuracies to a CSV file for comparing
//                 runs.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Model artifact saving and loading
pub mod artifact;

/// Training run CSV logger
pub mod metrics;
