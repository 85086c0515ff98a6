// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (training or predicting).
//
// Rules for this layer:
//   - No ML math or linfa code here
//   - No HTML or HTTP here (that's Layer 1)
//   - No direct file access (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The offline training workflow
pub mod train_use_case;

// The per-request validation + inference workflow
pub mod predict_use_case;
