// ============================================================
// Layer 5 — ML / Model Layer (linfa)
// ============================================================
// This layer contains ALL linfa specific code.
// No other layer calls into linfa directly, only this one
// (the data layer only builds the DatasetBase it consumes).
//
// What's in this layer:
//
//   model.rs      — DiagnosisModel, the fitted logistic
//                   regression behind the Classifier trait
//
//   trainer.rs    — fit() and accuracy()
//
//   inferencer.rs — binds a model to its recorded feature
//                   order and turns a form into a Diagnosis
//
// Reference: linfa documentation
//            Hosmer & Lemeshow, Applied Logistic Regression

/// Fitted logistic regression wrapper
pub mod model;

/// Fitting and scoring
pub mod trainer;

/// Feature-order aware inference
pub mod inferencer;
