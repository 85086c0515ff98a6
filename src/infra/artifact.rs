// ============================================================
// Layer 6 — Model Artifact Store
// ============================================================
// Saves and restores the trained model together with the exact
// feature order it was fitted on.
//
// What gets saved (one JSON file, default models/model.json):
//   {
//     "feature_order": ["Age", "Gender", ...],   ← CSV column order
//     "model": { ...fitted logistic regression... }
//   }
//
// Why keep the order next to the weights?
//   Logistic regression is positional: weight i multiplies
//   column i. Serving a row in any other order silently
//   produces wrong predictions, so the order travels with the
//   weights and is never reconstructed from elsewhere.
//
// Writes go to a temporary sibling file first and are renamed
// into place, so a failed run never leaves a half-written
// artifact for the server to pick up.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json documentation

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::ml::model::DiagnosisModel;

/// The persisted bundle: fitted classifier + feature order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub feature_order: Vec<String>,
    pub model:         DiagnosisModel,
}

/// Reads and writes a ModelArtifact at a fixed path.
pub struct ArtifactStore {
    path: PathBuf,
}

impl ArtifactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory the artifact lives in ("." for a bare file name)
    pub fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Serialise `artifact`, creating parent directories as needed.
    pub fn save(&self, artifact: &ModelArtifact) -> Result<()> {
        let dir = self.dir();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create directory '{}'", dir.display()))?;

        let json = serde_json::to_string_pretty(artifact)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .with_context(|| format!("Cannot write '{}'", tmp.display()))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e)
                .with_context(|| format!("Cannot move artifact into '{}'", self.path.display()));
        }

        tracing::debug!("Saved model artifact to '{}'", self.path.display());
        Ok(())
    }

    /// Load the artifact. A missing file is reported with a hint to train first.
    pub fn load(&self) -> Result<ModelArtifact> {
        if !self.path.exists() {
            bail!(
                "Model artifact '{}' not found. Run 'train' first to create it.",
                self.path.display()
            );
        }

        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read '{}'", self.path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("'{}' is not a valid model artifact", self.path.display()))
    }
}
