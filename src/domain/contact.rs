// ============================================================
// Layer 3 — Contact Info
// ============================================================
// Name and email collected on the contact page. Carried from
// page to page for display only: never validated, never stored,
// never part of the feature schema.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,
}

impl ContactInfo {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name:  name.into(),
            email: email.into(),
        }
    }

    /// Pick the contact fields out of a full form submission
    pub fn from_form(form: &HashMap<String, String>) -> Self {
        Self::new(
            form.get("name").cloned().unwrap_or_default(),
            form.get("email").cloned().unwrap_or_default(),
        )
    }
}
