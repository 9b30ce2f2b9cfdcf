use serde::{Deserialize, Serialize};

use super::errors::StoreError;

/// A project shown in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Project {
    pub(crate) id: String,
    pub(crate) name: String,
    /// Path to an image file; a monogram is drawn when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) icon: Option<String>,
}

impl Project {
    /// Build a project from a user-entered name.
    pub(crate) fn from_name(name: &str) -> Result<Self, StoreError> {
        let id = project_id_from_name(name)?;
        Ok(Self {
            id,
            name: name.trim().to_string(),
            icon: None,
        })
    }
}

/// Derive a URL-safe id: lowercase ASCII alphanumerics joined by single `-`.
fn project_id_from_name(name: &str) -> Result<String, StoreError> {
    let mut id = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !id.is_empty() {
                id.push('-');
            }
            pending_dash = false;
            id.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if id.is_empty() {
        return Err(StoreError::InvalidName {
            name: name.to_string(),
        });
    }

    Ok(id)
}
