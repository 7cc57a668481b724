//! Stored document record
//!
//! The index artifact is a JSON file holding a flat list of `IndexedDocument`
//! records. Older artifacts may omit `tags` and `tokens`; both default to
//! empty on load. `doc_id`, `title` and `content` are required and a record
//! missing any of them fails artifact parsing.

use serde::{Deserialize, Serialize};

/// A single document as stored in the index artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedDocument {
    /// Stable external identifier
    pub doc_id: String,
    /// Human-readable title
    pub title: String,
    /// Free-form tag string (space or comma separated)
    #[serde(default)]
    pub tags: String,
    /// Full document body
    pub content: String,
    /// Lowercase alphanumeric tokens over title, tags and content,
    /// recomputed on every upsert
    #[serde(default)]
    pub tokens: Vec<String>,
}

impl IndexedDocument {
    /// Concatenated title, tags and content used for substring matching
    pub fn searchable_text(&self) -> String {
        format!("{} {} {}", self.title, self.tags, self.content)
    }
}
