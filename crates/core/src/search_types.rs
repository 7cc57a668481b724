//! Search request and response types
//!
//! These are the types callers build to query the engine and the types the
//! engine hands back. Ranking internals (BM25, boolean filtering) live in
//! `docdex-search`; nothing here depends on them.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default number of hits returned when the caller does not set a limit
pub const DEFAULT_LIMIT: usize = 10;

/// A search request against the index
///
/// # Examples
///
/// ```
/// use docdex_core::SearchRequest;
///
/// let req = SearchRequest::new("safety AND NOT committee")
///     .with_limit(5)
///     .with_allowed_ids(["doc-1", "doc-2"]);
///
/// assert_eq!(req.query, "safety AND NOT committee");
/// assert_eq!(req.limit, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Raw query text (may contain AND/OR/NOT operators)
    pub query: String,

    /// Maximum number of hits to return
    pub limit: usize,

    /// Optional allow-list restricting hits to these document ids
    pub allowed_ids: Option<HashSet<String>>,
}

impl SearchRequest {
    /// Create a new SearchRequest with defaults
    ///
    /// Default values:
    /// - limit: 10
    /// - allowed_ids: None (search all documents)
    pub fn new(query: impl Into<String>) -> Self {
        SearchRequest {
            query: query.into(),
            limit: DEFAULT_LIMIT,
            allowed_ids: None,
        }
    }

    /// Builder: set the maximum number of hits
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Builder: restrict hits to the given document ids
    ///
    /// Ids are normalized through `ToString`, so integer-keyed callers and
    /// string-keyed callers select the same documents.
    pub fn with_allowed_ids<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.allowed_ids = Some(ids.into_iter().map(|id| id.to_string()).collect());
        self
    }
}

/// A single ranked search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Identifier of the matching document
    pub doc_id: String,

    /// Title copied from the stored document
    pub title: String,

    /// Tag string copied from the stored document
    pub tags: String,

    /// Snippet of the document body with query terms emphasized
    pub highlight: String,
}

/// Point-in-time statistics about the index artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of documents currently indexed
    pub documents: usize,

    /// Size of the artifact file in bytes
    pub artifact_bytes: u64,
}
