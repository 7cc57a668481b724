//! Search engine facade
//!
//! `SearchEngine` ties the pieces together: the artifact store, the boolean
//! filter, the BM25 ranker and the highlighter. One instance per index
//! directory; it is cheap to open and holds no document state in memory.

use crate::config::{EngineConfig, CONFIG_FILE_NAME};
use crate::store::IndexStore;
use docdex_core::{IndexStats, IndexedDocument, Result, SearchHit, SearchRequest};
use docdex_search::query::{apply_filter, classify};
use docdex_search::scorer::Bm25Model;
use docdex_search::snippet::highlight;
use docdex_search::tokenizer::tokenize;
use std::path::Path;
use tracing::debug;

/// Document search engine over one index directory
///
/// # Examples
///
/// ```no_run
/// use docdex_engine::SearchEngine;
/// use docdex_core::SearchRequest;
///
/// # fn main() -> docdex_core::Result<()> {
/// let engine = SearchEngine::open("./kb_index")?;
/// engine.index_document(
///     "doc-1",
///     "Grievance Timelines",
///     "A grievance must be filed within 30 days.",
///     "grievance, arbitration",
/// )?;
///
/// let hits = engine.search(&SearchRequest::new("grievance AND NOT overtime"))?;
/// assert_eq!(hits[0].doc_id, "doc-1");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SearchEngine {
    store: IndexStore,
    config: EngineConfig,
}

impl SearchEngine {
    /// Open an engine rooted at `dir`
    ///
    /// Creates the directory, an empty index artifact and a default
    /// `docdex.toml` on first open.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let store = IndexStore::open(dir)?;
        let config_path = dir.join(CONFIG_FILE_NAME);
        EngineConfig::write_default_if_missing(&config_path)?;
        let config = EngineConfig::from_file(&config_path)?;
        Ok(SearchEngine { store, config })
    }

    /// Open an engine with an explicit configuration
    ///
    /// The configuration is validated and persisted to `docdex.toml`,
    /// replacing whatever the file held before.
    pub fn open_with_config(dir: impl AsRef<Path>, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let dir = dir.as_ref();
        let store = IndexStore::open(dir)?;
        config.write_to_file(&dir.join(CONFIG_FILE_NAME))?;
        Ok(SearchEngine { store, config })
    }

    /// Insert or replace a document in the index
    pub fn index_document(
        &self,
        doc_id: &str,
        title: &str,
        content: &str,
        tags: &str,
    ) -> Result<()> {
        self.store.upsert(doc_id, title, content, tags)
    }

    /// Remove a document from the index
    ///
    /// Returns `true` when the document was indexed, `false` otherwise.
    pub fn remove_document(&self, doc_id: &str) -> Result<bool> {
        self.store.remove(doc_id)
    }

    /// Execute a search request
    ///
    /// Pipeline: load the artifact, apply the allow-list, apply the boolean
    /// filter, rank the survivors with BM25, truncate to the request limit
    /// and highlight the winners. Ties keep artifact order.
    pub fn search(&self, req: &SearchRequest) -> Result<Vec<SearchHit>> {
        // 1. Load the current artifact
        let documents = self.store.load()?;
        let indexed = documents.len();

        // 2. Apply the allow-list, preserving artifact order
        let candidates: Vec<IndexedDocument> = match &req.allowed_ids {
            Some(allowed) => documents
                .into_iter()
                .filter(|doc| allowed.contains(&doc.doc_id))
                .collect(),
            None => documents,
        };

        // 3. Boolean filter
        let query_tokens = classify(&req.query);
        let filtered = apply_filter(candidates, &query_tokens);
        if filtered.is_empty() {
            debug!(
                target: "docdex::search",
                query = %req.query,
                indexed,
                "No candidates after filtering"
            );
            return Ok(Vec::new());
        }

        // 4. Rank with BM25 fitted to the survivors only
        let survivors = filtered.len();
        let model = Bm25Model::fit(
            self.config.bm25_params(),
            filtered.iter().map(|doc| doc.tokens.as_slice()),
        );
        let terms = tokenize(&req.query);
        let scores = model.scores(&terms);

        let mut ranked: Vec<(IndexedDocument, f64)> =
            filtered.into_iter().zip(scores).collect();
        // Stable descending sort keeps artifact order for equal scores
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(req.limit);

        // 5. Highlight the returned slice only
        let hits: Vec<SearchHit> = ranked
            .into_iter()
            .map(|(doc, _score)| SearchHit {
                highlight: highlight(&doc.content, &terms),
                doc_id: doc.doc_id,
                title: doc.title,
                tags: doc.tags,
            })
            .collect();

        debug!(
            target: "docdex::search",
            query = %req.query,
            indexed,
            filtered = survivors,
            returned = hits.len(),
            "Search complete"
        );
        Ok(hits)
    }

    /// Point-in-time statistics about the index
    pub fn stats(&self) -> Result<IndexStats> {
        let documents = self.store.load()?;
        let artifact_bytes = std::fs::metadata(self.store.artifact_path())?.len();
        Ok(IndexStats {
            documents: documents.len(),
            artifact_bytes,
        })
    }

    /// The underlying artifact store
    pub fn store(&self) -> &IndexStore {
        &self.store
    }

    /// The active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

// ============================================================================
// Tests
// ============================================================================
