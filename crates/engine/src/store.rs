//! Index artifact storage
//!
//! The entire index lives in one JSON artifact, `index.json`, inside the
//! index directory. Reads always parse the full artifact and writes always
//! replace it atomically (temp file, fsync, rename, directory fsync), so a
//! reader never observes a partially written index.
//!
//! Concurrency model: single writer, many readers. Mutations serialize on
//! an in-process lock; readers take no lock at all and rely on the atomic
//! replace. Multi-process writers are out of scope.

use docdex_core::{Error, IndexedDocument, Result};
use docdex_search::tokenizer::tokenize;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Artifact file name placed in the index directory.
pub const INDEX_FILE_NAME: &str = "index.json";

#[derive(Deserialize)]
struct Artifact {
    #[serde(default)]
    documents: Vec<IndexedDocument>,
}

#[derive(Serialize)]
struct ArtifactRef<'a> {
    documents: &'a [IndexedDocument],
}

/// Read-full/write-full store for the index artifact
///
/// Cheap to construct; all state lives on disk. `load` re-reads the
/// artifact on every call, which keeps readers coherent with the latest
/// atomic replace without any shared in-memory cache.
#[derive(Debug)]
pub struct IndexStore {
    dir: PathBuf,
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl IndexStore {
    /// Open a store rooted at `dir`, creating the directory and an empty
    /// artifact as needed
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryUnavailable`] when the directory cannot be
    /// created or opened.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir).map_err(|e| Error::DirectoryUnavailable {
            path: dir.clone(),
            source: e,
        })?;
        let store = IndexStore {
            path: dir.join(INDEX_FILE_NAME),
            dir,
            write_lock: Mutex::new(()),
        };
        store.ensure_initialized()?;
        Ok(store)
    }

    /// Create an empty artifact if none exists
    ///
    /// Idempotent; safe to call before every operation.
    pub fn ensure_initialized(&self) -> Result<()> {
        if !self.path.exists() {
            let _guard = self.write_lock.lock();
            // Re-check under the lock so racing writers create it once
            if !self.path.exists() {
                self.write_artifact(&[])?;
                info!(
                    target: "docdex::store",
                    path = %self.path.display(),
                    "Created empty index artifact"
                );
            }
        }
        Ok(())
    }

    /// Read and parse the full artifact
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptIndex`] when the artifact exists but cannot
    /// be parsed, including records missing `doc_id`, `title` or `content`.
    pub fn load(&self) -> Result<Vec<IndexedDocument>> {
        self.ensure_initialized()?;
        self.read_artifact()
    }

    /// Replace the artifact with the given document list
    pub fn save(&self, documents: &[IndexedDocument]) -> Result<()> {
        let _guard = self.write_lock.lock();
        self.write_artifact(documents)
    }

    /// Insert or replace one document
    ///
    /// Any existing record with the same `doc_id` is dropped and the new
    /// record is appended, so a re-indexed document moves to the end of the
    /// artifact. Tokens are recomputed from the current field values.
    pub fn upsert(&self, doc_id: &str, title: &str, content: &str, tags: &str) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut documents = self.load_locked()?;
        let tokens = tokenize(&format!("{title} {tags} {content}"));
        documents.retain(|doc| doc.doc_id != doc_id);
        documents.push(IndexedDocument {
            doc_id: doc_id.to_string(),
            title: title.to_string(),
            tags: tags.to_string(),
            content: content.to_string(),
            tokens,
        });
        self.write_artifact(&documents)?;
        info!(
            target: "docdex::store",
            doc_id,
            documents = documents.len(),
            "Indexed document"
        );
        Ok(())
    }

    /// Remove one document by id
    ///
    /// Returns `true` when a record was removed, `false` when the id was
    /// not indexed. The artifact is rewritten only on removal.
    pub fn remove(&self, doc_id: &str) -> Result<bool> {
        let _guard = self.write_lock.lock();
        let mut documents = self.load_locked()?;
        let before = documents.len();
        documents.retain(|doc| doc.doc_id != doc_id);
        if documents.len() == before {
            return Ok(false);
        }
        self.write_artifact(&documents)?;
        info!(
            target: "docdex::store",
            doc_id,
            documents = documents.len(),
            "Removed document from index"
        );
        Ok(true)
    }

    /// Directory holding the artifact
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the artifact file
    pub fn artifact_path(&self) -> &Path {
        &self.path
    }

    /// Load for callers already holding the write lock
    fn load_locked(&self) -> Result<Vec<IndexedDocument>> {
        if !self.path.exists() {
            self.write_artifact(&[])?;
        }
        self.read_artifact()
    }

    /// Read and parse the artifact file
    fn read_artifact(&self) -> Result<Vec<IndexedDocument>> {
        let bytes = std::fs::read(&self.path)?;
        let artifact: Artifact = serde_json::from_slice(&bytes).map_err(|e| Error::CorruptIndex {
            path: self.path.clone(),
            detail: e.to_string(),
        })?;
        Ok(artifact.documents)
    }

    /// Serialize and atomically replace the artifact
    fn write_artifact(&self, documents: &[IndexedDocument]) -> Result<()> {
        let payload = serde_json::to_vec(&ArtifactRef { documents })
            .map_err(|e| Error::SerializationError(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");

        // Write to temp file
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&temp_path)?;
        file.write_all(&payload)?;
        file.sync_all()?;
        drop(file);

        // Atomic rename
        std::fs::rename(&temp_path, &self.path)?;

        // Sync parent directory
        if let Some(parent) = self.path.parent() {
            if parent.exists() {
                let dir = File::open(parent)?;
                dir.sync_all()?;
            }
        }

        debug!(
            target: "docdex::store",
            bytes = payload.len(),
            documents = documents.len(),
            "Replaced index artifact"
        );
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
