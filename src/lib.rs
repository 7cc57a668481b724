//! Docdex - Embedded document search engine
//!
//! Docdex indexes small document collections into a single JSON artifact and
//! serves keyword search with boolean operators, BM25 ranking and highlighted
//! snippets.
//!
//! # Quick Start
//!
//! ```no_run
//! use docdex::{SearchEngine, SearchRequest};
//!
//! # fn main() -> docdex::Result<()> {
//! let engine = SearchEngine::open("./kb_index")?;
//!
//! engine.index_document(
//!     "doc-1",
//!     "Safety Committees",
//!     "Joint safety committees inspect every site monthly.",
//!     "safety",
//! )?;
//!
//! let hits = engine.search(&SearchRequest::new("safety AND NOT grievance"))?;
//! for hit in hits {
//!     println!("{}: {}", hit.title, hit.highlight);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! Every query runs a fixed pipeline: load the artifact, apply the caller's
//! allow-list, apply the boolean filter, rank the survivors with BM25 fitted
//! to that candidate set, then highlight the winners. Writes serialize on a
//! process-local lock and replace the artifact atomically, so concurrent
//! readers always see a complete index.
//!
//! The ranking internals (tokenizer, boolean filter, scorer, highlighter)
//! live in [`search`] and can be used standalone.

// Re-export the public API from docdex-engine
pub use docdex_engine::*;

// Ranking internals for callers that need them without an index directory
pub use docdex_search as search;
