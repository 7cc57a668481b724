//! Search primitives for docdex
//!
//! This crate implements the ranking pipeline pieces the engine composes:
//! - tokenizer: lowercase ASCII alphanumeric tokenization
//! - query: AND/OR/NOT boolean filtering over candidate documents
//! - scorer: Okapi BM25 fitted per candidate set
//! - snippet: highlighted snippet extraction
//!
//! Everything here is pure computation over in-memory data; persistence and
//! orchestration live in `docdex-engine`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod query;
pub mod scorer;
pub mod snippet;
pub mod tokenizer;

pub use query::{apply_filter, classify, has_operators, has_terms, Operator, QueryToken};
pub use scorer::{Bm25Model, Bm25Params, DEFAULT_B, DEFAULT_EPSILON, DEFAULT_K1};
pub use snippet::{highlight, FALLBACK_CHARS, WINDOW_AFTER, WINDOW_BEFORE};
pub use tokenizer::tokenize;
