//! Core types for docdex
//!
//! This crate defines the foundational types used throughout the engine:
//! - IndexedDocument: the stored document record
//! - SearchRequest / SearchHit: the query API surface
//! - IndexStats: artifact statistics
//! - Error / Result: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod error;
pub mod search_types;

pub use document::IndexedDocument;
pub use error::{Error, Result};
pub use search_types::{IndexStats, SearchHit, SearchRequest, DEFAULT_LIMIT};
