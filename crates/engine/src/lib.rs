//! Search engine for docdex
//!
//! This crate orchestrates the lower layers:
//! - SearchEngine: open/index/search facade over one index directory
//! - IndexStore: read-full/write-full JSON artifact storage
//! - EngineConfig: `docdex.toml` ranking configuration
//!
//! The engine is the only component that touches the filesystem; all
//! ranking math lives in `docdex-search`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod engine;
pub mod store;

pub use config::{Bm25Config, EngineConfig, CONFIG_FILE_NAME};
pub use engine::SearchEngine;
pub use store::{IndexStore, INDEX_FILE_NAME};

// Re-export core types so embedders only need this crate
pub use docdex_core::{
    Error, IndexStats, IndexedDocument, Result, SearchHit, SearchRequest, DEFAULT_LIMIT,
};
