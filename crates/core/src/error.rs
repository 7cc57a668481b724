//! Error types for docdex
//!
//! This module defines all error types used throughout the engine.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docdex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the docdex engine
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Index artifact exists but cannot be parsed into the expected shape
    #[error("Corrupt index artifact at {}: {detail}", .path.display())]
    CorruptIndex {
        /// Location of the offending artifact
        path: PathBuf,
        /// Parser diagnostic describing what failed
        detail: String,
    },

    /// Index directory cannot be created or opened
    #[error("Index directory unavailable at {}: {source}", .path.display())]
    DirectoryUnavailable {
        /// Directory the store attempted to use
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
