//! Error types for the Xiphos library.
//!
//! All fallible operations in the crate return [`Result`], with
//! [`XiphosError`] covering the failure modes of the retrieval core:
//! collaborator failures (embedding, vector search, relevance judging),
//! persistence failures, and analysis/index errors.
//!
//! The public search surface deliberately does not propagate most of these
//! errors. Branch-local failures degrade to empty contributions and
//! reranking failures fall back to the un-reranked list; the typed errors
//! exist so interior code states its failure modes in signatures instead of
//! hiding them in catch-all blocks.
//!
//! # Examples
//!
//! ```
//! use xiphos::error::{Result, XiphosError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(XiphosError::index("corpus statistics out of sync"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Xiphos operations.
#[derive(Error, Debug)]
pub enum XiphosError {
    /// I/O errors (snapshot files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Keyword-index errors
    #[error("Index error: {0}")]
    Index(String),

    /// Analysis errors (tokenization, normalization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Snapshot persistence errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Embedding collaborator errors
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Vector-search collaborator errors
    #[error("Vector search error: {0}")]
    VectorSearch(String),

    /// Reranking errors (judge unreachable, unusable response)
    #[error("Rerank error: {0}")]
    Rerank(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with XiphosError.
pub type Result<T> = std::result::Result<T, XiphosError>;

impl XiphosError {
    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        XiphosError::Index(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        XiphosError::Analysis(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        XiphosError::Storage(msg.into())
    }

    /// Create a new embedding error.
    pub fn embedding<S: Into<String>>(msg: S) -> Self {
        XiphosError::Embedding(msg.into())
    }

    /// Create a new vector-search error.
    pub fn vector_search<S: Into<String>>(msg: S) -> Self {
        XiphosError::VectorSearch(msg.into())
    }

    /// Create a new rerank error.
    pub fn rerank<S: Into<String>>(msg: S) -> Self {
        XiphosError::Rerank(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        XiphosError::Other(msg.into())
    }
}
