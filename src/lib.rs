//! # Xiphos
//!
//! A hybrid retrieval and ranking core for RAG backends.
//!
//! ## Features
//!
//! - In-memory BM25 keyword index with durable JSON snapshots
//! - Dense retrieval through pluggable embedding and vector-store traits
//! - Weighted-sum merging with per-query blend-weight tuning
//! - Best-effort reranking via an external relevance judge, with a lexical
//!   fallback
//! - Graceful degradation: collaborator failures reduce search quality,
//!   never break the response

pub mod analysis;
pub mod embedding;
pub mod error;
pub mod hybrid_search;
pub mod judge;
pub mod keyword;
pub mod rerank;
pub mod vector;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
