//! Keyword (sparse) retrieval over an in-memory document corpus.
//!
//! This module provides exact-term relevance ranking with BM25 scoring and
//! optional durable persistence:
//!
//! - **Scorer**: `Bm25Scorer` - corpus statistics and Okapi BM25 scoring,
//!   rebuilt over the full corpus on every write
//! - **Index**: `KeywordIndex` - insertion-ordered corpus with duplicate
//!   filtering, snapshot persistence, and a read-write lock so concurrent
//!   retrieval never observes a half-applied write
//! - **Snapshot**: JSON persistence for the corpus and its tokenizations
//!
//! Indexing rebuilds statistics over the whole corpus rather than
//! incrementally. The rebuild is O(corpus size), which is acceptable because
//! it runs at document-ingestion time, never on the query path.

pub mod index;
pub mod scorer;
pub mod snapshot;

pub use index::KeywordIndex;
pub use scorer::{Bm25Params, Bm25Scorer};
