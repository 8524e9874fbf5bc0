//! Hybrid search combining keyword and vector retrieval.
//!
//! This module merges sparse (BM25 keyword) and dense (embedding-vector)
//! search results into one ranked list:
//!
//! - **Types**: `ScoredText` - the `{text, score}` result record
//! - **Configuration**: blend-weight bands and engine defaults
//! - **Classifier**: factoid-vs-semantic query heuristic that biases the
//!   blend weight
//! - **Normalizer**: min-max score scaling so the two signals combine fairly
//! - **Merger**: weighted-sum merging keyed by result text
//! - **Engine**: orchestration with branch-local failure tolerance
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use xiphos::hybrid_search::config::HybridSearchConfig;
//! use xiphos::hybrid_search::engine::HybridSearchEngine;
//! use xiphos::keyword::KeywordIndex;
//! # use xiphos::embedding::EmbeddingProvider;
//! # use xiphos::vector::VectorSearcher;
//!
//! # async fn example(
//! #     embedder: Arc<dyn EmbeddingProvider>,
//! #     searcher: Arc<dyn VectorSearcher>,
//! # ) {
//! let index = Arc::new(KeywordIndex::in_memory());
//! index.add_documents(&["the cat sat".to_string()]);
//!
//! let engine = HybridSearchEngine::new(index, embedder, searcher, HybridSearchConfig::default());
//! let results = engine.search("where did the cat sit?", 0.5, 5).await;
//! # }
//! ```

pub mod classifier;
pub mod config;
pub mod engine;
pub mod merger;
pub mod normalizer;
pub mod types;

pub use config::HybridSearchConfig;
pub use engine::HybridSearchEngine;
pub use types::ScoredText;
