//! Hybrid search engine implementation.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::embedding::EmbeddingProvider;
use crate::error::{Result, XiphosError};
use crate::hybrid_search::classifier;
use crate::hybrid_search::config::HybridSearchConfig;
use crate::hybrid_search::merger;
use crate::hybrid_search::normalizer;
use crate::hybrid_search::types::ScoredText;
use crate::keyword::KeywordIndex;
use crate::rerank::Reranker;
use crate::vector::{VectorHit, VectorSearcher};

/// Hybrid search engine combining keyword and vector retrieval.
///
/// Holds an explicitly injected keyword index and collaborator handles; no
/// ambient global state. The keyword and vector branches run sequentially
/// and each tolerates its own failures: a dead vector store degrades hybrid
/// search to keyword-only search (and vice versa), never to an error.
///
/// [`search`](Self::search) itself never fails — any unexpected failure is
/// logged and answered with an empty result list.
pub struct HybridSearchEngine {
    /// Keyword retriever over the indexed corpus.
    index: Arc<KeywordIndex>,
    /// Embedder for converting the query to a dense vector.
    embedder: Arc<dyn EmbeddingProvider>,
    /// Vector-similarity store queried with the embedded query.
    vector_searcher: Arc<dyn VectorSearcher>,
    /// Optional post-merge reranker.
    reranker: Option<Reranker>,
    config: HybridSearchConfig,
}

impl HybridSearchEngine {
    /// Create a new hybrid search engine.
    pub fn new(
        index: Arc<KeywordIndex>,
        embedder: Arc<dyn EmbeddingProvider>,
        vector_searcher: Arc<dyn VectorSearcher>,
        config: HybridSearchConfig,
    ) -> Self {
        Self {
            index,
            embedder,
            vector_searcher,
            reranker: None,
            config,
        }
    }

    /// Attach a reranker applied to the merged shortlist.
    pub fn with_reranker(mut self, reranker: Reranker) -> Self {
        self.reranker = Some(reranker);
        self
    }

    /// Perform hybrid search with the configured default alpha and top-k.
    pub async fn search_with_defaults(&self, query: &str) -> Vec<ScoredText> {
        self.search(query, self.config.default_alpha, self.config.default_top_k)
            .await
    }

    /// Perform hybrid search.
    ///
    /// `alpha` is the dense-vs-sparse blend weight in [0, 1] (0 = keyword
    /// only, 1 = vector only). It is a hint: the query classifier clamps it
    /// into a keyword-favoring band for factoid queries and floors it for
    /// semantic queries before any retrieval runs.
    ///
    /// Never fails. Collaborator errors reduce the affected branch to an
    /// empty contribution; anything unexpected is logged and the result is
    /// an empty list.
    pub async fn search(&self, query: &str, alpha: f32, top_k: usize) -> Vec<ScoredText> {
        match self.try_search(query, alpha, top_k).await {
            Ok(results) => results,
            Err(e) => {
                warn!(error = %e, "hybrid search failed");
                Vec::new()
            }
        }
    }

    async fn try_search(&self, query: &str, alpha: f32, top_k: usize) -> Result<Vec<ScoredText>> {
        let alpha = self.effective_alpha(query, alpha);

        // Sparse branch.
        let keyword_results = self.index.retrieve(query, top_k);
        let keyword_scores: Vec<f32> = keyword_results.iter().map(|r| r.score).collect();
        let keyword_norms = normalizer::normalize(&keyword_scores);

        // Dense branch. Failure contributes an empty list, never an error.
        let vector_hits = match self.dense_retrieve(query, top_k).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!(error = %e, "vector retrieval failed, continuing keyword-only");
                Vec::new()
            }
        };
        let vector_scores: Vec<f32> = vector_hits.iter().map(|h| h.score).collect();
        let vector_norms = normalizer::normalize(&vector_scores);

        let keyword_contrib: Vec<(String, f32)> = keyword_results
            .into_iter()
            .zip(keyword_norms)
            .map(|(r, norm)| (r.text, norm))
            .collect();
        let vector_contrib: Vec<(String, f32)> = vector_hits
            .iter()
            .zip(vector_norms)
            .filter_map(|(hit, norm)| hit.text().map(|t| (t.to_string(), norm)))
            .collect();

        let merged = merger::merge(keyword_contrib, vector_contrib, alpha, top_k);
        if merged.is_empty() {
            return Ok(Vec::new());
        }

        let results = match &self.reranker {
            Some(reranker) => {
                let reranked = reranker.rerank(query, merged.clone(), top_k).await;
                if reranked.is_empty() { merged } else { reranked }
            }
            None => merged,
        };

        Ok(results)
    }

    /// Adjust the caller's blend weight using the query classifier.
    ///
    /// Factoid queries are clamped into the keyword-favoring band; anything
    /// else is floored into the vector-favoring band.
    fn effective_alpha(&self, query: &str, alpha: f32) -> f32 {
        let adjusted = if classifier::is_factoid(query) {
            alpha
                .min(self.config.factoid_alpha_cap)
                .max(self.config.factoid_alpha_floor)
        } else {
            alpha.max(self.config.semantic_alpha_floor)
        };

        if adjusted != alpha {
            debug!(requested = alpha, effective = adjusted, "adjusted blend weight");
        }
        adjusted
    }

    /// Embed the query and run vector-similarity search.
    async fn dense_retrieve(&self, query: &str, top_k: usize) -> Result<Vec<VectorHit>> {
        let embedding = self.embedder.embed(query).await?;
        if embedding.is_empty() {
            return Err(XiphosError::embedding("embedder returned an empty vector"));
        }
        self.vector_searcher.search(&embedding, top_k).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedEmbedder;

    #[async_trait]
    impl EmbeddingProvider for FixedEmbedder {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
            Ok(vec![1.0, 0.0, 0.0])
        }

        fn dimensions(&self) -> usize {
            3
        }
    }

    struct ScriptedSearcher {
        hits: Vec<VectorHit>,
    }

    #[async_trait]
    impl VectorSearcher for ScriptedSearcher {
        async fn search(&self, _embedding: &[f32], top_k: usize) -> Result<Vec<VectorHit>> {
            let mut hits = self.hits.clone();
            hits.truncate(top_k);
            Ok(hits)
        }
    }

    struct FailingSearcher;

    #[async_trait]
    impl VectorSearcher for FailingSearcher {
        async fn search(&self, _embedding: &[f32], _top_k: usize) -> Result<Vec<VectorHit>> {
            Err(XiphosError::vector_search("store unreachable"))
        }
    }

    fn seeded_index() -> Arc<KeywordIndex> {
        let index = KeywordIndex::in_memory();
        index.add_documents(&[
            "the cat sat on the mat".to_string(),
            "the dog ran in the park".to_string(),
        ]);
        Arc::new(index)
    }

    fn engine_with(
        index: Arc<KeywordIndex>,
        searcher: Arc<dyn VectorSearcher>,
    ) -> HybridSearchEngine {
        HybridSearchEngine::new(
            index,
            Arc::new(FixedEmbedder),
            searcher,
            HybridSearchConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_search_merges_both_branches() {
        let searcher = Arc::new(ScriptedSearcher {
            hits: vec![
                VectorHit::new("v1", 0.9).with_metadata("text", "the cat sat on the mat"),
                VectorHit::new("v2", 0.4).with_metadata("text", "vector-only passage"),
            ],
        });
        let engine = engine_with(seeded_index(), searcher);

        let results = engine.search("the cat sat", 0.5, 5).await;
        assert!(!results.is_empty());
        // The passage ranked first by both branches collects both
        // contributions and lands on top.
        assert_eq!(results[0].text, "the cat sat on the mat");
        assert!(results.iter().any(|r| r.text == "vector-only passage"));
    }

    #[tokio::test]
    async fn test_vector_failure_degrades_to_keyword_only() {
        let engine = engine_with(seeded_index(), Arc::new(FailingSearcher));

        let results = engine.search("cat", 0.9, 5).await;
        assert!(!results.is_empty());
        assert_eq!(results[0].text, "the cat sat on the mat");
    }

    #[tokio::test]
    async fn test_empty_everything_returns_empty() {
        let engine = engine_with(
            Arc::new(KeywordIndex::in_memory()),
            Arc::new(ScriptedSearcher { hits: Vec::new() }),
        );

        let results = engine.search("anything", 0.5, 5).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_factoid_alpha_clamped_into_keyword_band() {
        let engine = engine_with(seeded_index(), Arc::new(FailingSearcher));

        let effective = engine.effective_alpha("What is the capital of France?", 0.9);
        assert!(effective <= 0.4);
        assert!(effective >= 0.2);

        let floored = engine.effective_alpha("What is the capital of France?", 0.0);
        assert_eq!(floored, 0.2);
    }

    #[tokio::test]
    async fn test_semantic_alpha_floored() {
        let engine = engine_with(seeded_index(), Arc::new(FailingSearcher));

        let effective = engine.effective_alpha("summarize the architecture", 0.1);
        assert_eq!(effective, 0.6);

        let untouched = engine.effective_alpha("summarize the architecture", 0.8);
        assert_eq!(untouched, 0.8);
    }

    #[tokio::test]
    async fn test_textless_vector_hits_dropped() {
        let searcher = Arc::new(ScriptedSearcher {
            hits: vec![VectorHit::new("v1", 0.9)],
        });
        let engine = engine_with(Arc::new(KeywordIndex::in_memory()), searcher);

        let results = engine.search("query with no keyword matches", 0.8, 5).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_search_with_defaults() {
        let engine = engine_with(seeded_index(), Arc::new(FailingSearcher));
        let results = engine.search_with_defaults("cat").await;
        assert!(!results.is_empty());
    }

    #[tokio::test]
    async fn test_reranker_applies_to_merged_list() {
        let searcher = Arc::new(ScriptedSearcher { hits: Vec::new() });
        let engine = engine_with(seeded_index(), searcher).with_reranker(Reranker::lexical());

        let results = engine.search("dog park", 0.5, 5).await;
        assert_eq!(results[0].text, "the dog ran in the park");
    }
}
