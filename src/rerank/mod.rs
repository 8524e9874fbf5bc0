//! Best-effort reranking of a merged candidate shortlist.
//!
//! Two strategies share one entry point:
//!
//! - **Semantic**: an external relevance-judgment model scores the
//!   candidates; its response is parsed defensively and an unusable
//!   response demotes the whole batch to the lexical strategy
//! - **Lexical**: token-set overlap between query and candidate text
//!
//! Reranking is an enhancement, never a point of failure: any error leaves
//! the caller with the original list truncated to `top_n`.

pub mod lexical;
pub mod semantic;

use std::sync::Arc;

use tracing::warn;

use crate::error::Result;
use crate::hybrid_search::normalizer;
use crate::hybrid_search::types::ScoredText;
use crate::judge::RelevanceJudge;

/// Maximum snippet length presented to the relevance judge.
const DEFAULT_SNIPPET_MAX_CHARS: usize = 500;

/// Reranker over an already-ranked candidate shortlist.
///
/// Construct with [`semantic`](Reranker::semantic) to score via a
/// [`RelevanceJudge`], or [`lexical`](Reranker::lexical) to use token
/// overlap only. The semantic strategy falls back to lexical when the judge
/// fails or returns an unparseable response.
///
/// # Examples
///
/// ```
/// use xiphos::hybrid_search::types::ScoredText;
/// use xiphos::rerank::Reranker;
///
/// let reranker = Reranker::lexical();
/// let merged = vec![
///     ScoredText::new("a lazy dog", 0.9),
///     ScoredText::new("the quick brown fox", 0.2),
/// ];
///
/// let reranked = tokio_test::block_on(reranker.rerank("quick fox", merged, 2));
/// assert_eq!(reranked[0].text, "the quick brown fox");
/// ```
pub struct Reranker {
    judge: Option<Arc<dyn RelevanceJudge>>,
    snippet_max_chars: usize,
}

impl Reranker {
    /// Create a reranker that scores by lexical token overlap.
    pub fn lexical() -> Self {
        Self {
            judge: None,
            snippet_max_chars: DEFAULT_SNIPPET_MAX_CHARS,
        }
    }

    /// Create a reranker that scores via a relevance-judgment model.
    pub fn semantic(judge: Arc<dyn RelevanceJudge>) -> Self {
        Self {
            judge: Some(judge),
            snippet_max_chars: DEFAULT_SNIPPET_MAX_CHARS,
        }
    }

    /// Override the per-snippet character limit used in judge prompts.
    pub fn with_snippet_limit(mut self, max_chars: usize) -> Self {
        self.snippet_max_chars = max_chars;
        self
    }

    /// Re-score and re-sort `results`, returning at most `top_n` entries.
    ///
    /// Empty input returns empty immediately. Rerank scores are min-max
    /// normalized before sorting; ties keep the input order. On any failure
    /// the original list is returned truncated to `top_n`, unchanged.
    pub async fn rerank(
        &self,
        query: &str,
        results: Vec<ScoredText>,
        top_n: usize,
    ) -> Vec<ScoredText> {
        if results.is_empty() {
            return results;
        }

        match self.try_rerank(query, &results, top_n).await {
            Ok(reranked) => reranked,
            Err(e) => {
                warn!(error = %e, "reranking failed, returning merged order");
                results.into_iter().take(top_n).collect()
            }
        }
    }

    async fn try_rerank(
        &self,
        query: &str,
        results: &[ScoredText],
        top_n: usize,
    ) -> Result<Vec<ScoredText>> {
        let rerank_scores = match &self.judge {
            Some(judge) => {
                match semantic::score(judge.as_ref(), query, results, self.snippet_max_chars).await
                {
                    Ok(scores) => scores,
                    Err(e) => {
                        warn!(error = %e, "semantic rerank failed, falling back to lexical");
                        lexical::score(query, results)
                    }
                }
            }
            None => lexical::score(query, results),
        };

        let norms = normalizer::normalize(&rerank_scores);
        let mut ranked: Vec<(usize, f32)> = norms.into_iter().enumerate().collect();
        // Stable sort keeps the input order for equal rerank scores.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(top_n);

        Ok(ranked
            .into_iter()
            .map(|(index, _)| results[index].clone())
            .collect())
    }
}
