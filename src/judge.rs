//! Relevance-judgment collaborator trait used by the semantic reranker.

use async_trait::async_trait;

use crate::error::Result;

/// An external model that judges the relevance of candidate snippets to a
/// query.
///
/// The judge receives the query and a numbered snippet listing and returns
/// its raw textual response. It is expected to answer with a JSON list of
/// `{"index": n, "score": s}` objects, but the contract is best-effort: the
/// response may be wrapped in prose, partial, or malformed, and the reranker
/// parses it defensively. Implementations should only error when the
/// backend itself is unreachable.
#[async_trait]
pub trait RelevanceJudge: Send + Sync {
    /// Judge the numbered snippets against the query, returning the raw
    /// model response.
    async fn judge(&self, query: &str, numbered_snippets: &str) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoJudge;

    #[async_trait]
    impl RelevanceJudge for EchoJudge {
        async fn judge(&self, _query: &str, _numbered_snippets: &str) -> Result<String> {
            Ok(r#"[{"index": 1, "score": 0.9}]"#.to_string())
        }
    }

    #[tokio::test]
    async fn test_judge_returns_raw_text() {
        let judge = EchoJudge;
        let response = judge.judge("q", "1. snippet").await.unwrap();
        assert!(response.contains("index"));
    }
}
