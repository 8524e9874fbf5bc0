//! Result types for retrieval and ranking.

use serde::{Deserialize, Serialize};

/// A retrieved passage paired with its relevance score.
///
/// This is the record every retrieval stage speaks: the keyword index
/// produces it with raw BM25 scores, the merger with blended scores, and the
/// reranker reorders it. Result sets are query-scoped and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredText {
    /// The passage text. Also serves as the merge key: identical text from
    /// different retrieval signals collapses into one entry.
    pub text: String,
    /// Relevance score (higher is more relevant). The scale depends on the
    /// producing stage; merged scores live in [0, 2].
    pub score: f32,
}

impl ScoredText {
    /// Create a new scored result.
    pub fn new(text: impl Into<String>, score: f32) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scored_text_creation() {
        let result = ScoredText::new("a passage", 0.8);
        assert_eq!(result.text, "a passage");
        assert_eq!(result.score, 0.8);
    }

    #[test]
    fn test_scored_text_serialization() {
        let result = ScoredText::new("a passage", 0.5);
        let json = serde_json::to_string(&result).unwrap();
        let back: ScoredText = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
