//! Vector-search collaborator trait and hit type.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single hit from the vector-similarity store.
///
/// The store conventionally carries the original passage text in its
/// metadata; [`text`](VectorHit::text) implements the lookup order the
/// hybrid merger relies on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorHit {
    /// Identifier assigned by the vector store.
    pub id: String,
    /// Similarity score (higher is more similar).
    pub score: f32,
    /// Key-value metadata stored alongside the vector.
    pub metadata: HashMap<String, String>,
    /// Passage text carried at the top level, when the store supports it.
    pub text: Option<String>,
}

impl VectorHit {
    /// Create a hit with empty metadata and no top-level text.
    pub fn new(id: impl Into<String>, score: f32) -> Self {
        Self {
            id: id.into(),
            score,
            metadata: HashMap::new(),
            text: None,
        }
    }

    /// Attach a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Attach top-level passage text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Extract the passage text for this hit.
    ///
    /// Tries, in order: metadata `"text"`, metadata `"content"`, the
    /// top-level text field. Blank candidates fall through to the next
    /// source; returns `None` when every source is absent or blank. Hits
    /// without extractable text are dropped by the merger, never merged
    /// under an empty key.
    pub fn text(&self) -> Option<&str> {
        fn non_blank(t: Option<&str>) -> Option<&str> {
            t.filter(|t| !t.is_empty())
        }
        non_blank(self.metadata.get("text").map(String::as_str))
            .or_else(|| non_blank(self.metadata.get("content").map(String::as_str)))
            .or_else(|| non_blank(self.text.as_deref()))
    }
}

/// A vector-similarity store queried with an embedded representation of the
/// query text.
///
/// Implementations perform nearest-neighbor search by cosine or an
/// equivalent metric and return hits ordered by descending similarity.
#[async_trait]
pub trait VectorSearcher: Send + Sync {
    /// Search for the `top_k` most similar entries to the given embedding.
    async fn search(&self, embedding: &[f32], top_k: usize) -> Result<Vec<VectorHit>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_prefers_metadata_text() {
        let hit = VectorHit::new("v1", 0.9)
            .with_metadata("text", "from metadata")
            .with_metadata("content", "from content")
            .with_text("top level");

        assert_eq!(hit.text(), Some("from metadata"));
    }

    #[test]
    fn test_text_falls_back_to_content() {
        let hit = VectorHit::new("v1", 0.9)
            .with_metadata("content", "from content")
            .with_text("top level");

        assert_eq!(hit.text(), Some("from content"));
    }

    #[test]
    fn test_text_falls_back_to_top_level() {
        let hit = VectorHit::new("v1", 0.9).with_text("top level");
        assert_eq!(hit.text(), Some("top level"));
    }

    #[test]
    fn test_text_none_when_absent_or_blank() {
        assert_eq!(VectorHit::new("v1", 0.9).text(), None);

        let blank = VectorHit::new("v2", 0.5).with_text("");
        assert_eq!(blank.text(), None);
    }

    #[test]
    fn test_blank_metadata_text_falls_through() {
        let hit = VectorHit::new("v1", 0.9)
            .with_metadata("text", "")
            .with_metadata("content", "from content");

        assert_eq!(hit.text(), Some("from content"));
    }
}
