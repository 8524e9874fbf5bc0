//! Embedding collaborator trait for converting text into dense vectors.

use async_trait::async_trait;

use crate::error::Result;

/// A provider that generates vector embeddings from text input.
///
/// Implementations wrap an external embedding backend behind a unified async
/// interface. The hybrid engine only needs single-query embedding; the
/// default [`embed_batch`](EmbeddingProvider::embed_batch) implementation
/// embeds sequentially and exists for ingestion pipelines that feed the
/// vector store. Backends with native batching should override it.
///
/// Failures are reported as typed errors; the hybrid engine translates them
/// into an empty dense contribution rather than propagating them.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding vector for a single text input.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embedding vectors for a batch of text inputs.
    ///
    /// The default implementation calls [`embed`](EmbeddingProvider::embed)
    /// once per input.
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut vectors = Vec::with_capacity(texts.len());
        for text in texts {
            vectors.push(self.embed(text).await?);
        }
        Ok(vectors)
    }

    /// Dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XiphosError;

    struct FixedEmbedder {
        vector: Vec<f32>,
    }

    #[async_trait]
    impl EmbeddingProvider for FixedEmbedder {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
            Ok(self.vector.clone())
        }

        fn dimensions(&self) -> usize {
            self.vector.len()
        }
    }

    struct FailingEmbedder;

    #[async_trait]
    impl EmbeddingProvider for FailingEmbedder {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
            Err(XiphosError::embedding("backend unavailable"))
        }

        fn dimensions(&self) -> usize {
            0
        }
    }

    #[tokio::test]
    async fn test_default_embed_batch() {
        let embedder = FixedEmbedder {
            vector: vec![0.1, 0.2, 0.3],
        };

        let vectors = embedder.embed_batch(&["a", "b"]).await.unwrap();
        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0], vec![0.1, 0.2, 0.3]);
        assert_eq!(embedder.dimensions(), 3);
    }

    #[tokio::test]
    async fn test_embed_batch_propagates_failure() {
        let embedder = FailingEmbedder;
        assert!(embedder.embed_batch(&["a"]).await.is_err());
    }
}
