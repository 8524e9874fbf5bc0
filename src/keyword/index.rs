//! In-memory keyword index with durable persistence.

use std::path::PathBuf;

use ahash::AHashSet;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::analysis;
use crate::hybrid_search::types::ScoredText;
use crate::keyword::scorer::{Bm25Params, Bm25Scorer};
use crate::keyword::snapshot::{self, IndexSnapshot};

/// Corpus state guarded as a unit.
///
/// Documents, tokenizations, and the scorer mutate together under one write
/// lock; a retrieval running concurrently with an add can never observe the
/// collections out of step with each other.
struct IndexInner {
    /// Raw documents, insertion-ordered, unique by exact string equality.
    documents: Vec<String>,
    /// Tokenizations parallel to `documents`.
    tokenized_docs: Vec<Vec<String>>,
    /// BM25 statistics over the full corpus, rebuilt on every write.
    scorer: Bm25Scorer,
}

/// Keyword retriever over an in-memory corpus with BM25 ranking.
///
/// The corpus persists across queries and process restarts: every successful
/// add saves a JSON snapshot, and construction via [`open`](Self::open)
/// reloads it. A missing or corrupt snapshot starts the index empty rather
/// than failing. Persistence errors are logged and swallowed; the index
/// keeps operating in memory.
///
/// # Examples
///
/// ```
/// use xiphos::keyword::KeywordIndex;
///
/// let index = KeywordIndex::in_memory();
/// index.add_documents(&["the cat sat".to_string(), "the dog ran".to_string()]);
///
/// let results = index.retrieve("cat", 5);
/// assert_eq!(results[0].text, "the cat sat");
/// ```
pub struct KeywordIndex {
    params: Bm25Params,
    snapshot_path: Option<PathBuf>,
    inner: RwLock<IndexInner>,
}

impl KeywordIndex {
    /// Open an index backed by a snapshot file at `path`.
    ///
    /// Loads the prior corpus when the file exists and parses cleanly;
    /// otherwise logs the problem and starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::open_with_params(path, Bm25Params::default())
    }

    /// Open an index with explicit BM25 parameters.
    pub fn open_with_params(path: impl Into<PathBuf>, params: Bm25Params) -> Self {
        let path = path.into();

        let loaded = match snapshot::load(&path) {
            Ok(Some(snap)) => Some(snap),
            Ok(None) => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load keyword index snapshot, starting empty");
                None
            }
        };

        let inner = match loaded {
            Some(IndexSnapshot {
                documents,
                tokenized_docs,
            }) => {
                debug!(count = documents.len(), "loaded keyword index snapshot");
                let scorer = Bm25Scorer::build(&tokenized_docs, params);
                IndexInner {
                    documents,
                    tokenized_docs,
                    scorer,
                }
            }
            None => IndexInner {
                documents: Vec::new(),
                tokenized_docs: Vec::new(),
                scorer: Bm25Scorer::empty(params),
            },
        };

        KeywordIndex {
            params,
            snapshot_path: Some(path),
            inner: RwLock::new(inner),
        }
    }

    /// Create an index with no persistence.
    pub fn in_memory() -> Self {
        Self::in_memory_with_params(Bm25Params::default())
    }

    /// Create a non-persistent index with explicit BM25 parameters.
    pub fn in_memory_with_params(params: Bm25Params) -> Self {
        KeywordIndex {
            params,
            snapshot_path: None,
            inner: RwLock::new(IndexInner {
                documents: Vec::new(),
                tokenized_docs: Vec::new(),
                scorer: Bm25Scorer::empty(params),
            }),
        }
    }

    /// Add documents to the index.
    ///
    /// Blank strings and exact duplicates (of the corpus or earlier entries
    /// in the same batch) are filtered out; first occurrence wins and
    /// insertion order is preserved. An empty filtered set is a no-op. New
    /// documents are appended, the BM25 statistics are rebuilt over the full
    /// corpus, and the snapshot is saved. Returns the number of documents
    /// actually added.
    pub fn add_documents(&self, docs: &[String]) -> usize {
        let mut guard = self.inner.write();
        let inner = &mut *guard;

        let mut seen: AHashSet<&str> = inner.documents.iter().map(String::as_str).collect();
        let mut new_docs: Vec<String> = Vec::new();
        for doc in docs {
            if doc.trim().is_empty() {
                continue;
            }
            if seen.contains(doc.as_str()) {
                continue;
            }
            new_docs.push(doc.clone());
            seen.insert(doc.as_str());
        }

        if new_docs.is_empty() {
            debug!("no new documents to add to keyword index");
            return 0;
        }

        let added = new_docs.len();
        for doc in new_docs {
            inner.tokenized_docs.push(analysis::tokenize(&doc));
            inner.documents.push(doc);
        }
        inner.scorer = Bm25Scorer::build(&inner.tokenized_docs, self.params);

        if let Some(path) = &self.snapshot_path {
            let snap = IndexSnapshot {
                documents: inner.documents.clone(),
                tokenized_docs: inner.tokenized_docs.clone(),
            };
            if let Err(e) = snapshot::save(path, &snap) {
                warn!(path = %path.display(), error = %e, "failed to save keyword index snapshot");
            }
        }

        debug!(added, total = inner.documents.len(), "added documents to keyword index");
        added
    }

    /// Retrieve the `top_k` best-matching documents for a query.
    ///
    /// The query goes through the same tokenization as documents. An empty
    /// index or a query with no tokens yields an empty result list. Results
    /// are sorted by descending BM25 score with ties kept in insertion
    /// order.
    pub fn retrieve(&self, query: &str, top_k: usize) -> Vec<ScoredText> {
        let inner = self.inner.read();

        if inner.documents.is_empty() {
            return Vec::new();
        }
        let query_tokens = analysis::tokenize(query);
        if query_tokens.is_empty() {
            return Vec::new();
        }

        let scores = inner.scorer.scores(&query_tokens);
        let mut ranked: Vec<(usize, f32)> = scores.into_iter().enumerate().collect();
        // Stable sort keeps insertion order for equal scores.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(top_k);

        ranked
            .into_iter()
            .map(|(doc_index, score)| ScoredText {
                text: inner.documents[doc_index].clone(),
                score,
            })
            .collect()
    }

    /// Clear the corpus and delete the snapshot file.
    ///
    /// Always succeeds; a failed snapshot deletion is logged and swallowed.
    pub fn reset(&self) {
        let mut inner = self.inner.write();
        inner.documents.clear();
        inner.tokenized_docs.clear();
        inner.scorer = Bm25Scorer::empty(self.params);

        if let Some(path) = &self.snapshot_path
            && let Err(e) = snapshot::delete(path)
        {
            warn!(path = %path.display(), error = %e, "failed to delete keyword index snapshot");
        }
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.inner.read().documents.len()
    }

    /// Check whether the index holds no documents.
    pub fn is_empty(&self) -> bool {
        self.inner.read().documents.is_empty()
    }
}
