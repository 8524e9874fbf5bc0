//! Okapi BM25 scoring over a tokenized corpus.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// BM25 tuning parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bm25Params {
    /// K1 parameter (term frequency saturation).
    pub k1: f32,
    /// B parameter (document length normalization).
    pub b: f32,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Bm25Params { k1: 1.2, b: 0.75 }
    }
}

/// BM25 scorer holding per-document and corpus-wide term statistics.
///
/// Built from the full tokenized corpus and immutable afterwards; the index
/// rebuilds it wholesale whenever documents are added. Scores are
/// monotonically non-decreasing in a query term's in-document frequency and
/// non-increasing in how common the term is across the corpus.
#[derive(Debug, Clone)]
pub struct Bm25Scorer {
    params: Bm25Params,
    /// Term frequencies per document, parallel to the corpus.
    doc_term_freqs: Vec<AHashMap<String, u32>>,
    /// Token count per document, parallel to the corpus.
    doc_lengths: Vec<u32>,
    /// Number of documents each term occurs in.
    document_frequencies: AHashMap<String, u32>,
    avg_doc_length: f32,
}

impl Bm25Scorer {
    /// Build a scorer over the given tokenized corpus.
    pub fn build(tokenized_docs: &[Vec<String>], params: Bm25Params) -> Self {
        let mut doc_term_freqs = Vec::with_capacity(tokenized_docs.len());
        let mut doc_lengths = Vec::with_capacity(tokenized_docs.len());
        let mut document_frequencies: AHashMap<String, u32> = AHashMap::new();

        for tokens in tokenized_docs {
            let mut freqs: AHashMap<String, u32> = AHashMap::new();
            for token in tokens {
                *freqs.entry(token.clone()).or_insert(0) += 1;
            }
            for term in freqs.keys() {
                *document_frequencies.entry(term.clone()).or_insert(0) += 1;
            }
            doc_lengths.push(tokens.len() as u32);
            doc_term_freqs.push(freqs);
        }

        let total_tokens: u64 = doc_lengths.iter().map(|&l| l as u64).sum();
        let avg_doc_length = if doc_lengths.is_empty() {
            0.0
        } else {
            total_tokens as f32 / doc_lengths.len() as f32
        };

        Bm25Scorer {
            params,
            doc_term_freqs,
            doc_lengths,
            document_frequencies,
            avg_doc_length,
        }
    }

    /// Build an empty scorer.
    pub fn empty(params: Bm25Params) -> Self {
        Self::build(&[], params)
    }

    /// Number of documents the scorer was built over.
    pub fn len(&self) -> usize {
        self.doc_term_freqs.len()
    }

    /// Check whether the scorer covers no documents.
    pub fn is_empty(&self) -> bool {
        self.doc_term_freqs.is_empty()
    }

    /// Score a single document against the query terms.
    ///
    /// Uses the `+1`-smoothed Okapi IDF, `ln((N - df + 0.5) / (df + 0.5) + 1)`,
    /// so scores stay non-negative even when a term appears in most of a
    /// small corpus.
    pub fn score(&self, query_terms: &[String], doc_index: usize) -> f32 {
        let Some(term_freqs) = self.doc_term_freqs.get(doc_index) else {
            return 0.0;
        };

        let total_docs = self.len() as f32;
        let doc_len = self.doc_lengths[doc_index] as f32;
        let len_norm = if self.avg_doc_length > 0.0 {
            doc_len / self.avg_doc_length
        } else {
            0.0
        };

        let mut total_score = 0.0;
        for term in query_terms {
            let tf = *term_freqs.get(term).unwrap_or(&0) as f32;
            if tf == 0.0 {
                continue;
            }

            let df = *self.document_frequencies.get(term).unwrap_or(&0) as f32;
            let idf = ((total_docs - df + 0.5) / (df + 0.5) + 1.0).ln();

            let tf_component = (tf * (self.params.k1 + 1.0))
                / (tf + self.params.k1 * (1.0 - self.params.b + self.params.b * len_norm));

            total_score += idf * tf_component;
        }

        total_score
    }

    /// Score every document against the query terms, in corpus order.
    pub fn scores(&self, query_terms: &[String]) -> Vec<f32> {
        (0..self.len())
            .map(|doc_index| self.score(query_terms, doc_index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenized(docs: &[&str]) -> Vec<Vec<String>> {
        docs.iter().map(|d| crate::analysis::tokenize(d)).collect()
    }

    #[test]
    fn test_bm25_params_default() {
        let params = Bm25Params::default();
        assert_eq!(params.k1, 1.2);
        assert_eq!(params.b, 0.75);
    }

    #[test]
    fn test_empty_scorer() {
        let scorer = Bm25Scorer::empty(Bm25Params::default());
        assert!(scorer.is_empty());
        assert_eq!(scorer.len(), 0);
        assert_eq!(scorer.score(&["term".to_string()], 0), 0.0);
    }

    #[test]
    fn test_matching_document_scores_higher() {
        let corpus = tokenized(&["the cat sat", "the dog ran"]);
        let scorer = Bm25Scorer::build(&corpus, Bm25Params::default());

        let query = vec!["cat".to_string()];
        let scores = scorer.scores(&query);

        assert_eq!(scores.len(), 2);
        assert!(scores[0] > scores[1]);
        assert_eq!(scores[1], 0.0);
    }

    #[test]
    fn test_score_monotone_in_term_frequency() {
        let corpus = tokenized(&["cat cat cat dog", "cat bird fish dog"]);
        let scorer = Bm25Scorer::build(&corpus, Bm25Params::default());

        let query = vec!["cat".to_string()];
        let scores = scorer.scores(&query);
        assert!(scores[0] > scores[1]);
    }

    #[test]
    fn test_rare_term_outweighs_common_term() {
        let corpus = tokenized(&[
            "common rare",
            "common other words",
            "common more words",
            "common final words",
        ]);
        let scorer = Bm25Scorer::build(&corpus, Bm25Params::default());

        let rare = scorer.score(&["rare".to_string()], 0);
        let common = scorer.score(&["common".to_string()], 0);
        assert!(rare > common);
    }

    #[test]
    fn test_scores_non_negative() {
        // "the" appears in every document; the smoothed IDF must not go
        // negative for it.
        let corpus = tokenized(&["the cat", "the dog", "the bird"]);
        let scorer = Bm25Scorer::build(&corpus, Bm25Params::default());

        for score in scorer.scores(&["the".to_string()]) {
            assert!(score >= 0.0);
        }
    }

    #[test]
    fn test_out_of_range_document() {
        let corpus = tokenized(&["only doc"]);
        let scorer = Bm25Scorer::build(&corpus, Bm25Params::default());
        assert_eq!(scorer.score(&["only".to_string()], 5), 0.0);
    }
}
