//! Lexical rerank scoring by token-set overlap.

use ahash::AHashSet;

use crate::analysis;
use crate::hybrid_search::types::ScoredText;

/// Token-set overlap between a query and a candidate text.
///
/// Computes `|query_tokens ∩ text_tokens| / (|query_tokens| + 1)`. The `+1`
/// in the denominator avoids division by zero for token-less queries and
/// dampens scores for very short ones.
pub fn overlap(query: &str, text: &str) -> f32 {
    let query_tokens: AHashSet<String> = analysis::tokenize(query).into_iter().collect();
    let text_tokens: AHashSet<String> = analysis::tokenize(text).into_iter().collect();

    let intersection = query_tokens.intersection(&text_tokens).count();
    intersection as f32 / (query_tokens.len() + 1) as f32
}

/// Score every candidate against the query by token overlap.
pub(crate) fn score(query: &str, results: &[ScoredText]) -> Vec<f32> {
    results.iter().map(|r| overlap(query, &r.text)).collect()
}
