//! Weighted-sum merging of keyword and vector contributions.

use ahash::AHashMap;

use crate::hybrid_search::types::ScoredText;

/// Merge normalized keyword and vector contributions into one ranked list.
///
/// Each input pair is `(text, normalized score)`. Keyword entries contribute
/// `(1 - alpha) * score`, vector entries contribute `alpha * score`, and the
/// accumulation map is keyed by the raw text: a passage surfaced by both
/// signals receives both contributions, which rewards cross-signal
/// agreement. This dedup-by-content policy is exact string equality only;
/// near-duplicate passages stay separate entries.
///
/// Entries with empty text are dropped. The output is sorted by descending
/// merged score with ties broken by first-seen order (keyword entries before
/// vector entries, each in branch order), then truncated to `top_k`.
pub fn merge(
    keyword: Vec<(String, f32)>,
    vector: Vec<(String, f32)>,
    alpha: f32,
    top_k: usize,
) -> Vec<ScoredText> {
    let mut combined: AHashMap<String, f32> = AHashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    let mut accumulate = |text: String, contribution: f32| {
        if text.is_empty() {
            return;
        }
        combined
            .entry(text)
            .and_modify(|score| *score += contribution)
            .or_insert_with_key(|key| {
                first_seen.push(key.clone());
                contribution
            });
    };

    for (text, score) in keyword {
        accumulate(text, (1.0 - alpha) * score);
    }
    for (text, score) in vector {
        accumulate(text, alpha * score);
    }

    let mut merged: Vec<ScoredText> = first_seen
        .into_iter()
        .map(|text| {
            let score = combined[&text];
            ScoredText { text, score }
        })
        .collect();

    // Stable sort over the first-seen sequence keeps ties deterministic.
    merged.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    merged.truncate(top_k);
    merged
}
