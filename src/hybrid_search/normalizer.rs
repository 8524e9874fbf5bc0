//! Min-max score normalization.
//!
//! Keyword scores (unbounded BM25) and vector similarities (typically
//! [-1, 1] or [0, 1]) live on different scales; rescaling each result set
//! onto [0, 1] is what makes the weighted sum in the merger fair.

/// Normalize a score set onto [0, 1] via min-max scaling.
///
/// The output is parallel to the input. A set whose finite scores are all
/// equal (including single-element sets) normalizes to 1.0 everywhere: a
/// uniform result set is treated as uniformly maximally relevant, and this
/// also sidesteps division by zero. Non-finite scores are excluded from the
/// min/max computation and normalize to 0.0; if no finite score exists, the
/// whole set normalizes to 0.0. Empty input produces empty output.
///
/// # Examples
///
/// ```
/// use xiphos::hybrid_search::normalizer::normalize;
///
/// assert_eq!(normalize(&[2.0, 6.0, 4.0]), vec![0.0, 1.0, 0.5]);
/// assert_eq!(normalize(&[3.0, 3.0]), vec![1.0, 1.0]);
/// assert!(normalize(&[]).is_empty());
/// ```
pub fn normalize(scores: &[f32]) -> Vec<f32> {
    let finite: Vec<f32> = scores.iter().copied().filter(|s| s.is_finite()).collect();

    if finite.is_empty() {
        return vec![0.0; scores.len()];
    }

    let min = finite.iter().fold(f32::INFINITY, |a, &b| a.min(b));
    let max = finite.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
    let range = max - min;

    scores
        .iter()
        .map(|&s| {
            if !s.is_finite() {
                0.0
            } else if range > 0.0 {
                (s - min) / range
            } else {
                1.0
            }
        })
        .collect()
}
