//! Configuration for hybrid search.

use serde::{Deserialize, Serialize};

/// Configuration for the hybrid search engine.
///
/// The alpha bands implement the query-classifier bias: a factoid query has
/// its blend weight clamped into `[factoid_alpha_floor, factoid_alpha_cap]`
/// (keyword-favoring), any other query gets floored at
/// `semantic_alpha_floor` (vector-favoring). The caller's requested alpha is
/// a hint, not a guarantee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HybridSearchConfig {
    /// Lower bound of the blend weight for factoid queries.
    pub factoid_alpha_floor: f32,
    /// Upper bound of the blend weight for factoid queries.
    pub factoid_alpha_cap: f32,
    /// Lower bound of the blend weight for non-factoid queries.
    pub semantic_alpha_floor: f32,
    /// Blend weight used when the caller does not supply one.
    pub default_alpha: f32,
    /// Result count used when the caller does not supply one.
    pub default_top_k: usize,
}

impl Default for HybridSearchConfig {
    fn default() -> Self {
        Self {
            factoid_alpha_floor: 0.2,
            factoid_alpha_cap: 0.4,
            semantic_alpha_floor: 0.6,
            default_alpha: 0.5,
            default_top_k: 5,
        }
    }
}
