//! Factoid query classification.
//!
//! A cheap, stateless heuristic that decides whether a query asks for a
//! specific fact (favor keyword matching) or something conceptual (favor
//! vector similarity). It only biases the blend weight; false positives and
//! negatives are expected and harmless.

/// Markers that suggest a factoid-style question.
const FACTOID_KEYWORDS: [&str; 8] = [
    "who", "what", "where", "when", "name", "define", "list", "give",
];

/// Check whether a query looks like a factoid question.
///
/// Case-insensitive substring test against a fixed marker list. Substring
/// rather than token matching is intentional: it is crude but cheap, and
/// misclassification only shifts the blend weight.
///
/// # Examples
///
/// ```
/// use xiphos::hybrid_search::classifier::is_factoid;
///
/// assert!(is_factoid("What is the capital of France?"));
/// assert!(!is_factoid("explain the theory behind transformers"));
/// ```
pub fn is_factoid(query: &str) -> bool {
    let query = query.to_lowercase();
    FACTOID_KEYWORDS.iter().any(|k| query.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factoid_questions() {
        assert!(is_factoid("What is the capital of France?"));
        assert!(is_factoid("WHO wrote this paper"));
        assert!(is_factoid("define entropy"));
        assert!(is_factoid("list the supported formats"));
    }

    #[test]
    fn test_semantic_questions() {
        assert!(!is_factoid("explain the theory behind transformers"));
        assert!(!is_factoid("summarize this document"));
        assert!(!is_factoid(""));
    }

    #[test]
    fn test_substring_matching_is_intentional() {
        // "somewhat" contains "what"; the heuristic accepts this kind of
        // false positive.
        assert!(is_factoid("this is somewhat unclear"));
    }
}
