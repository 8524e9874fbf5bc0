//! Text analysis shared by the keyword index, the query path, and the
//! lexical reranker.
//!
//! The whole crate uses a single fixed pipeline: lowercase, replace every
//! non-alphanumeric character with a space, then split on whitespace.
//! Documents and queries must go through the same pipeline or term matching
//! silently breaks, which is why this lives in one place rather than per
//! module.

/// Tokenize text into normalized terms.
///
/// Lowercases the input, treats every non-alphanumeric character as a
/// separator, and collapses runs of separators. Returns an empty vector for
/// blank or punctuation-only input.
///
/// # Examples
///
/// ```
/// use xiphos::analysis::tokenize;
///
/// assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
/// assert!(tokenize("  ...  ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Truncate a snippet to at most `max_chars` characters, appending `"..."`
/// when truncation occurs.
///
/// Operates on character boundaries, so multi-byte text never gets split
/// mid-codepoint.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(tokenize("The CAT Sat"), vec!["the", "cat", "sat"]);
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(
            tokenize("what's the capital-of France?"),
            vec!["what", "s", "the", "capital", "of", "france"]
        );
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(tokenize("a   b\t\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tokenize_empty_and_blank() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("!?$%").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_digits() {
        assert_eq!(tokenize("BM25 since 1994"), vec!["bm25", "since", "1994"]);
    }

    #[test]
    fn test_truncate_chars_short_input_unchanged() {
        assert_eq!(truncate_chars("short", 500), "short");
    }

    #[test]
    fn test_truncate_chars_appends_ellipsis() {
        assert_eq!(truncate_chars("abcdef", 3), "abc...");
    }

    #[test]
    fn test_truncate_chars_multibyte_boundary() {
        let text = "日本語のテキスト";
        let truncated = truncate_chars(text, 3);
        assert_eq!(truncated, "日本語...");
    }
}
