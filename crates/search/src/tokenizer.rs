//! Tokenizer for indexing and ranking
//!
//! This module provides the single tokenization rule used everywhere in the
//! engine: stored token lists, BM25 query terms and highlight terms all come
//! from `tokenize`. Changing it invalidates previously stored token lists.

/// Tokenize text into searchable terms
///
/// Rules:
/// - Lowercase the whole input first
/// - Emit maximal runs of ASCII alphanumerics `[a-z0-9]+`
/// - Everything else (punctuation, whitespace, non-ASCII letters) separates
///   tokens and is dropped
///
/// Input order is preserved and duplicates are kept, so the output doubles
/// as a term-frequency stream.
///
/// # Example
///
/// ```
/// use docdex_search::tokenizer::tokenize;
///
/// let tokens = tokenize("Overtime: Rule 7-G applies!");
/// assert_eq!(tokens, vec!["overtime", "rule", "7", "g", "applies"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in lowered.chars() {
        if ch.is_ascii_alphanumeric() {
            current.push(ch);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokens = tokenize("Hello, World!");
        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn test_tokenize_keeps_single_chars() {
        let tokens = tokenize("I am a test");
        assert_eq!(tokens, vec!["i", "am", "a", "test"]);
    }

    #[test]
    fn test_tokenize_numbers() {
        let tokens = tokenize("Section 7 paragraph 30 test123");
        assert_eq!(tokens, vec!["section", "7", "paragraph", "30", "test123"]);
    }

    #[test]
    fn test_tokenize_hyphens_split() {
        let tokens = tokenize("good-faith bargaining");
        assert_eq!(tokens, vec!["good", "faith", "bargaining"]);
    }

    #[test]
    fn test_tokenize_non_ascii_separates() {
        // Accented letters are not ASCII alphanumerics, so they split runs
        let tokens = tokenize("café naïve");
        assert_eq!(tokens, vec!["caf", "na", "ve"]);
    }

    #[test]
    fn test_tokenize_preserves_order_and_duplicates() {
        let tokens = tokenize("pay pay scale pay");
        assert_eq!(tokens, vec!["pay", "pay", "scale", "pay"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_only_punctuation() {
        assert!(tokenize("...---...").is_empty());
    }

    #[test]
    fn test_tokenize_idempotent_over_rejoined_tokens() {
        let first = tokenize("Grievance: step-2 (timelines)!");
        let second = tokenize(&first.join(" "));
        assert_eq!(first, second);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn tokens_are_nonempty_lowercase_alnum(text in ".{0,200}") {
                for token in tokenize(&text) {
                    prop_assert!(!token.is_empty());
                    prop_assert!(token.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
                }
            }

            #[test]
            fn rejoining_tokens_is_stable(text in ".{0,200}") {
                let first = tokenize(&text);
                let second = tokenize(&first.join(" "));
                prop_assert_eq!(first, second);
            }
        }
    }
}
