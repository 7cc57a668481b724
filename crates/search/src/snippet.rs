//! Snippet extraction and term highlighting
//!
//! The highlighter scans the document body for the first query term that
//! appears anywhere in it. The snippet window spans up to [`WINDOW_BEFORE`]
//! characters before that match and [`WINDOW_AFTER`] characters from its
//! start, clamped to the body. Every occurrence of the matched term inside
//! the window is wrapped in `<strong>` markers, case-insensitively and with
//! original casing preserved. When no term matches, the first
//! [`FALLBACK_CHARS`] characters are returned unmarked.
//!
//! All offsets are counted in characters, not bytes, so multi-byte text
//! cannot split the window mid-character.

/// Characters kept before the first match
pub const WINDOW_BEFORE: usize = 50;
/// Characters kept from the start of the first match
pub const WINDOW_AFTER: usize = 150;
/// Fallback prefix length when no term matches
pub const FALLBACK_CHARS: usize = 200;

const MARK_OPEN: &str = "<strong>";
const MARK_CLOSE: &str = "</strong>";

/// Build a highlighted snippet of `content` for the given query terms
///
/// Terms are tried in order; the first one found in the body selects the
/// window and is the only term emphasized. Empty content yields an empty
/// snippet.
pub fn highlight(content: &str, terms: &[String]) -> String {
    if content.is_empty() {
        return String::new();
    }
    let chars: Vec<char> = content.chars().collect();
    let folded: Vec<char> = chars.iter().map(|&ch| fold_char(ch)).collect();

    for term in terms {
        let needle: Vec<char> = term.to_lowercase().chars().collect();
        if needle.is_empty() {
            continue;
        }
        if let Some(idx) = find_folded(&folded, &needle) {
            let start = idx.saturating_sub(WINDOW_BEFORE);
            let end = (idx + WINDOW_AFTER).min(chars.len());
            return emphasize(&chars, &folded, start, end, &needle);
        }
    }

    chars.iter().take(FALLBACK_CHARS).collect()
}

// Per-character simple fold keeps every index aligned with the original
// text. Multi-character lowercase expansions are truncated to their first
// character, which only affects case-insensitive matching of those letters.
fn fold_char(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

fn find_folded(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len()).find(|&i| haystack[i..i + needle.len()] == *needle)
}

/// Emit `chars[start..end]`, wrapping non-overlapping occurrences of the
/// needle that fit entirely inside the window
fn emphasize(chars: &[char], folded: &[char], start: usize, end: usize, needle: &[char]) -> String {
    let mut out = String::new();
    let mut i = start;
    while i < end {
        if i + needle.len() <= end && folded[i..i + needle.len()] == *needle {
            out.push_str(MARK_OPEN);
            out.extend(&chars[i..i + needle.len()]);
            out.push_str(MARK_CLOSE);
            i += needle.len();
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn strip_markers(snippet: &str) -> String {
        snippet.replace(MARK_OPEN, "").replace(MARK_CLOSE, "")
    }

    #[test]
    fn test_empty_content_yields_empty_snippet() {
        assert_eq!(highlight("", &terms(&["safety"])), "");
    }

    #[test]
    fn test_match_is_wrapped() {
        let snippet = highlight("Joint safety committees meet monthly.", &terms(&["safety"]));
        assert_eq!(snippet, "Joint <strong>safety</strong> committees meet monthly.");
    }

    #[test]
    fn test_match_preserves_original_casing() {
        let snippet = highlight("Safety first. Then safety training.", &terms(&["safety"]));
        assert_eq!(
            snippet,
            "<strong>Safety</strong> first. Then <strong>safety</strong> training."
        );
    }

    #[test]
    fn test_first_listed_term_with_a_match_wins() {
        let snippet = highlight("Wage scale and overtime pay.", &terms(&["pension", "overtime"]));
        assert!(snippet.contains("<strong>overtime</strong>"));
        assert!(!snippet.contains("<strong>pay</strong>"));
    }

    #[test]
    fn test_window_bounds_around_mid_content_match() {
        let before = "a".repeat(100);
        let after = "b".repeat(300);
        let content = format!("{before}pivot{after}");
        let snippet = highlight(&content, &terms(&["pivot"]));
        let plain = strip_markers(&snippet);
        // 50 chars of context, then the match and 145 chars after it
        assert_eq!(plain.len(), 200);
        assert!(plain.starts_with(&"a".repeat(50)));
        assert!(plain.contains("pivot"));
        assert!(plain.ends_with(&"b".repeat(145)));
    }

    #[test]
    fn test_window_clamps_at_content_start() {
        let snippet = highlight("pivot then trailing text", &terms(&["pivot"]));
        assert!(snippet.starts_with("<strong>pivot</strong>"));
    }

    #[test]
    fn test_window_clamps_at_content_end() {
        let content = format!("{}pivot", "x".repeat(60));
        let snippet = highlight(&content, &terms(&["pivot"]));
        let plain = strip_markers(&snippet);
        assert!(plain.ends_with("pivot"));
        // 50 chars of context survive; the rest of the window is clamped
        assert_eq!(plain.len(), 50 + 5);
    }

    #[test]
    fn test_adjacent_occurrences_wrap_separately() {
        let snippet = highlight("paypay", &terms(&["pay"]));
        assert_eq!(snippet, "<strong>pay</strong><strong>pay</strong>");
    }

    #[test]
    fn test_occurrence_crossing_window_edge_left_unwrapped() {
        // Second occurrence starts inside the window but extends past it
        let content = format!("pay{}pay tail", " ".repeat(146));
        let snippet = highlight(&content, &terms(&["pay"]));
        assert_eq!(snippet.matches(MARK_OPEN).count(), 1);
        assert!(snippet.ends_with(" p"));
    }

    #[test]
    fn test_no_match_falls_back_to_prefix() {
        let content = "c".repeat(400);
        let snippet = highlight(&content, &terms(&["absent"]));
        assert_eq!(snippet, "c".repeat(200));
    }

    #[test]
    fn test_no_terms_falls_back_to_prefix() {
        let snippet = highlight("short body", &[]);
        assert_eq!(snippet, "short body");
    }

    #[test]
    fn test_window_counts_characters_not_bytes() {
        let content = format!("{}safety guaranteed", "ü".repeat(60));
        let snippet = highlight(&content, &terms(&["safety"]));
        let plain = strip_markers(&snippet);
        assert!(plain.starts_with(&"ü".repeat(50)));
        assert!(plain.contains("safety"));
    }

    #[test]
    fn test_fallback_counts_characters_not_bytes() {
        let content = "é".repeat(300);
        let snippet = highlight(&content, &terms(&["absent"]));
        assert_eq!(snippet.chars().count(), 200);
    }
}
