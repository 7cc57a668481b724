//! Boolean query filtering
//!
//! Queries mix free terms with AND / OR / NOT operators in any casing.
//! Matching folds left to right over a single accumulator: the accumulator
//! starts true with OR as the active operator, AND/OR swap the active
//! operator for subsequent terms, and NOT inverts only the next term.
//! There is no precedence and no grouping.

use docdex_core::IndexedDocument;

// ============================================================================
// Query tokens
// ============================================================================

/// Boolean operator recognized in query text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Subsequent terms are required
    And,
    /// Subsequent terms are alternatives
    Or,
    /// The next term is inverted
    Not,
}

/// One whitespace-separated element of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryToken {
    /// AND / OR / NOT in any casing
    Operator(Operator),
    /// Anything else, matched as a case-insensitive substring
    Term(String),
}

/// Split query text on whitespace and classify each element
///
/// Operator recognition is case-insensitive, so `and`, `AND` and `aNd` all
/// classify as [`Operator::And`] while `android` stays a term.
pub fn classify(query: &str) -> Vec<QueryToken> {
    query
        .split_whitespace()
        .map(|raw| match raw.to_uppercase().as_str() {
            "AND" => QueryToken::Operator(Operator::And),
            "OR" => QueryToken::Operator(Operator::Or),
            "NOT" => QueryToken::Operator(Operator::Not),
            _ => QueryToken::Term(raw.to_string()),
        })
        .collect()
}

/// True if any element is an operator
pub fn has_operators(tokens: &[QueryToken]) -> bool {
    tokens
        .iter()
        .any(|token| matches!(token, QueryToken::Operator(_)))
}

/// True if any element is a free term
pub fn has_terms(tokens: &[QueryToken]) -> bool {
    tokens
        .iter()
        .any(|token| matches!(token, QueryToken::Term(_)))
}

// ============================================================================
// Filtering
// ============================================================================

/// Apply the boolean filter to candidate documents
///
/// Rules, in order:
/// - A query with no free terms (empty, whitespace-only or operator-only)
///   selects nothing.
/// - A query with terms but no operators passes every candidate through
///   unchanged; ranking decides relevance.
/// - Otherwise each candidate is kept when the left-to-right fold over its
///   searchable text ends true.
///
/// Candidate order is preserved.
pub fn apply_filter(documents: Vec<IndexedDocument>, tokens: &[QueryToken]) -> Vec<IndexedDocument> {
    if !has_terms(tokens) {
        return Vec::new();
    }
    if !has_operators(tokens) {
        return documents;
    }
    documents
        .into_iter()
        .filter(|doc| matches(doc, tokens))
        .collect()
}

/// Evaluate the boolean fold for one document
fn matches(doc: &IndexedDocument, tokens: &[QueryToken]) -> bool {
    let doc_text = doc.searchable_text().to_lowercase();
    let mut include = true;
    let mut current_op = Operator::Or;
    let mut pending_not = false;
    for token in tokens {
        match token {
            QueryToken::Operator(Operator::Not) => pending_not = true,
            QueryToken::Operator(op) => current_op = *op,
            QueryToken::Term(term) => {
                let mut term_match = doc_text.contains(&term.to_lowercase());
                if pending_not {
                    term_match = !term_match;
                    pending_not = false;
                }
                include = if current_op == Operator::And {
                    include && term_match
                } else {
                    include || term_match
                };
            }
        }
    }
    include
}

// ============================================================================
// Tests
// ============================================================================
