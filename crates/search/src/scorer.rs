//! Okapi BM25 ranking
//!
//! This module provides:
//! - Bm25Params for tunable ranking parameters
//! - Bm25Model fitted to one candidate corpus
//!
//! A model is fitted per search over the documents that survived boolean
//! filtering, never over the whole index. Two searches with different
//! filters therefore score the same document differently; ranking is only
//! comparable within a single result list.

use std::collections::HashMap;

// ============================================================================
// Bm25Params
// ============================================================================

/// Term frequency saturation default
pub const DEFAULT_K1: f64 = 1.5;
/// Length normalization default
pub const DEFAULT_B: f64 = 0.75;
/// Floor factor applied to negative IDF values
pub const DEFAULT_EPSILON: f64 = 0.25;

/// Tunable BM25 parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bm25Params {
    /// k1 parameter: term frequency saturation
    pub k1: f64,
    /// b parameter: document length normalization
    pub b: f64,
    /// epsilon parameter: negative IDF values are replaced with
    /// `epsilon * average_idf`
    pub epsilon: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Bm25Params {
            k1: DEFAULT_K1,
            b: DEFAULT_B,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

// ============================================================================
// Bm25Model
// ============================================================================

/// Okapi BM25 model fitted to a candidate corpus
///
/// # Formula
///
/// For each query term t and document d:
///
/// score(d) += IDF(t) * (tf * (k1 + 1)) / (tf + k1 * (1 - b + b * dl/avgdl))
///
/// Where:
/// - tf = term frequency in d
/// - dl = token count of d
/// - avgdl = average token count over the fitted corpus
/// - IDF(t) = ln(N - df + 0.5) - ln(df + 0.5), with negative values
///   floored to epsilon * average IDF
///
/// Query terms the corpus has never seen contribute nothing.
#[derive(Debug, Clone)]
pub struct Bm25Model {
    params: Bm25Params,
    corpus_size: usize,
    avgdl: f64,
    doc_freqs: Vec<HashMap<String, usize>>,
    doc_len: Vec<f64>,
    idf: HashMap<String, f64>,
}

impl Bm25Model {
    /// Fit a model to a corpus of token lists
    ///
    /// Document order is preserved: `scores` returns values in the same
    /// order the corpus was supplied here. Fitting is deterministic;
    /// refitting an identical corpus yields identical scores.
    pub fn fit<'a, I>(params: Bm25Params, corpus: I) -> Self
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let mut doc_freqs = Vec::new();
        let mut doc_len = Vec::new();
        let mut df: HashMap<String, usize> = HashMap::new();
        // Distinct terms in first-occurrence order; the IDF average is
        // accumulated in this order, not in map iteration order
        let mut term_order: Vec<String> = Vec::new();
        let mut total_tokens = 0usize;

        for tokens in corpus {
            doc_len.push(tokens.len() as f64);
            total_tokens += tokens.len();

            let mut frequencies: HashMap<String, usize> = HashMap::new();
            for token in tokens {
                let count = frequencies.entry(token.clone()).or_insert(0);
                *count += 1;
                if *count == 1 {
                    let seen = df.entry(token.clone()).or_insert(0);
                    *seen += 1;
                    if *seen == 1 {
                        term_order.push(token.clone());
                    }
                }
            }
            doc_freqs.push(frequencies);
        }

        let corpus_size = doc_len.len();
        let avgdl = if corpus_size == 0 {
            0.0
        } else {
            total_tokens as f64 / corpus_size as f64
        };
        let idf = calc_idf(params.epsilon, corpus_size, &df, &term_order);

        Bm25Model {
            params,
            corpus_size,
            avgdl,
            doc_freqs,
            doc_len,
            idf,
        }
    }

    /// Score every fitted document against the query terms
    ///
    /// Returns one score per document in corpus order. Repeated query terms
    /// contribute once per repetition.
    pub fn scores(&self, query: &[String]) -> Vec<f64> {
        let mut scores = vec![0.0; self.corpus_size];
        // A corpus where every document has an empty token list has no
        // average length to normalize against; everything scores zero.
        if self.avgdl == 0.0 {
            return scores;
        }
        let Bm25Params { k1, b, .. } = self.params;
        for term in query {
            let idf = self.idf(term);
            if idf == 0.0 {
                continue;
            }
            for (i, frequencies) in self.doc_freqs.iter().enumerate() {
                let tf = frequencies.get(term).copied().unwrap_or(0) as f64;
                if tf == 0.0 {
                    continue;
                }
                let norm = tf + k1 * (1.0 - b + b * self.doc_len[i] / self.avgdl);
                scores[i] += idf * (tf * (k1 + 1.0)) / norm;
            }
        }
        scores
    }

    /// IDF of a term, 0.0 when the corpus never saw it
    pub fn idf(&self, term: &str) -> f64 {
        self.idf.get(term).copied().unwrap_or(0.0)
    }

    /// Number of documents the model was fitted to
    pub fn corpus_size(&self) -> usize {
        self.corpus_size
    }

    /// Average document length in tokens
    pub fn avgdl(&self) -> f64 {
        self.avgdl
    }
}

/// Compute per-term IDF with the negative-value floor
///
/// `term_order` fixes the floating point summation order behind the
/// floor, so refitting the same corpus reproduces it bit for bit.
fn calc_idf(
    epsilon: f64,
    corpus_size: usize,
    df: &HashMap<String, usize>,
    term_order: &[String],
) -> HashMap<String, f64> {
    let mut idf = HashMap::with_capacity(df.len());
    let mut idf_sum = 0.0;
    let mut negative: Vec<&String> = Vec::new();
    let n = corpus_size as f64;

    for term in term_order {
        let freq = df[term] as f64;
        let value = (n - freq + 0.5).ln() - (freq + 0.5).ln();
        idf.insert(term.clone(), value);
        idf_sum += value;
        if value < 0.0 {
            negative.push(term);
        }
    }

    // Terms in more than half the corpus get a negative raw IDF. They are
    // floored to a fraction of the average so they still contribute, and
    // the floor itself can be negative when common terms dominate.
    if !idf.is_empty() {
        let floor = epsilon * (idf_sum / idf.len() as f64);
        for term in negative {
            idf.insert(term.clone(), floor);
        }
    }

    idf
}

// ============================================================================
// Tests
// ============================================================================
