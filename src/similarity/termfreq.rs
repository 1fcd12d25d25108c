//! Raw term-frequency fallback backend.

use ahash::AHashMap;
use rayon::prelude::*;

use super::backend::SimilarityBackend;
use crate::analysis::WordTokenizer;
use crate::error::Result;

/// The fallback similarity backend: cosine similarity over raw bag-of-words
/// count vectors, with no IDF weighting.
///
/// Scores differ numerically from [`super::tfidf::TfIdfBackend`]; only the
/// ranking-quality contract is shared.
#[derive(Clone, Debug, Default)]
pub struct TermFrequencyBackend {
    tokenizer: WordTokenizer,
}

impl TermFrequencyBackend {
    /// Create a new term-frequency backend.
    pub fn new() -> Self {
        Self::default()
    }

    fn counts(&self, text: &str) -> AHashMap<String, u64> {
        let mut counts = AHashMap::new();
        for term in self.tokenizer.terms(text) {
            *counts.entry(term).or_insert(0) += 1;
        }
        counts
    }
}

impl SimilarityBackend for TermFrequencyBackend {
    fn score(&self, query: &str, documents: &[String]) -> Result<Vec<f64>> {
        let query_counts = self.counts(query);

        let scores = documents
            .par_iter()
            .map(|doc| sparse_cosine(&query_counts, &self.counts(doc)))
            .collect();

        Ok(scores)
    }

    fn name(&self) -> &'static str {
        "termfreq"
    }
}

/// Cosine similarity between two sparse count vectors.
///
/// An all-zero vector gets a norm of 1 so the score degrades to 0.0
/// instead of dividing by zero.
fn sparse_cosine(a: &AHashMap<String, u64>, b: &AHashMap<String, u64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(term, &x)| b.get(term).map(|&y| x as f64 * y as f64))
        .sum();

    let norm = |counts: &AHashMap<String, u64>| -> f64 {
        let sum: f64 = counts.values().map(|&v| (v * v) as f64).sum();
        if sum == 0.0 { 1.0 } else { sum.sqrt() }
    };

    dot / (norm(a) * norm(b))
}
