//! TF-IDF cosine-similarity backend.

use ahash::AHashSet;
use rayon::prelude::*;
use std::collections::HashMap;

use super::backend::SimilarityBackend;
use crate::analysis::WordTokenizer;
use crate::error::Result;

/// The preferred similarity backend: TF-IDF vectorization over the corpus
/// {query, doc_1, ..., doc_n}, then cosine similarity between the query
/// vector and each document vector.
///
/// Term frequencies are normalized by document length and weighted with
/// smoothed IDF: `ln((N + 1) / (df + 1)) + 1`.
#[derive(Clone, Debug, Default)]
pub struct TfIdfBackend {
    tokenizer: WordTokenizer,
}

impl TfIdfBackend {
    /// Create a new TF-IDF backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the vocabulary and IDF weights over the corpus.
    fn fit(&self, corpus: &[&[String]]) -> (HashMap<String, usize>, Vec<f64>) {
        let n_documents = corpus.len();
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for tokens in corpus {
            let unique_tokens: AHashSet<&String> = tokens.iter().collect();
            for token in unique_tokens {
                *document_frequency.entry(token.clone()).or_insert(0) += 1;
                if !vocabulary.contains_key(token) {
                    let idx = vocabulary.len();
                    vocabulary.insert(token.clone(), idx);
                }
            }
        }

        let mut idf = vec![0.0; vocabulary.len()];
        for (word, &idx) in &vocabulary {
            let df = document_frequency.get(word).copied().unwrap_or(0);
            idf[idx] = ((n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0;
        }

        (vocabulary, idf)
    }

    /// Transform one tokenized document into a TF-IDF vector.
    fn transform(tokens: &[String], vocabulary: &HashMap<String, usize>, idf: &[f64]) -> Vec<f64> {
        let mut tf = vec![0.0; vocabulary.len()];
        for token in tokens {
            if let Some(&idx) = vocabulary.get(token) {
                tf[idx] += 1.0;
            }
        }

        let doc_length = tokens.len() as f64;
        if doc_length > 0.0 {
            for value in tf.iter_mut() {
                *value /= doc_length;
            }
        }

        for (idx, value) in tf.iter_mut().enumerate() {
            *value *= idf[idx];
        }

        tf
    }
}

impl SimilarityBackend for TfIdfBackend {
    fn score(&self, query: &str, documents: &[String]) -> Result<Vec<f64>> {
        if documents.is_empty() {
            return Ok(Vec::new());
        }

        let query_tokens = self.tokenizer.terms(query);
        let document_tokens: Vec<Vec<String>> = documents
            .par_iter()
            .map(|doc| self.tokenizer.terms(doc))
            .collect();

        let mut corpus: Vec<&[String]> = Vec::with_capacity(documents.len() + 1);
        corpus.push(&query_tokens);
        corpus.extend(document_tokens.iter().map(|tokens| tokens.as_slice()));

        let (vocabulary, idf) = self.fit(&corpus);
        let query_vector = Self::transform(&query_tokens, &vocabulary, &idf);

        let scores = document_tokens
            .par_iter()
            .map(|tokens| {
                let vector = Self::transform(tokens, &vocabulary, &idf);
                cosine(&query_vector, &vector)
            })
            .collect();

        Ok(scores)
    }

    fn name(&self) -> &'static str {
        "tfidf"
    }
}

/// Cosine similarity between two dense vectors of equal dimension.
///
/// Zero-norm vectors yield 0.0 instead of dividing by zero.
pub(crate) fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
