//! Similarity ranking: select the reviews most relevant to the vocabulary.
//!
//! A synthetic query document is built from every vocabulary keyword, each
//! review is scored against it with a cosine-similarity backend, and the
//! top-N reviews are returned in descending score order.
//!
//! Two backends implement the [`SimilarityBackend`] strategy trait: the
//! preferred TF-IDF backend and a raw term-frequency fallback. The backend
//! is chosen once per process by [`default_backend`]; the `RELISH_SIMILARITY`
//! environment variable (`tfidf` or `termfreq`) forces a specific one.

use lazy_static::lazy_static;
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schema::ReviewRecord;
use crate::vocabulary::Vocabulary;

pub mod backend;
pub mod termfreq;
pub mod tfidf;

pub use backend::SimilarityBackend;
pub use termfreq::TermFrequencyBackend;
pub use tfidf::TfIdfBackend;

/// Environment variable that forces a similarity backend.
pub const BACKEND_ENV_VAR: &str = "RELISH_SIMILARITY";

lazy_static! {
    static ref DEFAULT_BACKEND: Box<dyn SimilarityBackend> = probe_backend();
}

/// One-time capability probe for the process-wide backend.
fn probe_backend() -> Box<dyn SimilarityBackend> {
    let backend: Box<dyn SimilarityBackend> = match std::env::var(BACKEND_ENV_VAR).as_deref() {
        Ok("termfreq") => Box::new(TermFrequencyBackend::new()),
        _ => Box::new(TfIdfBackend::new()),
    };
    info!("similarity backend: {}", backend.name());
    backend
}

/// The similarity backend selected for this process.
///
/// The selection is made on first use and never changes during the
/// process's lifetime.
pub fn default_backend() -> &'static dyn SimilarityBackend {
    DEFAULT_BACKEND.as_ref()
}

/// A review record with its similarity score attached.
///
/// Scores from the TF-IDF backend fall in [0, 1]; the fallback backend
/// produces the same range for non-negative count vectors but its values
/// are not comparable bit-for-bit across backends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredReview {
    /// The underlying review record.
    #[serde(flatten)]
    pub record: ReviewRecord,
    /// Cosine similarity against the vocabulary query document.
    pub similarity: f64,
}

/// Select the `top_n` reviews most similar to the vocabulary keywords,
/// using the process-wide default backend.
pub fn select_top_by_cosine(
    records: &[ReviewRecord],
    vocabulary: &Vocabulary,
    top_n: usize,
) -> Result<Vec<ScoredReview>> {
    select_top_by_cosine_with(records, vocabulary, top_n, default_backend())
}

/// Select the `top_n` reviews most similar to the vocabulary keywords
/// with an explicit backend.
///
/// The result is sorted descending by similarity with ties preserving the
/// original record order, and truncated to `top_n` (all records are
/// returned when fewer exist). Empty input yields an empty result.
pub fn select_top_by_cosine_with(
    records: &[ReviewRecord],
    vocabulary: &Vocabulary,
    top_n: usize,
    backend: &dyn SimilarityBackend,
) -> Result<Vec<ScoredReview>> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let query = vocabulary.query_text();
    let documents: Vec<String> = records.iter().map(|r| r.review.clone()).collect();
    let scores = backend.score(&query, &documents)?;

    let mut scored: Vec<ScoredReview> = records
        .iter()
        .zip(scores)
        .map(|(record, similarity)| ScoredReview {
            record: record.clone(),
            similarity,
        })
        .collect();

    // Stable sort keeps tied reviews in input order.
    scored.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(top_n);

    Ok(scored)
}
