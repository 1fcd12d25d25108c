//! Similarity backend trait.

use crate::error::Result;

/// Strategy interface for scoring documents against a query string.
///
/// Two implementations exist: the preferred TF-IDF backend and a raw
/// term-frequency fallback. Their numeric scores differ; both honor the
/// same ranking-quality contract (relevant documents score higher than
/// irrelevant ones), and both degrade to zero scores on degenerate input
/// instead of failing.
pub trait SimilarityBackend: Send + Sync {
    /// Score every document against the query.
    ///
    /// Returns one cosine-similarity score per document, in input order.
    fn score(&self, query: &str, documents: &[String]) -> Result<Vec<f64>>;

    /// Get the name of this backend (for debugging and configuration).
    fn name(&self) -> &'static str;
}
