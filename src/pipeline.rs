//! End-to-end analysis facade.
//!
//! Runs the whole pipeline over a raw table and bundles the three
//! artifacts into one report: the frequency table, the scored review
//! subset, and the top-3 recommendation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::frequency::{frequency_after_merge, FrequencyRow};
use crate::recommend::{recommend_top3, RecommendationRow};
use crate::schema::{normalize, RawTable};
use crate::similarity::{select_top_by_cosine, ScoredReview};
use crate::vocabulary::build_vocabulary;

/// Default number of reviews to keep in the scored subset.
pub const DEFAULT_TOP_N: usize = 200;

/// The three analysis artifacts produced from one input table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Attribute-keyword frequency table.
    pub frequency: Vec<FrequencyRow>,
    /// The top-N reviews by similarity to the vocabulary keywords.
    pub top_reviews: Vec<ScoredReview>,
    /// Top-3 restaurants by average sentiment over `top_reviews`.
    pub recommendations: Vec<RecommendationRow>,
}

/// Run the full analysis pipeline over a raw table.
///
/// Normalizes the table, builds the vocabulary (applying any overrides),
/// and produces all three artifacts. The recommendation is computed from
/// the scored subset only, not the full record set.
///
/// # Errors
///
/// Fails only when the normalizer cannot resolve the input schema; every
/// later stage is total.
pub fn run_analysis(
    table: &RawTable,
    overrides: Option<&HashMap<String, Vec<String>>>,
    top_n: usize,
) -> Result<AnalysisReport> {
    let records = normalize(table)?;
    let vocabulary = build_vocabulary(overrides);

    let frequency = frequency_after_merge(&records, &vocabulary);
    let top_reviews = select_top_by_cosine(&records, &vocabulary, top_n)?;
    let recommendations = recommend_top3(&top_reviews);

    Ok(AnalysisReport {
        frequency,
        top_reviews,
        recommendations,
    })
}
