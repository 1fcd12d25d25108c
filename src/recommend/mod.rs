//! Recommendation aggregation over the scored review subset.
//!
//! Averages per-review sentiment by restaurant and returns the top three.
//! Only the scored subset is consulted, never the full dataset, so the
//! recommendation reflects the reviews most relevant to the vocabulary.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::sentiment::sentiment_score;
use crate::similarity::ScoredReview;

/// One row of the recommendation table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRow {
    /// The restaurant name.
    pub restaurant: String,
    /// Arithmetic mean of sentiment scores over the restaurant's scored
    /// reviews.
    pub avg_sentiment: f64,
}

/// Recommend the top 3 restaurants by average sentiment.
///
/// Groups the scored reviews by exact restaurant name, averages each
/// group's sentiment, sorts descending, and truncates to 3 rows. Ties
/// keep first-seen grouping order. Empty input yields an empty result.
pub fn recommend_top3(scored: &[ScoredReview]) -> Vec<RecommendationRow> {
    // Grouping preserves first-seen restaurant order for stable tie-breaks.
    let mut order: Vec<String> = Vec::new();
    let mut sums: AHashMap<String, (f64, usize)> = AHashMap::new();

    for review in scored {
        let restaurant = &review.record.restaurant;
        let entry = sums.entry(restaurant.clone()).or_insert_with(|| {
            order.push(restaurant.clone());
            (0.0, 0)
        });
        entry.0 += sentiment_score(&review.record.review);
        entry.1 += 1;
    }

    let mut rows: Vec<RecommendationRow> = order
        .into_iter()
        .map(|restaurant| {
            let (sum, count) = sums[&restaurant];
            RecommendationRow {
                restaurant,
                avg_sentiment: sum / count as f64,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.avg_sentiment
            .partial_cmp(&a.avg_sentiment)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows.truncate(3);

    rows
}
