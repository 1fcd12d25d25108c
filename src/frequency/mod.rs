//! Attribute-keyword frequency aggregation.
//!
//! Counts how often each vocabulary keyword occurs across all review
//! texts, bucketed by the attribute that owns the keyword, and emits a
//! ranked frequency table.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::WordTokenizer;
use crate::schema::ReviewRecord;
use crate::vocabulary::{Attribute, Vocabulary};

/// One row of the frequency table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyRow {
    /// The attribute that owns the counted keyword.
    pub attribute: Attribute,
    /// The keyword, exactly as it matched in the token stream.
    pub word: String,
    /// Number of occurrences across all reviews. Always > 0.
    pub count: u64,
    /// Sum of counts for all keywords under this attribute.
    pub attribute_total: u64,
}

/// Count vocabulary-keyword occurrences per attribute across all reviews.
///
/// Tokens are matched against the vocabulary's inverse index (exact string
/// match); keywords with zero occurrences are omitted. Rows are sorted by
/// attribute name ascending, then count descending, ties broken
/// alphabetically by word. `attribute_total` is computed from the same
/// counters that produce the rows, so it always equals the sum of the
/// emitted counts for that attribute.
pub fn frequency_after_merge(records: &[ReviewRecord], vocabulary: &Vocabulary) -> Vec<FrequencyRow> {
    let tokenizer = WordTokenizer::default();
    let index = vocabulary.inverse_index();

    let mut buckets: AHashMap<Attribute, AHashMap<String, u64>> = AHashMap::new();
    for record in records {
        for term in tokenizer.terms(&record.review) {
            if let Some(&attribute) = index.get(&term) {
                *buckets.entry(attribute).or_default().entry(term).or_insert(0) += 1;
            }
        }
    }

    let mut attributes = Attribute::ALL;
    attributes.sort_by_key(|a| a.as_str());

    let mut rows = Vec::new();
    for attribute in attributes {
        let Some(counter) = buckets.get(&attribute) else {
            continue;
        };

        let total: u64 = counter.values().sum();

        let mut words: Vec<(&String, &u64)> = counter.iter().collect();
        words.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        for (word, &count) in words {
            rows.push(FrequencyRow {
                attribute,
                word: word.clone(),
                count,
                attribute_total: total,
            });
        }
    }

    rows
}
