//! Schema normalization: arbitrary tabular input to review records.
//!
//! Input tables arrive with unknown column names and ordering. The
//! normalizer resolves a restaurant-name column and a review-text column
//! from priority lists, cleans the values, and drops empty and duplicate
//! rows. The result is the canonical record set every analysis stage
//! consumes.
//!
//! # Examples
//!
//! ```
//! use relish::schema::{RawTable, normalize};
//!
//! let table = RawTable::new(
//!     vec!["Business_Name".into(), "Text".into()],
//!     vec![vec!["Joe's Diner".into(), "Great   food".into()]],
//! );
//! let records = normalize(&table).unwrap();
//! assert_eq!(records[0].restaurant, "Joe's Diner");
//! assert_eq!(records[0].review, "Great food");
//! ```

use ahash::AHashSet;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{RelishError, Result};

/// Priority list for resolving the restaurant-name column.
const NAME_COLUMNS: &[&str] = &[
    "restaurant",
    "name",
    "business",
    "business_name",
    "restaurant_name",
];

/// Priority list for resolving the review-text column.
const REVIEW_COLUMNS: &[&str] = &["review", "text", "body", "comment", "reviews"];

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// An in-memory table with arbitrary column names.
///
/// Rows shorter than the header are padded with empty strings when read,
/// so consumers may index cells by column position safely.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    /// Column names, in declaration order.
    pub columns: Vec<String>,
    /// Row-major cell values, one Vec per row.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create a new raw table from columns and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        RawTable { columns, rows }
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn cell(&self, row: &[String], index: usize) -> String {
        row.get(index).cloned().unwrap_or_default()
    }
}

/// A single normalized review record.
///
/// Both fields are trimmed and non-empty; whitespace runs in the review
/// text are collapsed to single spaces. Records are never mutated after
/// normalization.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// The restaurant name.
    pub restaurant: String,
    /// The review text.
    pub review: String,
}

impl ReviewRecord {
    /// Create a new review record.
    pub fn new<S: Into<String>, T: Into<String>>(restaurant: S, review: T) -> Self {
        ReviewRecord {
            restaurant: restaurant.into(),
            review: review.into(),
        }
    }
}

/// Resolve a column index from a priority list of lowercase names.
///
/// Returns the first priority-list entry found among the normalized column
/// names, or `fallback` when none match.
fn resolve_column(columns: &[String], priorities: &[&str], fallback: usize) -> usize {
    for wanted in priorities {
        if let Some(idx) = columns.iter().position(|c| c == wanted) {
            return idx;
        }
    }
    fallback
}

/// Normalize an arbitrary table onto the canonical {restaurant, review}
/// record set.
///
/// Column names are trimmed and lowercased before resolution. The
/// restaurant column is the first match among
/// `restaurant, name, business, business_name, restaurant_name`, falling
/// back to the first column; the review column is the first match among
/// `review, text, body, comment, reviews`, falling back to the last
/// column. Rows with an empty restaurant or review after cleaning are
/// dropped, as are exact duplicate (restaurant, review) pairs (first
/// occurrence wins).
///
/// # Errors
///
/// Returns a schema error when the table has no columns at all, since
/// neither semantic column can be located.
pub fn normalize(table: &RawTable) -> Result<Vec<ReviewRecord>> {
    if table.columns.is_empty() {
        return Err(RelishError::schema(
            "input table has no columns: could not locate a restaurant-name \
             column or a review-text column",
        ));
    }

    let columns: Vec<String> = table
        .columns
        .iter()
        .map(|c| c.trim().to_lowercase())
        .collect();

    let name_idx = resolve_column(&columns, NAME_COLUMNS, 0);
    let review_idx = resolve_column(&columns, REVIEW_COLUMNS, columns.len() - 1);

    let mut seen: AHashSet<(String, String)> = AHashSet::new();
    let mut records = Vec::new();

    for row in &table.rows {
        let restaurant = table.cell(row, name_idx).trim().to_string();
        let review = WHITESPACE_RUN
            .replace_all(table.cell(row, review_idx).trim(), " ")
            .into_owned();

        if restaurant.is_empty() || review.is_empty() {
            continue;
        }
        if !seen.insert((restaurant.clone(), review.clone())) {
            continue;
        }

        records.push(ReviewRecord { restaurant, review });
    }

    debug!(
        "normalized {} rows into {} records (name column {}, review column {})",
        table.len(),
        records.len(),
        name_idx,
        review_idx
    );

    Ok(records)
}
