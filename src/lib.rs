//! # Relish
//!
//! A restaurant review analytics library.
//!
//! Relish ingests review records (restaurant name + free-text review) and
//! produces three artifacts:
//!
//! - attribute-keyword word-frequency tables,
//! - the subset of reviews most relevant to a set of attribute keywords,
//!   ranked by cosine similarity,
//! - a top-3 restaurant recommendation ranked by average sentiment over
//!   that relevant subset.
//!
//! ## Features
//!
//! - Schema normalization for arbitrary tabular input
//! - Word tokenization with internal apostrophes
//! - Synonym-bucketed frequency counting
//! - TF-IDF cosine similarity with a pure term-frequency fallback
//! - Lexicon-based sentiment scoring

pub mod analysis;
pub mod cli;
pub mod error;
pub mod frequency;
pub mod pipeline;
pub mod recommend;
pub mod schema;
pub mod sentiment;
pub mod similarity;
pub mod vocabulary;

pub mod prelude {
    pub use crate::error::{RelishError, Result};
    pub use crate::frequency::{FrequencyRow, frequency_after_merge};
    pub use crate::pipeline::{AnalysisReport, run_analysis};
    pub use crate::recommend::{RecommendationRow, recommend_top3};
    pub use crate::schema::{RawTable, ReviewRecord, normalize};
    pub use crate::sentiment::sentiment_score;
    pub use crate::similarity::{ScoredReview, select_top_by_cosine};
    pub use crate::vocabulary::{Attribute, Vocabulary};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
