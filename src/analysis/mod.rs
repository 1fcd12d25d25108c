//! Text analysis pipeline for Relish.
//!
//! Every downstream component (frequency counting, similarity ranking,
//! sentiment scoring) consumes the same tokenization rule, so it lives
//! here as the leaf dependency of the crate.

pub mod token;
pub mod tokenizer;

pub use token::{Token, TokenStream};
pub use tokenizer::word::WordTokenizer;
pub use tokenizer::Tokenizer;
