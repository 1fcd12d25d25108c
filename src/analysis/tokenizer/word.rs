//! Word tokenizer: lowercase alphabetic words with internal apostrophes.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{RelishError, Result};

/// The default word pattern: a letter followed by at least one letter or
/// apostrophe. Single-letter tokens ("a", "I") never match; "don't"
/// matches as one token.
pub const WORD_PATTERN: &str = r"[a-zA-Z][a-zA-Z']+";

/// A regex-based tokenizer that extracts lowercase word tokens.
///
/// This is the one tokenization rule shared by every Relish component:
/// frequency counting, similarity ranking, and sentiment scoring all see
/// the same token stream for the same input.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl WordTokenizer {
    /// Create a new word tokenizer with the default pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(WORD_PATTERN)
    }

    /// Create a new word tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| RelishError::analysis(format!("Invalid word pattern: {e}")))?;

        Ok(WordTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Tokenize into plain lowercase term strings.
    ///
    /// Convenience for the counting and scoring stages, which only need
    /// the term text.
    pub fn terms(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|mat| mat.as_str().to_lowercase())
            .collect()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new().expect("Default word pattern should be valid")
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(
                    mat.as_str().to_lowercase(),
                    position,
                    mat.start(),
                    mat.end(),
                )
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokenizer() {
        let tokenizer = WordTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("Hello World").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);

        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 11);
    }

    #[test]
    fn test_single_letter_tokens_dropped() {
        let tokenizer = WordTokenizer::new().unwrap();
        let terms = tokenizer.terms("I ate a burger");

        assert_eq!(terms, vec!["ate", "burger"]);
    }

    #[test]
    fn test_internal_apostrophes() {
        let tokenizer = WordTokenizer::new().unwrap();
        let terms = tokenizer.terms("Don't stop");

        assert_eq!(terms, vec!["don't", "stop"]);
    }

    #[test]
    fn test_non_alphabetic_input() {
        let tokenizer = WordTokenizer::new().unwrap();
        assert!(tokenizer.terms("1234 !!").is_empty());
        assert!(tokenizer.terms("").is_empty());
    }

    #[test]
    fn test_case_folding() {
        let tokenizer = WordTokenizer::new().unwrap();
        let terms = tokenizer.terms("GREAT Food");

        assert_eq!(terms, vec!["great", "food"]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WordTokenizer::default().name(), "word");
    }
}
