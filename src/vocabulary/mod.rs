//! Attribute vocabulary: keyword lists per review topic.
//!
//! The vocabulary maps each of the four fixed attributes (service, food,
//! cleanliness, location) to an ordered list of lowercase keywords. Callers
//! may replace a category's list wholesale; an empty replacement keeps the
//! default for that category. The vocabulary is built once per analysis
//! request and is immutable afterward.

use std::collections::HashMap;
use std::fmt;

use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// One of the four fixed review-topic categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Service,
    Food,
    Cleanliness,
    Location,
}

impl Attribute {
    /// All attributes, in vocabulary iteration order.
    pub const ALL: [Attribute; 4] = [
        Attribute::Service,
        Attribute::Food,
        Attribute::Cleanliness,
        Attribute::Location,
    ];

    /// The attribute name as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Service => "service",
            Attribute::Food => "food",
            Attribute::Cleanliness => "cleanliness",
            Attribute::Location => "location",
        }
    }

    /// Parse an attribute from its lowercase name.
    pub fn from_name(name: &str) -> Option<Attribute> {
        match name {
            "service" => Some(Attribute::Service),
            "food" => Some(Attribute::Food),
            "cleanliness" => Some(Attribute::Cleanliness),
            "location" => Some(Attribute::Location),
            _ => None,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Default keyword lists for each attribute.
fn default_keywords(attribute: Attribute) -> &'static [&'static str] {
    match attribute {
        Attribute::Service => &[
            "service", "server", "staff", "waiter", "waitress", "host", "friendly", "rude",
            "attentive", "quick", "slow", "speed", "helpful", "courteous",
        ],
        Attribute::Food => &[
            "food",
            "taste",
            "flavor",
            "delicious",
            "tasty",
            "bland",
            "overcooked",
            "undercooked",
            "fresh",
            "portion",
            "menu",
            "dish",
            "burger",
            "pizza",
            "taco",
            "fries",
            "salad",
            "sauce",
        ],
        Attribute::Cleanliness => &[
            "clean", "dirty", "messy", "sanitary", "hygiene", "spotless", "sticky", "tidy",
            "restroom", "bathroom", "trash", "smell", "odor", "greasy",
        ],
        Attribute::Location => &[
            "location",
            "parking",
            "lot",
            "easy",
            "nearby",
            "close",
            "downtown",
            "drive-thru",
            "drive through",
            "drive thru",
            "line",
            "wait",
            "busy",
            "crowded",
            "find",
            "distance",
        ],
    }
}

/// The attribute → keyword-list mapping used to bucket tokens and build the
/// similarity query.
///
/// Every attribute from the fixed set is always present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    keywords: [Vec<String>; 4],
}

impl Vocabulary {
    /// Build the default vocabulary.
    pub fn new() -> Self {
        Self::with_overrides(&HashMap::new())
    }

    /// Build a vocabulary, replacing categories from `overrides`.
    ///
    /// An override replaces a category's list wholesale only when it is a
    /// non-empty list; an empty list keeps the default. Keys that do not
    /// name one of the four attributes are ignored.
    pub fn with_overrides(overrides: &HashMap<String, Vec<String>>) -> Self {
        let keywords = Attribute::ALL.map(|attribute| {
            match overrides.get(attribute.as_str()) {
                Some(list) if !list.is_empty() => list.clone(),
                _ => default_keywords(attribute)
                    .iter()
                    .map(|w| w.to_string())
                    .collect(),
            }
        });

        Vocabulary { keywords }
    }

    /// The keyword list for one attribute.
    pub fn keywords(&self, attribute: Attribute) -> &[String] {
        &self.keywords[attribute.index()]
    }

    /// Iterate over (attribute, keyword list) pairs in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &[String])> {
        Attribute::ALL
            .into_iter()
            .map(move |attribute| (attribute, self.keywords(attribute)))
    }

    /// The synthetic query text: all keywords across all categories joined
    /// by single spaces, in vocabulary order then list order.
    pub fn query_text(&self) -> String {
        let mut parts = Vec::new();
        for (_, words) in self.iter() {
            for word in words {
                parts.push(word.as_str());
            }
        }
        parts.join(" ")
    }

    /// Build the inverse index: keyword → owning attribute.
    ///
    /// When a keyword appears in more than one category's list, the
    /// later category in vocabulary order wins. The default lists are
    /// disjoint; collisions can only arise from custom overrides and are
    /// logged.
    pub fn inverse_index(&self) -> AHashMap<String, Attribute> {
        let mut index = AHashMap::new();
        for (attribute, words) in self.iter() {
            for word in words {
                if let Some(previous) = index.insert(word.clone(), attribute) {
                    debug!(
                        "keyword '{word}' appears under both {previous} and {attribute}; \
                         keeping {attribute}"
                    );
                }
            }
        }
        index
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a vocabulary from optional per-category overrides.
pub fn build_vocabulary(overrides: Option<&HashMap<String, Vec<String>>>) -> Vocabulary {
    match overrides {
        Some(map) => Vocabulary::with_overrides(map),
        None => Vocabulary::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_complete() {
        let vocabulary = Vocabulary::new();

        for attribute in Attribute::ALL {
            assert!(!vocabulary.keywords(attribute).is_empty());
        }
        assert_eq!(vocabulary.keywords(Attribute::Service)[0], "service");
        assert_eq!(vocabulary.keywords(Attribute::Food).len(), 18);
    }

    #[test]
    fn test_override_replaces_wholesale() {
        let mut overrides = HashMap::new();
        overrides.insert("service".to_string(), vec!["fast".into(), "kind".into()]);
        let vocabulary = Vocabulary::with_overrides(&overrides);

        assert_eq!(vocabulary.keywords(Attribute::Service), ["fast", "kind"]);
        // Other categories keep their defaults.
        assert_eq!(vocabulary.keywords(Attribute::Cleanliness)[0], "clean");
    }

    #[test]
    fn test_empty_override_keeps_default() {
        let mut overrides = HashMap::new();
        overrides.insert("service".to_string(), vec![]);
        let vocabulary = Vocabulary::with_overrides(&overrides);

        assert_eq!(
            vocabulary.keywords(Attribute::Service),
            Vocabulary::new().keywords(Attribute::Service)
        );
    }

    #[test]
    fn test_unknown_override_keys_ignored() {
        let mut overrides = HashMap::new();
        overrides.insert("ambience".to_string(), vec!["cozy".into()]);
        let vocabulary = Vocabulary::with_overrides(&overrides);

        assert_eq!(vocabulary, Vocabulary::new());
    }

    #[test]
    fn test_query_text_ordering() {
        let mut overrides = HashMap::new();
        for attribute in Attribute::ALL {
            overrides.insert(
                attribute.as_str().to_string(),
                vec![format!("{attribute}word")],
            );
        }
        let vocabulary = Vocabulary::with_overrides(&overrides);

        assert_eq!(
            vocabulary.query_text(),
            "serviceword foodword cleanlinessword locationword"
        );
    }

    #[test]
    fn test_inverse_index_later_category_wins() {
        let mut overrides = HashMap::new();
        overrides.insert("service".to_string(), vec!["shared".into()]);
        overrides.insert("location".to_string(), vec!["shared".into()]);
        let vocabulary = Vocabulary::with_overrides(&overrides);

        let index = vocabulary.inverse_index();
        assert_eq!(index.get("shared"), Some(&Attribute::Location));
    }

    #[test]
    fn test_attribute_round_trip() {
        for attribute in Attribute::ALL {
            assert_eq!(Attribute::from_name(attribute.as_str()), Some(attribute));
        }
        assert_eq!(Attribute::from_name("ambience"), None);
    }
}
