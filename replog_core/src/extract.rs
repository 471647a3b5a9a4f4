//! Heuristic field extraction from free-text meeting notes.
//!
//! Pattern-matches a message into a clinician name, a product list, and a
//! sentiment. Extraction is total over any input: whatever cannot be
//! determined resolves to a sentinel value, never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel when no clinician name can be found.
pub const UNKNOWN_HCP: &str = "Unknown HCP";

/// Sentinel when no product keyword is present.
pub const NO_PRODUCTS: &str = "Not specified";

/// "dr" or "dr." followed by one or two word tokens.
#[expect(clippy::expect_used, reason = "fixed pattern, covered by tests")]
static HCP_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bdr\.?\s+([a-z]+(?:\s+[a-z]+)?)").expect("hcp name pattern"));

/// Each keyword contributes the single word following its first occurrence.
const PRODUCT_KEYWORDS: &[&str] = &["product", "medication", "drug", "treatment"];

const POSITIVE_WORDS: &[&str] = &[
    "positive",
    "great",
    "excellent",
    "enthusiastic",
    "interested",
    "happy",
    "good",
];

const NEGATIVE_WORDS: &[&str] = &[
    "negative",
    "concerned",
    "worried",
    "skeptical",
    "unhappy",
    "bad",
];

/// Overall tone of a logged interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured guess extracted from one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDetails {
    /// "Dr. <Name>" or [`UNKNOWN_HCP`].
    pub hcp_name: String,
    /// Words following product keywords, in keyword order, undeduplicated.
    pub products: Vec<String>,
    /// Positive wins over negative on any overlap.
    pub sentiment: Sentiment,
    /// The raw input text, unmodified.
    pub topics: String,
}

impl ExtractedDetails {
    /// Comma-joined product list, or the [`NO_PRODUCTS`] sentinel.
    #[must_use]
    pub fn products_label(&self) -> String {
        if self.products.is_empty() {
            NO_PRODUCTS.to_string()
        } else {
            self.products.join(", ")
        }
    }
}

/// Keyword/regex field extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldExtractor;

impl FieldExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Extract a structured guess from a raw message.
    #[must_use]
    pub fn extract(&self, message: &str) -> ExtractedDetails {
        let lower = message.to_lowercase();

        ExtractedDetails {
            hcp_name: extract_hcp_name(message),
            products: extract_products(message, &lower),
            sentiment: extract_sentiment(&lower),
            topics: message.to_string(),
        }
    }
}

fn extract_hcp_name(message: &str) -> String {
    HCP_NAME
        .captures(message)
        .and_then(|caps| caps.get(1))
        .map_or_else(
            || UNKNOWN_HCP.to_string(),
            |name| format!("Dr. {}", title_case(name.as_str())),
        )
}

fn extract_products(message: &str, lower: &str) -> Vec<String> {
    let mut products = Vec::new();

    for keyword in PRODUCT_KEYWORDS {
        if let Some(idx) = lower.find(keyword) {
            // idx comes from the lower-cased text; it lines up with the
            // original unless lowering changed byte lengths earlier in the
            // string, in which case the lower-cased tail is close enough
            let tail = message.get(idx..).unwrap_or(&lower[idx..]);
            if let Some(word) = tail.split_whitespace().nth(1) {
                products.push(word.to_string());
            }
        }
    }

    products
}

fn extract_sentiment(lower: &str) -> Sentiment {
    if POSITIVE_WORDS.iter().any(|word| lower.contains(word)) {
        Sentiment::Positive
    } else if NEGATIVE_WORDS.iter().any(|word| lower.contains(word)) {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Upper-case the first letter of each whitespace-separated word.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_full_message() {
        let extractor = FieldExtractor::new();
        let details = extractor.extract("Met Dr. Smith, discussed Product X, very positive");

        assert!(details.hcp_name.starts_with("Dr. Smith"));
        assert_eq!(details.sentiment, Sentiment::Positive);
        assert_eq!(
            details.topics,
            "Met Dr. Smith, discussed Product X, very positive"
        );
    }

    #[test]
    fn test_extract_empty_message() {
        let extractor = FieldExtractor::new();
        let details = extractor.extract("");

        assert_eq!(details.hcp_name, UNKNOWN_HCP);
        assert!(details.products.is_empty());
        assert_eq!(details.products_label(), NO_PRODUCTS);
        assert_eq!(details.sentiment, Sentiment::Neutral);
        assert_eq!(details.topics, "");
    }

    #[test]
    fn test_hcp_name_title_cased() {
        let extractor = FieldExtractor::new();
        let details = extractor.extract("met with dr. sarah lee yesterday");
        assert_eq!(details.hcp_name, "Dr. Sarah Lee");
    }

    #[test]
    fn test_hcp_name_without_period() {
        let extractor = FieldExtractor::new();
        let details = extractor.extract("quick call with dr jones");
        assert_eq!(details.hcp_name, "Dr. Jones");
    }

    #[test]
    fn test_no_hcp_name_is_sentinel() {
        let extractor = FieldExtractor::new();
        let details = extractor.extract("met the clinic manager");
        assert_eq!(details.hcp_name, UNKNOWN_HCP);
    }

    #[test]
    fn test_product_word_follows_keyword() {
        let extractor = FieldExtractor::new();
        // first occurrence of "product" is "Product", so the captured word
        // is the one after it
        let details = extractor.extract("discussed Product Alpha at length");
        assert_eq!(details.products, vec!["Alpha"]);
        assert_eq!(details.products_label(), "Alpha");
    }

    #[test]
    fn test_products_keep_keyword_order_without_dedup() {
        let extractor = FieldExtractor::new();
        let details = extractor.extract("the drug Zeta is also a treatment Zeta option");
        // keyword list order: drug before treatment
        assert_eq!(details.products, vec!["Zeta", "Zeta"]);
        assert_eq!(details.products_label(), "Zeta, Zeta");
    }

    #[test]
    fn test_keyword_with_nothing_after_contributes_nothing() {
        let extractor = FieldExtractor::new();
        let details = extractor.extract("we talked about the product");
        assert!(details.products.is_empty());
    }

    #[test]
    fn test_sentiment_positive_wins_overlap() {
        let extractor = FieldExtractor::new();
        let details = extractor.extract("great meeting but they were concerned");
        assert_eq!(details.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_sentiment_negative() {
        let extractor = FieldExtractor::new();
        let details = extractor.extract("met dr lee, they were skeptical");
        assert_eq!(details.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("smith"), "Smith");
        assert_eq!(title_case("sarah lee"), "Sarah Lee");
        assert_eq!(title_case("SMITH"), "Smith");
        assert_eq!(title_case(""), "");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_sentiment_serialization() {
        let json = serde_json::to_string(&Sentiment::Positive).expect("sentiment should serialize");
        assert_eq!(json, "\"Positive\"");
    }
}
