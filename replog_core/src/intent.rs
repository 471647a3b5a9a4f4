//! Intent classification for incoming chat messages.
//!
//! Keyword containment over the lower-cased message selects one of four
//! actions. The classifier sits behind a trait so the keyword rules can be
//! swapped for a model-backed implementation without touching the handler.

use serde::{Deserialize, Serialize};

/// The action a chat message resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Record a new interaction.
    Log,
    /// Look up past interactions.
    Search,
    /// Enumerate everything stored.
    List,
    /// Anything else falls through to usage help.
    #[default]
    Help,
}

impl Intent {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Log => "log",
            Self::Search => "search",
            Self::List => "list",
            Self::Help => "help",
        }
    }
}

/// Classifies a raw message into an [`Intent`].
pub trait MessageClassifier: Send + Sync {
    fn classify(&self, message: &str) -> Intent;
}

/// Keyword set selecting one intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentRule {
    /// The intent this rule selects.
    pub intent: Intent,
    /// Trigger keywords, matched by containment in the lower-cased message.
    pub keywords: Vec<String>,
}

impl IntentRule {
    /// Create a rule from static keyword literals.
    #[must_use]
    pub fn new(intent: Intent, keywords: &[&str]) -> Self {
        Self {
            intent,
            keywords: keywords.iter().map(ToString::to_string).collect(),
        }
    }

    /// Check whether any keyword occurs in the lower-cased message.
    #[must_use]
    pub fn matches(&self, lower: &str) -> bool {
        self.keywords.iter().any(|kw| lower.contains(kw.as_str()))
    }
}

/// Default rule set, in evaluation order. A message matching several rules
/// always resolves to the earliest one.
#[must_use]
pub fn default_rules() -> Vec<IntentRule> {
    vec![
        IntentRule::new(Intent::Log, &["log", "met", "met with", "discussed", "meeting"]),
        IntentRule::new(Intent::Search, &["search", "find"]),
        IntentRule::new(Intent::List, &["list", "all", "show"]),
    ]
}

/// Ordered keyword-rule classifier.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    rules: Vec<IntentRule>,
}

impl KeywordClassifier {
    /// Create a classifier with the default rules.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Create a classifier with a custom rule set. Rules are evaluated in
    /// the order given.
    #[must_use]
    pub const fn with_rules(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    /// Get the configured rules.
    #[must_use]
    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageClassifier for KeywordClassifier {
    fn classify(&self, message: &str) -> Intent {
        let lower = message.to_lowercase();

        for rule in &self.rules {
            if rule.matches(&lower) {
                return rule.intent;
            }
        }

        Intent::Help
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_keywords() {
        let classifier = KeywordClassifier::new();
        assert_eq!(classifier.classify("Met Dr. Smith today"), Intent::Log);
        assert_eq!(classifier.classify("log a visit"), Intent::Log);
        assert_eq!(
            classifier.classify("We discussed the new dosage"),
            Intent::Log
        );
        assert_eq!(classifier.classify("had a meeting downtown"), Intent::Log);
    }

    #[test]
    fn test_search_keywords() {
        let classifier = KeywordClassifier::new();
        assert_eq!(classifier.classify("search cardiologists"), Intent::Search);
        assert_eq!(classifier.classify("find Dr. Jones"), Intent::Search);
    }

    #[test]
    fn test_list_keywords() {
        let classifier = KeywordClassifier::new();
        assert_eq!(classifier.classify("list everything"), Intent::List);
        assert_eq!(classifier.classify("show interactions"), Intent::List);
    }

    #[test]
    fn test_fallback_is_help() {
        let classifier = KeywordClassifier::new();
        assert_eq!(classifier.classify("hello there"), Intent::Help);
        assert_eq!(classifier.classify(""), Intent::Help);
    }

    #[test]
    fn test_branch_order_tie_break() {
        let classifier = KeywordClassifier::new();
        // "log" outranks "search" and "list" regardless of position
        assert_eq!(classifier.classify("log and search"), Intent::Log);
        assert_eq!(classifier.classify("search the log"), Intent::Log);
        assert_eq!(classifier.classify("list what we discussed"), Intent::Log);
        // "search" outranks "list"
        assert_eq!(classifier.classify("search all"), Intent::Search);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let classifier = KeywordClassifier::new();
        assert_eq!(classifier.classify("MET WITH DR. LEE"), Intent::Log);
        assert_eq!(classifier.classify("SHOW ALL"), Intent::List);
    }

    #[test]
    fn test_custom_rules() {
        let classifier =
            KeywordClassifier::with_rules(vec![IntentRule::new(Intent::List, &["everything"])]);
        assert_eq!(classifier.classify("everything please"), Intent::List);
        assert_eq!(classifier.classify("met with dr lee"), Intent::Help);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_intent_serialization() {
        assert_eq!(Intent::Log.as_str(), "log");
        let json = serde_json::to_string(&Intent::Search).expect("intent should serialize");
        assert_eq!(json, "\"search\"");
    }
}
