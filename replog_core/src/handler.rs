//! Conversation handler for the chat front door.
//!
//! One call per message: classify the intent, run the extractor when
//! logging, read or write the in-memory interaction log, and build the
//! reply text. The handler returns a `Result` so the transport layer
//! decides how failures surface; the handler itself never panics.

use chrono::Utc;
use thiserror::Error;
use tracing::debug;

use crate::extract::FieldExtractor;
use crate::intent::{Intent, KeywordClassifier, MessageClassifier};
use crate::store::{ChatInteraction, InMemoryInteractionLog, InteractionLog, StoreError};

/// Longest echo of the user's message in a log confirmation.
const SUMMARY_LIMIT: usize = 150;

/// Errors from processing a chat message.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("interaction log error: {0}")]
    Store(#[from] StoreError),
}

/// The outcome of one handled message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    /// The branch the message resolved to.
    pub intent: Intent,
    /// Formatted reply text.
    pub text: String,
}

/// Orchestrates classifier, extractor, and interaction log.
pub struct ConversationHandler<C = KeywordClassifier, L = InMemoryInteractionLog>
where
    C: MessageClassifier,
    L: InteractionLog,
{
    classifier: C,
    extractor: FieldExtractor,
    log: L,
}

impl ConversationHandler {
    /// Handler with the default keyword classifier and a fresh in-memory log.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(KeywordClassifier::new(), InMemoryInteractionLog::new())
    }
}

impl Default for ConversationHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, L> ConversationHandler<C, L>
where
    C: MessageClassifier,
    L: InteractionLog,
{
    /// Build a handler from a classifier and a log implementation.
    #[must_use]
    pub const fn with_parts(classifier: C, log: L) -> Self {
        Self {
            classifier,
            extractor: FieldExtractor::new(),
            log,
        }
    }

    /// The underlying interaction log.
    #[must_use]
    pub const fn log(&self) -> &L {
        &self.log
    }

    /// Process one message and build a reply.
    pub fn handle(&self, message: &str) -> Result<ChatReply, HandlerError> {
        let intent = self.classifier.classify(message);
        debug!("message classified as {}", intent.as_str());

        let text = match intent {
            Intent::Log => self.log_interaction(message)?,
            Intent::Search => self.search()?,
            Intent::List => self.list_all()?,
            Intent::Help => help_text(),
        };

        Ok(ChatReply { intent, text })
    }

    fn log_interaction(&self, message: &str) -> Result<String, HandlerError> {
        let id = self.log.next_id()?;
        let details = self.extractor.extract(message);
        let products = details.products_label();
        let now = Utc::now();

        let interaction = ChatInteraction {
            id,
            hcp_name: details.hcp_name.clone(),
            discussion_topics: details.topics,
            products_discussed: products.clone(),
            sentiment: details.sentiment,
            interaction_date: now.to_rfc3339(),
            created_at: now.format("%I:%M %p").to_string(),
        };
        let logged_at = interaction.created_at.clone();
        self.log.put(id, interaction)?;

        debug!("logged chat interaction {id} for {}", details.hcp_name);

        Ok(format!(
            "✅ **Interaction Logged Successfully!**\n\n\
             📋 **Interaction ID:** {id}\n\
             👨‍⚕️ **HCP:** {hcp}\n\
             💊 **Products:** {products}\n\
             😊 **Sentiment:** {sentiment}\n\
             ⏰ **Time:** {logged_at}\n\n\
             📝 **Summary:** {summary}\n\n\
             Your interaction has been recorded in the system!",
            hcp = details.hcp_name,
            sentiment = details.sentiment,
            summary = truncate_summary(message),
        ))
    }

    fn search(&self) -> Result<String, HandlerError> {
        let stored = self.log.list()?;
        if stored.is_empty() {
            return Ok("No interactions found. Please log some interactions first!".to_string());
        }

        let lines: Vec<String> = stored
            .iter()
            .map(|i| {
                format!(
                    "**ID {}:** {} - {} sentiment",
                    i.id, i.hcp_name, i.sentiment
                )
            })
            .collect();

        Ok(format!(
            "**Found {} interaction(s):**\n\n{}",
            lines.len(),
            lines.join("\n")
        ))
    }

    fn list_all(&self) -> Result<String, HandlerError> {
        let stored = self.log.list()?;
        if stored.is_empty() {
            return Ok(
                "No interactions logged yet. Start by logging your first interaction!".to_string(),
            );
        }

        let mut text = format!("**Total Interactions: {}**\n\n", stored.len());
        for i in &stored {
            text.push_str(&format!(
                "• **ID {}:** {} - {} ({})\n",
                i.id, i.hcp_name, i.products_discussed, i.sentiment
            ));
        }

        Ok(text)
    }
}

/// Echo of the input capped at [`SUMMARY_LIMIT`] characters.
fn truncate_summary(message: &str) -> String {
    if message.chars().count() > SUMMARY_LIMIT {
        let truncated: String = message.chars().take(SUMMARY_LIMIT).collect();
        format!("{truncated}...")
    } else {
        message.to_string()
    }
}

fn help_text() -> String {
    "👋 **Hello! I'm your interaction assistant.**\n\n\
     I can help you:\n\
     📝 **Log interactions** - Just describe your meeting\n   \
     Example: \"Met Dr. Smith, discussed Product X, very positive\"\n\n\
     🔍 **Search interactions** - Find past meetings\n   \
     Example: \"Search for cardiologists\"\n\n\
     📊 **List all** - See all logged interactions\n   \
     Example: \"Show all interactions\"\n\n\
     What would you like to do?"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> ConversationHandler {
        ConversationHandler::new()
    }

    fn handle(h: &ConversationHandler, message: &str) -> ChatReply {
        h.handle(message).unwrap_or_else(|_| ChatReply {
            intent: Intent::Help,
            text: String::new(),
        })
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_log_branch_increments_counter() {
        let h = handler();
        let first = handle(&h, "met dr smith");
        let second = handle(&h, "met dr jones");

        assert_eq!(first.intent, Intent::Log);
        assert!(first.text.contains("**Interaction ID:** 1"));
        assert!(second.text.contains("**Interaction ID:** 2"));
        assert_eq!(h.log().len().expect("lock should not be poisoned"), 2);
    }

    #[test]
    fn test_log_confirmation_fields() {
        let h = handler();
        let reply = handle(&h, "Met Dr. Smith, discussed Product X, very positive");

        assert!(reply.text.contains("Dr. Smith"));
        assert!(reply.text.contains("**Products:** X,"));
        assert!(reply.text.contains("**Sentiment:** Positive"));
        assert!(reply.text.contains("Met Dr. Smith, discussed Product X"));
    }

    #[test]
    fn test_log_summary_truncated_at_150_chars() {
        let h = handler();
        let long = format!("met dr smith {}", "x".repeat(200));
        let reply = handle(&h, &long);

        assert!(reply.text.contains("..."));
        // the echoed summary stops at 150 characters
        let summary_line = reply
            .text
            .lines()
            .find(|l| l.contains("**Summary:**"))
            .unwrap_or_default();
        assert!(!summary_line.contains(&"x".repeat(151)));
    }

    #[test]
    fn test_short_summary_not_truncated() {
        let h = handler();
        let reply = handle(&h, "met dr smith");
        assert!(reply.text.contains("📝 **Summary:** met dr smith\n"));
    }

    #[test]
    fn test_search_on_empty_log() {
        let h = handler();
        let reply = handle(&h, "search for cardiologists");
        assert_eq!(reply.intent, Intent::Search);
        assert_eq!(
            reply.text,
            "No interactions found. Please log some interactions first!"
        );
    }

    #[test]
    fn test_list_on_empty_log() {
        let h = handler();
        let reply = handle(&h, "show everything");
        assert_eq!(reply.intent, Intent::List);
        assert_eq!(
            reply.text,
            "No interactions logged yet. Start by logging your first interaction!"
        );
    }

    #[test]
    fn test_search_returns_every_record_ignoring_term() {
        let h = handler();
        handle(&h, "met dr smith, very positive");
        handle(&h, "met dr jones, quite concerned");

        let reply = handle(&h, "search for dr smith only");
        assert_eq!(reply.intent, Intent::Search);
        assert!(reply.text.contains("**Found 2 interaction(s):**"));
        assert!(reply.text.contains("Dr. Smith"));
        assert!(reply.text.contains("Dr. Jones"));
    }

    #[test]
    fn test_list_after_two_logs() {
        let h = handler();
        handle(&h, "met dr smith about product Alpha");
        handle(&h, "met dr jones about drug Beta");

        let reply = handle(&h, "show everything");
        assert!(reply.text.contains("**Total Interactions: 2**"));
        assert!(reply.text.contains("**ID 1:** Dr. Smith"));
        assert!(reply.text.contains("**ID 2:** Dr. Jones"));
        // insertion order
        let first = reply.text.find("**ID 1:**").unwrap_or(usize::MAX);
        let second = reply.text.find("**ID 2:**").unwrap_or(0);
        assert!(first < second);
    }

    #[test]
    fn test_tie_break_prefers_log() {
        let h = handler();
        let reply = handle(&h, "log and search");
        assert_eq!(reply.intent, Intent::Log);
    }

    #[test]
    fn test_help_fallback() {
        let h = handler();
        let reply = handle(&h, "what can you do?");
        assert_eq!(reply.intent, Intent::Help);
        assert!(reply.text.contains("Log interactions"));
    }

    #[test]
    fn test_help_does_not_touch_log() {
        let h = handler();
        handle(&h, "hello");
        assert!(h.log().is_empty().unwrap_or(false));
    }
}
