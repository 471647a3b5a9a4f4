//! Process-lifetime store for chat-logged interactions.
//!
//! Interactions captured through the chat front door live in an ordered map
//! behind a single mutex, next to a monotonic id counter. Nothing here
//! survives a restart, and nothing here ever synchronizes with the durable
//! `hcp_interactions` table — the two are separate record universes.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Mutex;
use thiserror::Error;

use crate::extract::Sentiment;

/// An interaction captured through the chat front door.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatInteraction {
    /// Monotonic per-process id, never reused, reset on restart.
    pub id: u64,
    /// Extracted clinician name or the "Unknown HCP" sentinel.
    pub hcp_name: String,
    /// The raw message text.
    pub discussion_topics: String,
    /// Comma-joined product words or the "Not specified" sentinel.
    pub products_discussed: String,
    pub sentiment: Sentiment,
    /// RFC 3339 timestamp of when the interaction was logged.
    pub interaction_date: String,
    /// Human-readable clock time, e.g. "03:45 PM".
    pub created_at: String,
}

/// Errors from the interaction log.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("interaction log lock poisoned")]
    Poisoned,
}

/// Store contract for chat-logged interactions.
///
/// Id allocation and insertion are separate steps so implementations stay
/// free to batch, shard, or persist; [`InMemoryInteractionLog::next_id`] is
/// monotonic even under concurrent callers.
pub trait InteractionLog: Send + Sync {
    /// Allocate the next interaction id.
    fn next_id(&self) -> Result<u64, StoreError>;

    /// Store an interaction under the given id.
    fn put(&self, id: u64, interaction: ChatInteraction) -> Result<(), StoreError>;

    /// All stored interactions in insertion order.
    fn list(&self) -> Result<Vec<ChatInteraction>, StoreError>;

    /// Number of stored interactions.
    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

#[derive(Debug, Default)]
struct LogInner {
    counter: u64,
    // ids are allocated in increasing order, so key order is insertion order
    entries: BTreeMap<u64, ChatInteraction>,
}

/// Mutex-guarded in-memory interaction log.
#[derive(Debug, Default)]
pub struct InMemoryInteractionLog {
    inner: Mutex<LogInner>,
}

impl InMemoryInteractionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl InteractionLog for InMemoryInteractionLog {
    fn next_id(&self) -> Result<u64, StoreError> {
        let mut inner = self.inner.lock().map_err(|_| StoreError::Poisoned)?;
        inner.counter += 1;
        Ok(inner.counter)
    }

    fn put(&self, id: u64, interaction: ChatInteraction) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().map_err(|_| StoreError::Poisoned)?;
        inner.entries.insert(id, interaction);
        Ok(())
    }

    fn list(&self) -> Result<Vec<ChatInteraction>, StoreError> {
        let inner = self.inner.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.entries.values().cloned().collect())
    }

    fn len(&self) -> Result<usize, StoreError> {
        let inner = self.inner.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interaction(id: u64, hcp: &str) -> ChatInteraction {
        ChatInteraction {
            id,
            hcp_name: hcp.to_string(),
            discussion_topics: String::new(),
            products_discussed: "Not specified".to_string(),
            sentiment: Sentiment::Neutral,
            interaction_date: String::new(),
            created_at: String::new(),
        }
    }

    #[test]
    fn test_next_id_is_monotonic() {
        let log = InMemoryInteractionLog::new();
        let first = log.next_id().unwrap_or_default();
        let second = log.next_id().unwrap_or_default();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_list_preserves_insertion_order() {
        let log = InMemoryInteractionLog::new();
        for hcp in ["Dr. One", "Dr. Two", "Dr. Three"] {
            let id = log.next_id().expect("lock should not be poisoned");
            log.put(id, interaction(id, hcp))
                .expect("lock should not be poisoned");
        }

        let stored = log.list().expect("lock should not be poisoned");
        let names: Vec<&str> = stored.iter().map(|i| i.hcp_name.as_str()).collect();
        assert_eq!(names, ["Dr. One", "Dr. Two", "Dr. Three"]);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_empty_log() {
        let log = InMemoryInteractionLog::new();
        assert!(log.is_empty().expect("lock should not be poisoned"));
        assert_eq!(log.len().expect("lock should not be poisoned"), 0);
        assert!(log.list().expect("lock should not be poisoned").is_empty());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_ids_survive_across_puts() {
        let log = InMemoryInteractionLog::new();
        let a = log.next_id().expect("lock should not be poisoned");
        let b = log.next_id().expect("lock should not be poisoned");
        // only the second allocation is stored; the first id is never reused
        log.put(b, interaction(b, "Dr. Kept"))
            .expect("lock should not be poisoned");

        assert!(a < b);
        let stored = log.list().expect("lock should not be poisoned");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, b);
    }
}
