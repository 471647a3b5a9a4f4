#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Domain logic for the replog chat front door.
//!
//! Everything in this crate is a pure, synchronous text transform plus one
//! process-lifetime store: intent classification, heuristic field
//! extraction, the in-memory interaction log, and the conversation handler
//! that ties them together. No database, no network, no async.

mod extract;
mod handler;
mod intent;
mod store;

pub use extract::{ExtractedDetails, FieldExtractor, NO_PRODUCTS, Sentiment, UNKNOWN_HCP};
pub use handler::{ChatReply, ConversationHandler, HandlerError};
pub use intent::{Intent, IntentRule, KeywordClassifier, MessageClassifier};
pub use store::{ChatInteraction, InMemoryInteractionLog, InteractionLog, StoreError};
