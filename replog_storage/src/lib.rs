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

//! Durable persistence for interaction records.
//!
//! All CRUD over the `hcp_interactions` table goes through
//! [`InteractionRepository`]; deletion is always soft (the `is_active`
//! flag), and read paths exclude inactive rows.

mod repository;

pub use repository::{
    CreateInteraction, InteractionRepository, Result, StorageError, UpdateInteraction,
};
