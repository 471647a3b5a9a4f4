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

//! Configuration for the replog services.
//!
//! A JSON config file lives at `~/replog/config.json`; `DATABASE_URL` and
//! `GROQ_API_KEY` environment variables override the file.

mod schema;

pub use schema::{Config, DatabaseConfig, ProviderConfig, ProvidersConfig, ServerConfig};
