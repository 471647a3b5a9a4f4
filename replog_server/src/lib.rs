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

//! HTTP surface for replog.
//!
//! Thin boundary over the two record stores: structured CRUD endpoints
//! backed by the durable repository, and the `/chat/` front door backed by
//! the in-memory conversation handler. The two never synchronize.

mod error;
mod routes;
mod state;

use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use error::ApiError;
pub use routes::router;
pub use state::AppState;

/// Bind and serve the API until the process is stopped.
pub async fn serve(addr: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    info!("replog listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
