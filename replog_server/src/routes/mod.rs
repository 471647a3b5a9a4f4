//! Route table and the small informational endpoints.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::routing::get;
use serde::Serialize;

use crate::AppState;

mod chat;
mod interactions;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/tools/", get(tools))
        .merge(interactions::routes())
        .merge(chat::routes())
}

#[derive(Serialize)]
struct RootResponse {
    message: &'static str,
    version: &'static str,
    status: &'static str,
    endpoints: Endpoints,
}

#[derive(Serialize)]
struct Endpoints {
    interactions: &'static str,
    chat: &'static str,
    tools: &'static str,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "replog HCP interaction API",
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
        endpoints: Endpoints {
            interactions: "/interactions/",
            chat: "/chat/",
            tools: "/tools/",
        },
    })
}

#[derive(Serialize)]
struct ToolsResponse {
    features: Vec<Feature>,
}

#[derive(Serialize)]
struct Feature {
    name: &'static str,
    description: &'static str,
    example: &'static str,
}

async fn tools() -> Json<ToolsResponse> {
    Json(ToolsResponse {
        features: vec![
            Feature {
                name: "Log Interaction",
                description: "Log HCP interactions using natural language",
                example: "Met Dr. Smith, discussed Product X, positive sentiment",
            },
            Feature {
                name: "Search Interactions",
                description: "Search through logged interactions",
                example: "Search for cardiologists",
            },
            Feature {
                name: "List All",
                description: "View all logged interactions",
                example: "Show all interactions",
            },
        ],
    })
}
