//! Structured CRUD over durable interaction records.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use replog_entities::hcp_interactions;
use replog_storage::{CreateInteraction, UpdateInteraction};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::ApiError;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/interactions/",
            post(create_interaction).get(list_interactions),
        )
        .route(
            "/interactions/{id}",
            get(get_interaction)
                .put(update_interaction)
                .delete(delete_interaction),
        )
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

const fn default_limit() -> u64 {
    100
}

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

async fn create_interaction(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateInteraction>,
) -> Result<Json<hcp_interactions::Model>, ApiError> {
    Ok(Json(state.repo.create(input).await?))
}

async fn list_interactions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<hcp_interactions::Model>>, ApiError> {
    Ok(Json(state.repo.list(params.skip, params.limit).await?))
}

async fn get_interaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<hcp_interactions::Model>, ApiError> {
    state
        .repo
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Interaction not found"))
}

async fn update_interaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateInteraction>,
) -> Result<Json<hcp_interactions::Model>, ApiError> {
    state
        .repo
        .update(id, input)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Interaction not found"))
}

async fn delete_interaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    if state.repo.soft_delete(id).await? {
        Ok(Json(MessageResponse {
            message: "Interaction deleted successfully",
        }))
    } else {
        Err(ApiError::not_found("Interaction not found"))
    }
}
