//! Graph view route handler.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use kgb_core::{fetch_context, GraphEdgeView, CONTEXT_LIMIT};
use serde::{Deserialize, Serialize};

use super::error_response;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GraphParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct GraphResponse {
    pub edges: Vec<GraphEdgeView>,
}

/// GET /api/graph - Edges for the visualization, at most 50.
pub async fn get_graph(
    State(state): State<AppState>,
    Query(params): Query<GraphParams>,
) -> Result<Json<GraphResponse>, (StatusCode, String)> {
    let limit = params.limit.unwrap_or(CONTEXT_LIMIT).min(CONTEXT_LIMIT);
    let edges = fetch_context(state.store.as_ref(), limit)
        .await
        .map_err(error_response)?;
    Ok(Json(GraphResponse { edges }))
}
