//! Health route handler.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub store: bool,
    pub model: bool,
}

/// GET /api/health - Store and model reachability.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.store.query("RETURN 1").await.is_ok();
    let model = state.model.is_available().await;
    Json(HealthResponse { store, model })
}
