//! Pipeline route handler.

use axum::{extract::State, http::StatusCode, Json};
use kgb_core::PipelineOutcome;
use serde::Deserialize;

use super::error_response;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RunRequest {
    pub text: String,
}

/// POST /api/run - Route the text and generate or answer.
///
/// A write batch cut short by a lost store connection answers 503, with the
/// outcome body still carrying the committed count.
pub async fn run_text(
    State(state): State<AppState>,
    Json(req): Json<RunRequest>,
) -> Result<(StatusCode, Json<PipelineOutcome>), (StatusCode, String)> {
    let outcome = state
        .pipeline()
        .run(&req.text)
        .await
        .map_err(error_response)?;

    let status = if outcome.store_unavailable() {
        tracing::warn!("Graph store became unavailable during write batch");
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };
    Ok((status, Json(outcome)))
}
