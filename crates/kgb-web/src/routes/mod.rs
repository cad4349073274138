//! Route handlers.

pub mod dashboard;
pub mod graph;
pub mod health;
pub mod run;

use axum::http::StatusCode;
use kgb_core::KgbError;

/// Map a core error onto an HTTP status and message.
pub(crate) fn error_response(err: KgbError) -> (StatusCode, String) {
    let status = match &err {
        KgbError::EmptyInput => StatusCode::BAD_REQUEST,
        KgbError::Router(_) | KgbError::Model(_) => StatusCode::BAD_GATEWAY,
        KgbError::Store { .. } => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}
