use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::snapshot::SnapshotStore;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub snapshot_store: SnapshotStore,
}

impl AppState {
    pub fn new(snapshot_store: SnapshotStore) -> Self {
        Self { snapshot_store }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Standings data unavailable")]
    DataUnavailable,

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::DataUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Standings data unavailable".to_string(),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
