//! GET /api/health - storage reachability and credential presence.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde_json::json;

use crate::state::AppState;

/// GET /api/health - 200 when the database answers, 500 otherwise.
pub async fn health(State(state): State<AppState>) -> Response {
    match state.db_pool.ping().await {
        Ok(()) => {
            let groq_api = if state.model_configured() {
                "configured"
            } else {
                "missing"
            };
            Json(json!({
                "status": "healthy",
                "database": "connected",
                "groq_api": groq_api,
                "timestamp": Utc::now(),
            }))
            .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "unhealthy",
                    "error": e.to_string(),
                    "timestamp": Utc::now(),
                })),
            )
                .into_response()
        }
    }
}
