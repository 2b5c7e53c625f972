//! Passthrough endpoints for the agent backend.
//!
//! Backend failures are logged and masked with sample data; callers always
//! get a 200.

use std::sync::Arc;

use axum::{extract::State, response::Json};
use chrono::Utc;
use serde_json::Value;
use tracing::warn;

use super::routes::AppState;
use crate::fallback;

/// `GET /api/cron`
pub async fn get_cron(State(state): State<Arc<AppState>>) -> Json<Value> {
    match state.backend.list_cron_jobs().await {
        Ok(jobs) => Json(jobs),
        Err(e) => {
            warn!("Failed to fetch cron jobs: {}", e);
            Json(fallback::cron_payload(Utc::now()))
        }
    }
}

/// `GET /api/sessions`
pub async fn get_sessions(State(state): State<Arc<AppState>>) -> Json<Value> {
    match state.backend.list_sessions().await {
        Ok(sessions) => Json(sessions),
        Err(e) => {
            warn!("Failed to fetch sessions: {}", e);
            Json(fallback::sessions_payload(Utc::now()))
        }
    }
}
