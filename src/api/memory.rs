//! Memory browser endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use super::routes::AppState;
use crate::error::Result;
use crate::fallback;
use crate::memory::MemoryStore;

#[derive(Debug, Default, Deserialize)]
pub struct MemoryQuery {
    /// Relative path of a file whose content should be returned
    pub file: Option<String>,
    /// Case-insensitive file name filter
    pub search: Option<String>,
}

/// `GET /api/memory?file=<path>&search=<term>`
pub async fn get_memory(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MemoryQuery>,
) -> Json<Value> {
    match load(state.memory.as_ref(), &query).await {
        Ok(body) => Json(body),
        Err(e) => {
            warn!("Failed to read memory files: {}", e);
            Json(fallback::memory_payload(Utc::now()))
        }
    }
}

async fn load(store: &dyn MemoryStore, query: &MemoryQuery) -> Result<Value> {
    if let Some(file) = query.file.as_deref().filter(|f| !f.is_empty()) {
        let content = store.read_file(file).await?;
        return Ok(json!({ "content": content }));
    }

    let files = match query.search.as_deref().filter(|s| !s.is_empty()) {
        Some(term) => store.search_files(term).await?,
        None => store.list_files().await?,
    };
    Ok(json!({ "files": files }))
}
