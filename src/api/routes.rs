//! Router and shared state.

use std::sync::Arc;

use axum::{
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::backend::{AgentBackend, HttpBackend};
use crate::config::Config;
use crate::domain::Board;
use crate::memory::{FsMemoryStore, MemoryStore};

use super::{memory, proxy, tasks};

/// Shared application state.
pub struct AppState {
    /// Agent backend queried for cron jobs and sessions
    pub backend: Arc<dyn AgentBackend>,
    /// Memory file source
    pub memory: Arc<dyn MemoryStore>,
    /// In-memory task board; lost on restart
    pub board: RwLock<Board>,
}

impl AppState {
    /// Builds state wired to the configured backend and memory directory.
    pub fn from_config(config: &Config) -> Self {
        let backend = Arc::new(HttpBackend::new(
            &config.backend.base_url,
            &config.backend.token,
        ));
        let memory = Arc::new(FsMemoryStore::new(&config.memory_dir));
        Self::new(backend, memory)
    }

    pub fn new(backend: Arc<dyn AgentBackend>, memory: Arc<dyn MemoryStore>) -> Self {
        Self {
            backend,
            memory,
            board: RwLock::new(Board::with_sample_tasks()),
        }
    }
}

/// Builds the API router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/cron", get(proxy::get_cron))
        .route("/api/sessions", get(proxy::get_sessions))
        .route("/api/memory", get(memory::get_memory))
        .route("/api/tasks", get(tasks::list_tasks).post(tasks::add_task))
        .route("/api/tasks/move", post(tasks::move_task))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    info!(
        "Agent backend at {}, memory directory {}",
        config.backend.base_url,
        config.memory_dir.display()
    );

    let state = Arc::new(AppState::from_config(&config));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
