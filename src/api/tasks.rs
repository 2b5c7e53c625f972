//! Task board endpoints.
//!
//! Invalid board actions are ignored rather than failed: the response carries
//! `applied: false`, the reason, and the unchanged board.

use std::str::FromStr;
use std::sync::Arc;

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::routes::AppState;
use crate::domain::{
    reduce, Applied, BoardAction, Column, ColumnDropAdapter, ColumnId, DropResult,
    ReorderSource, TaskId,
};
use crate::error::Result;

#[derive(Debug, Deserialize)]
pub struct AddTaskRequest {
    pub column: String,
    pub title: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    pub applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<TaskId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<String>,
    pub columns: Vec<Column>,
}

/// `GET /api/tasks`
pub async fn list_tasks(State(state): State<Arc<AppState>>) -> Json<Value> {
    let board = state.board.read().await;
    Json(json!({ "columns": board.list_columns() }))
}

/// `POST /api/tasks`
pub async fn add_task(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddTaskRequest>,
) -> Json<BoardResponse> {
    let action = ColumnId::from_str(&req.column).map(|column| BoardAction::AddTask {
        column,
        title: req.title,
    });
    Json(dispatch(&state, action.map(Some)).await)
}

/// `POST /api/tasks/move`
pub async fn move_task(
    State(state): State<Arc<AppState>>,
    Json(event): Json<DropResult>,
) -> Json<BoardResponse> {
    let action = ColumnDropAdapter
        .on_reorder(&event)
        .map(|mv| mv.map(BoardAction::MoveTask));
    Json(dispatch(&state, action).await)
}

/// Runs an action through the reducer under the board write lock
async fn dispatch(state: &AppState, action: Result<Option<BoardAction>>) -> BoardResponse {
    let mut board = state.board.write().await;

    let outcome = match action {
        Ok(Some(action)) => {
            let current = std::mem::take(&mut *board);
            let (next, outcome) = reduce(current, &action);
            *board = next;
            outcome
        }
        Ok(None) => Ok(Applied::Unchanged),
        Err(e) => Err(e),
    };

    let (applied, task_id, rejected) = match outcome {
        Ok(Applied::Moved) => (true, None, None),
        Ok(Applied::Added(id)) => {
            debug!("Added task {}", id);
            (true, Some(id), None)
        }
        Ok(Applied::Unchanged) => (false, None, None),
        Err(e) => {
            warn!("Ignoring board action: {}", e);
            (false, None, Some(e.to_string()))
        }
    };

    BoardResponse {
        applied,
        task_id,
        rejected,
        columns: board.list_columns().to_vec(),
    }
}
