//! # Mission Control
//!
//! Backend for an operations dashboard that watches a set of AI agent
//! processes: scheduled jobs, memory files, sessions, and a kanban task board.
//!
//! Cron and session data are proxied from the agent backend; memory files are
//! read from a local directory. Either source falls back to sample data when it
//! is unavailable. The task board is held in memory and changed only through
//! [`domain::reduce`].

pub mod api;
pub mod backend;
pub mod config;
pub mod domain;
pub mod error;
pub mod fallback;
pub mod memory;

// Re-export commonly used types
pub use domain::{
    board::{Applied, Board, Column, ColumnId, MoveInstruction},
    task::{Assignee, Priority, Task, TaskId},
};
pub use error::{MissionControlError, Result};
pub use memory::MemoryStore;
