//! HTTP API for the dashboard.

mod memory;
mod proxy;
mod routes;
mod tasks;

pub use routes::{router, serve, AppState};
