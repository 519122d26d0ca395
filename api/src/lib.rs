//! HTTP gateway for the Radar backend
//!
//! Library half of the `radar_api` crate; `main.rs` wires it to PostgreSQL
//! and the configured notifier, tests wire it to in-memory stores.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::{configure_routes, create_app, DEFAULT_JSON_LIMIT};
pub use state::AppState;
