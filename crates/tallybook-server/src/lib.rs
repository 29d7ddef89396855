// ABOUTME: HTTP server for tallybook, exposing the record store as a small JSON API.
// ABOUTME: Uses Axum with a single shared RecordStore passed to handlers through state.

pub mod api;
pub mod app_state;
pub mod auth;
pub mod config;
pub mod error;
pub mod routes;

pub use app_state::{AppState, SharedState};
pub use config::{ConfigError, TallybookConfig};
pub use error::ApiError;
pub use routes::create_router;
