// ABOUTME: Route definitions for the tallybook HTTP API.
// ABOUTME: Assembles the health check and /api routes into one Axum Router with shared state.

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::SharedState;
use crate::auth::require_bearer;

/// Build the complete Axum router. When `auth_token` is set, every request
/// to /api or /api/*, routed or not, requires `Authorization: Bearer <token>`;
/// /healthz stays open.
pub fn create_router(state: SharedState, auth_token: Option<String>) -> Router {
    let mut router = Router::new()
        .route("/healthz", get(healthz))
        .route(
            "/api/records",
            get(api::records::list_records).post(api::records::create_record),
        )
        .route("/api/summary", get(api::summary::get_summary))
        .route("/api/download", get(api::download::download_records))
        .fallback(not_found);

    if let Some(token) = auth_token {
        let token: Arc<str> = Arc::from(token);
        router = router.layer(middleware::from_fn_with_state(token, require_bearer));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Health check handler.
async fn healthz() -> &'static str {
    "ok"
}
