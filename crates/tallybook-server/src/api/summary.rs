// ABOUTME: Summary handler reporting how many records exist and what they add up to.

use axum::Json;
use axum::extract::State;
use tallybook_core::Summary;

use crate::app_state::SharedState;
use crate::error::ApiError;

/// GET /api/summary - `{count, total}` over the whole store.
pub async fn get_summary(State(state): State<SharedState>) -> Result<Json<Summary>, ApiError> {
    Ok(Json(state.store.summarize()?))
}
