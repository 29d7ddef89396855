// ABOUTME: Record listing and creation handlers.
// ABOUTME: GET returns the stored sequence as-is; POST validates the body and appends one record.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;
use tallybook_core::RecordInput;

use crate::app_state::SharedState;
use crate::error::ApiError;

/// GET /api/records - Every stored element in insertion order, as stored.
pub async fn list_records(State(state): State<SharedState>) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(state.store.list()?))
}

/// POST /api/records - Validate and append one record.
///
/// The body is taken as untyped JSON so that missing or mistyped fields
/// surface as 400s. A body that is not JSON at all is an internal error.
pub async fn create_record(
    State(state): State<SharedState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let input = RecordInput::from_value(body);

    state.store.append(&input)?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "message": "Record added" })),
    ))
}
