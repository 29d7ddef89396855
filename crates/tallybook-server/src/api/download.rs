// ABOUTME: Download handler serving the backing JSON file as an attachment.
// ABOUTME: The bytes are sent exactly as stored on disk under a fixed filename.

use axum::extract::State;
use axum::response::IntoResponse;
use http::header;

use crate::app_state::SharedState;
use crate::error::ApiError;

pub const DOWNLOAD_FILENAME: &str = "expenses.json";

/// GET /api/download - The raw store file as `expenses.json`.
pub async fn download_records(State(state): State<SharedState>) -> Result<impl IntoResponse, ApiError> {
    let content = state.store.export()?;
    let disposition = format!("attachment; filename=\"{}\"", DOWNLOAD_FILENAME);

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        content,
    ))
}
