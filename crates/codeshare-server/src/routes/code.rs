use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};

use codeshare_core::models::api::{FetchCodeResponse, SaveCodeResponse};
use codeshare_core::validation::parse_save_request;

use crate::error::ApiError;
use crate::state::AppState;

pub const SAVE_FAILED: &str = "An error occurred while saving/updating the snippet.";
pub const FETCH_FAILED: &str = "An error occurred while fetching the snippet.";

/// `POST /api/code` — save a new snippet or replace the one under `uniId`.
///
/// The body is taken as raw bytes so that a missing or mistyped `code`
/// always yields the same 400, whatever the content type.
pub async fn save_code(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SaveCodeResponse>, ApiError> {
    let request = parse_save_request(&body)?;

    let id = state
        .store
        .upsert(request.uni_id, request.code)
        .await
        .map_err(|e| ApiError::internal(SAVE_FAILED, e))?;

    tracing::debug!(id = %id, "snippet saved");
    Ok(Json(SaveCodeResponse { id }))
}

/// `GET /api/code/{id}` — an unknown id answers 200 with empty code, not 404.
pub async fn fetch_code(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FetchCodeResponse>, ApiError> {
    let code = state
        .store
        .fetch(&id)
        .await
        .map_err(|e| ApiError::internal(FETCH_FAILED, e))?;

    Ok(Json(FetchCodeResponse {
        code: code.unwrap_or_default(),
    }))
}
