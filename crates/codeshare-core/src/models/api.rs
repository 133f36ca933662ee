//! JSON payloads of the `/api/code` endpoints.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Validated `POST /api/code` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveCodeRequest {
    pub code: String,
    pub uni_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaveCodeResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FetchCodeResponse {
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
}
