//! Boundary validation of save-or-update requests.
//!
//! Works on raw bytes so that malformed JSON, wrong content types and wrong
//! field types all collapse into the same client error.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::models::api::SaveCodeRequest;

/// Parse a `POST /api/code` body.
///
/// `code` must be a JSON string (empty is fine). `uniId` is optional; `id` is
/// accepted as an alias.
pub fn parse_save_request(body: &[u8]) -> Result<SaveCodeRequest, ValidationError> {
    let fields = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => fields,
        _ => Map::new(),
    };

    let code = match fields.get("code") {
        Some(Value::String(code)) => code.clone(),
        _ => return Err(ValidationError::InvalidCode),
    };

    let uni_id = fields
        .get("uniId")
        .and_then(id_from_value)
        .or_else(|| fields.get("id").and_then(id_from_value));

    Ok(SaveCodeRequest { code, uni_id })
}

/// Truthy scalars become an id. Falsy values (`""`, `0`, `false`, `null`) and
/// containers mean "mint a new id".
fn id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
