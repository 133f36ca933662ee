use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A stored code snippet.
///
/// `id` is the natural key. `created_at` is stamped on first insert and
/// carried over unchanged when the content is later replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Snippet {
    pub id: String,
    pub content: String,
    pub created_at: jiff::Timestamp,
}

impl Snippet {
    /// A fresh snippet stamped with the current time.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            created_at: jiff::Timestamp::now(),
        }
    }

    /// The document that results from saving `content` over `existing`.
    pub fn replaced(existing: Option<Snippet>, id: &str, content: String) -> Self {
        match existing {
            Some(mut snippet) => {
                snippet.content = content;
                snippet
            }
            None => Snippet::new(id, content),
        }
    }

    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }
}

/// Resolve the id for an upsert: keep a non-empty client id, otherwise mint one.
pub fn resolve_id(id: Option<String>) -> String {
    match id {
        Some(id) if !id.is_empty() => id,
        _ => Snippet::generate_id(),
    }
}
