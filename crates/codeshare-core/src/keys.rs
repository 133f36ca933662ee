//! Storage key conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of snippet documents in the bucket.

use sha2::{Digest, Sha256};

pub const SNIPPETS_PREFIX: &str = "snippets/";

/// Home of snippets whose literal key would be too long. Literal keys all
/// start with [`SNIPPETS_PREFIX`], so the two layouts never share a key.
pub const DIGEST_PREFIX: &str = "snippets-by-digest/";

/// S3 rejects object keys longer than this many bytes.
pub const MAX_KEY_BYTES: usize = 1024;

/// Key of the document holding the snippet with the given id.
///
/// The key is derived from the id alone, so every write for an id lands on
/// the same document.
pub fn snippet(id: &str) -> String {
    snippet_with_prefix(None, id)
}

/// Same as [`snippet`], nested under an optional deployment prefix.
///
/// Ids that would push the key past [`MAX_KEY_BYTES`] are addressed by the
/// SHA-256 of the id instead; the document itself still carries the id.
pub fn snippet_with_prefix(prefix: Option<&str>, id: &str) -> String {
    let base = match prefix.map(|p| p.trim_matches('/')) {
        Some(p) if !p.is_empty() => format!("{p}/"),
        _ => String::new(),
    };

    let key = format!("{base}{SNIPPETS_PREFIX}{id}.json");
    if key.len() <= MAX_KEY_BYTES {
        return key;
    }

    let digest = hex::encode(Sha256::digest(id.as_bytes()));
    format!("{base}{DIGEST_PREFIX}{digest}.json")
}
