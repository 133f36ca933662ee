use thiserror::Error;

/// Rejection of a save-or-update request body.
///
/// The `Display` text is the exact message sent back to clients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Code content is required and must be a string.")]
    InvalidCode,
}
