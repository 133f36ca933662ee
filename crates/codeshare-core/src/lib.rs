//! codeshare-core
//!
//! Pure domain types, request validation, and storage key conventions.
//! No AWS SDK dependency — this is the shared vocabulary of the CodeShare system.

pub mod error;
pub mod keys;
pub mod models;
pub mod validation;
