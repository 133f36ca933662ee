//! codeshare-storage
//!
//! The snippet store. S3 (or any S3-compatible service) holds one JSON
//! document per snippet; an in-memory store backs tests and local runs.

pub mod client;
pub mod documents;
pub mod error;
pub mod memory;
pub mod objects;
pub mod s3;
pub mod store;

pub use memory::MemorySnippetStore;
pub use s3::S3SnippetStore;
pub use store::SnippetStore;
