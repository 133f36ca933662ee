use std::future::Future;
use std::pin::Pin;

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Key-addressed storage for snippet content.
///
/// One impl per backend. The HTTP layer holds an `Arc<dyn SnippetStore>`.
pub trait SnippetStore: Send + Sync {
    /// Insert or replace the snippet for `id`, minting a fresh id when `id` is
    /// absent or empty. Replacing keeps the original `created_at`.
    /// Returns the id the content was stored under.
    fn upsert(
        &self,
        id: Option<String>,
        content: String,
    ) -> BoxFuture<'_, Result<String, StorageError>>;

    /// Content stored under exactly `id`. None = never saved.
    fn fetch<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<Option<String>, StorageError>>;

    /// Cheap reachability check against the backend.
    fn ping(&self) -> BoxFuture<'_, Result<(), StorageError>>;
}
