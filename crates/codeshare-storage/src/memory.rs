use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use codeshare_core::models::snippet::{Snippet, resolve_id};

use crate::error::StorageError;
use crate::store::{BoxFuture, SnippetStore};

/// Process-local snippet store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemorySnippetStore {
    snippets: Arc<RwLock<HashMap<String, Snippet>>>,
}

impl MemorySnippetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full stored document, including `created_at`.
    pub async fn get(&self, id: &str) -> Option<Snippet> {
        self.snippets.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.snippets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.snippets.read().await.is_empty()
    }
}

impl SnippetStore for MemorySnippetStore {
    fn upsert(
        &self,
        id: Option<String>,
        content: String,
    ) -> BoxFuture<'_, Result<String, StorageError>> {
        Box::pin(async move {
            let id = resolve_id(id);
            let mut snippets = self.snippets.write().await;
            let snippet = Snippet::replaced(snippets.remove(&id), &id, content);
            snippets.insert(id.clone(), snippet);
            Ok(id)
        })
    }

    fn fetch<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<Option<String>, StorageError>> {
        Box::pin(async move {
            let snippets = self.snippets.read().await;
            Ok(snippets.get(id).map(|s| s.content.clone()))
        })
    }

    fn ping(&self) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async { Ok(()) })
    }
}
