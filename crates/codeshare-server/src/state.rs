use std::sync::Arc;

use codeshare_storage::client::build_client;
use codeshare_storage::{MemorySnippetStore, S3SnippetStore, SnippetStore};

use crate::config::{ServerConfig, StoreUrl};

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SnippetStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn SnippetStore>) -> Self {
        Self { store }
    }
}

/// Construct the snippet store named by the configuration.
///
/// Building the S3 client does not contact the service; reachability is
/// checked separately with [`SnippetStore::ping`].
pub async fn build_store(config: &ServerConfig) -> Arc<dyn SnippetStore> {
    match &config.store {
        StoreUrl::Memory => Arc::new(MemorySnippetStore::new()),
        StoreUrl::S3 { bucket, prefix } => {
            let client =
                build_client(&config.aws_region, config.aws_endpoint_url.as_deref()).await;
            Arc::new(S3SnippetStore::new(client, bucket.clone(), prefix.clone()))
        }
    }
}
