use aws_sdk_s3::Client;
use tracing::{debug, warn};

use codeshare_core::keys;
use codeshare_core::models::snippet::{Snippet, resolve_id};

use crate::documents::{self, WriteCondition};
use crate::error::StorageError;
use crate::objects;
use crate::store::{BoxFuture, SnippetStore};

/// Conditional writes lost to a concurrent writer are retried this many times
/// in total before the upsert gives up.
const MAX_UPSERT_ATTEMPTS: u32 = 3;

/// Snippets stored as JSON documents in an S3 bucket, one object per id.
#[derive(Clone)]
pub struct S3SnippetStore {
    client: Client,
    bucket: String,
    prefix: Option<String>,
}

impl S3SnippetStore {
    pub fn new(client: Client, bucket: impl Into<String>, prefix: Option<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            prefix,
        }
    }

    fn key(&self, id: &str) -> String {
        keys::snippet_with_prefix(self.prefix.as_deref(), id)
    }

    async fn upsert_document(
        &self,
        id: Option<String>,
        content: String,
    ) -> Result<String, StorageError> {
        let id = resolve_id(id);
        let key = self.key(&id);

        let mut attempt = 1;
        loop {
            let (existing, condition) =
                match documents::load_document::<Snippet>(&self.client, &self.bucket, &key).await? {
                    Some((snippet, Some(etag))) => (Some(snippet), WriteCondition::Replace(etag)),
                    Some((snippet, None)) => (Some(snippet), WriteCondition::Overwrite),
                    None => (None, WriteCondition::Create),
                };

            let snippet = Snippet::replaced(existing, &id, content.clone());
            match documents::save_document(&self.client, &self.bucket, &key, &snippet, &condition)
                .await
            {
                Ok(etag) => {
                    debug!(key = %key, etag = %etag, "snippet saved");
                    return Ok(id);
                }
                Err(StorageError::PreconditionFailed { .. }) if attempt < MAX_UPSERT_ATTEMPTS => {
                    warn!(key = %key, attempt, "concurrent snippet write, retrying");
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn fetch_document(&self, id: &str) -> Result<Option<String>, StorageError> {
        let key = self.key(id);
        let loaded = documents::load_document::<Snippet>(&self.client, &self.bucket, &key).await?;
        Ok(loaded.map(|(snippet, _)| snippet.content))
    }
}

impl SnippetStore for S3SnippetStore {
    fn upsert(
        &self,
        id: Option<String>,
        content: String,
    ) -> BoxFuture<'_, Result<String, StorageError>> {
        Box::pin(self.upsert_document(id, content))
    }

    fn fetch<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<Option<String>, StorageError>> {
        Box::pin(self.fetch_document(id))
    }

    fn ping(&self) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(objects::head_bucket(&self.client, &self.bucket))
    }
}
