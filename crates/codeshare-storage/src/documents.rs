use aws_sdk_s3::Client;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::objects;

/// Precondition attached to a document write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteCondition {
    /// The document must not exist yet.
    Create,
    /// The document must still carry this ETag.
    Replace(String),
    /// Last write wins.
    Overwrite,
}

/// Load a JSON document from S3. Returns the deserialized value and its ETag,
/// or `None` if no document exists at `key`.
pub async fn load_document<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<Option<(T, Option<String>)>, StorageError> {
    let output = match objects::get_object(client, bucket, key).await {
        Ok(output) => output,
        Err(StorageError::NotFound { .. }) => return Ok(None),
        Err(e) => return Err(e),
    };
    let value: T = serde_json::from_slice(&output.body)?;
    Ok(Some((value, output.etag)))
}

/// Save a JSON document to S3 under the given precondition. Returns the new ETag.
pub async fn save_document<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
    condition: &WriteCondition,
) -> Result<String, StorageError> {
    let body = serde_json::to_vec(value)?;
    let content_type = Some("application/json");
    match condition {
        WriteCondition::Create => {
            objects::put_object_if_none_match(client, bucket, key, body, content_type).await
        }
        WriteCondition::Replace(etag) => {
            objects::put_object_if_match(client, bucket, key, body, content_type, etag).await
        }
        WriteCondition::Overwrite => {
            objects::put_object(client, bucket, key, body, content_type).await
        }
    }
}
