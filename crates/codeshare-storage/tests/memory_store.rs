use std::sync::Arc;

use codeshare_storage::{MemorySnippetStore, SnippetStore};

#[tokio::test]
async fn upsert_without_id_round_trips() {
    let store = MemorySnippetStore::new();

    let id = store.upsert(None, "print(1)".to_string()).await.unwrap();
    assert!(!id.is_empty());

    let content = store.fetch(&id).await.unwrap();
    assert_eq!(content.as_deref(), Some("print(1)"));
}

#[tokio::test]
async fn empty_id_gets_a_generated_one() {
    let store = MemorySnippetStore::new();

    let id = store
        .upsert(Some(String::new()), "x".to_string())
        .await
        .unwrap();
    assert!(!id.is_empty());
    assert_eq!(store.fetch(&id).await.unwrap().as_deref(), Some("x"));
}

#[tokio::test]
async fn generated_ids_are_distinct() {
    let store = MemorySnippetStore::new();

    let a = store.upsert(None, "same".to_string()).await.unwrap();
    let b = store.upsert(None, "same".to_string()).await.unwrap();
    assert_ne!(a, b);
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn upsert_with_existing_id_replaces_content() {
    let store = MemorySnippetStore::new();

    let id = store.upsert(Some("x1".into()), "a".into()).await.unwrap();
    assert_eq!(id, "x1");
    let id = store.upsert(Some("x1".into()), "b".into()).await.unwrap();
    assert_eq!(id, "x1");

    assert_eq!(store.fetch("x1").await.unwrap().as_deref(), Some("b"));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn replace_keeps_created_at() {
    let store = MemorySnippetStore::new();

    store.upsert(Some("x1".into()), "a".into()).await.unwrap();
    let first = store.get("x1").await.unwrap();

    store.upsert(Some("x1".into()), "b".into()).await.unwrap();
    let second = store.get("x1").await.unwrap();

    assert_eq!(second.content, "b");
    assert_eq!(second.created_at, first.created_at);
    assert!(second.created_at <= jiff::Timestamp::now());
}

#[tokio::test]
async fn repeated_identical_upserts_are_idempotent() {
    let store = MemorySnippetStore::new();

    for _ in 0..3 {
        store.upsert(Some("x1".into()), "same".into()).await.unwrap();
    }

    assert_eq!(store.len().await, 1);
    assert_eq!(store.fetch("x1").await.unwrap().as_deref(), Some("same"));
}

#[tokio::test]
async fn empty_content_is_stored() {
    let store = MemorySnippetStore::new();

    store.upsert(Some("blank".into()), String::new()).await.unwrap();
    assert_eq!(store.fetch("blank").await.unwrap().as_deref(), Some(""));
}

#[tokio::test]
async fn fetch_unknown_id_is_none() {
    let store = MemorySnippetStore::new();
    assert_eq!(store.fetch("does-not-exist").await.unwrap(), None);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn fetch_matches_id_exactly() {
    let store = MemorySnippetStore::new();
    store.upsert(Some("abc".into()), "x".into()).await.unwrap();

    assert_eq!(store.fetch("ABC").await.unwrap(), None);
    assert_eq!(store.fetch("ab").await.unwrap(), None);
}

#[tokio::test]
async fn concurrent_upserts_leave_one_document() {
    let store: Arc<dyn SnippetStore> = Arc::new(MemorySnippetStore::new());

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .upsert(Some("shared".into()), format!("v{i}"))
                .await
                .unwrap()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), "shared");
    }

    let content = store.fetch("shared").await.unwrap().unwrap();
    assert!(content.starts_with('v'));
}

#[tokio::test]
async fn clones_share_state() {
    let store = MemorySnippetStore::new();
    let other = store.clone();

    store.upsert(Some("x1".into()), "a".into()).await.unwrap();
    assert_eq!(other.fetch("x1").await.unwrap().as_deref(), Some("a"));
}

#[tokio::test]
async fn ping_succeeds() {
    MemorySnippetStore::new().ping().await.unwrap();
}
