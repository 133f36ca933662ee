use codeshare_core::models::snippet::{Snippet, resolve_id};

#[test]
fn resolve_id_keeps_client_id() {
    assert_eq!(resolve_id(Some("abc".to_string())), "abc");
}

#[test]
fn resolve_id_generates_when_missing_or_empty() {
    let a = resolve_id(None);
    let b = resolve_id(Some(String::new()));
    assert!(uuid::Uuid::parse_str(&a).is_ok());
    assert!(uuid::Uuid::parse_str(&b).is_ok());
    assert_ne!(a, b);
}

#[test]
fn replacing_keeps_created_at() {
    let original = Snippet::new("x1", "a");
    let created_at = original.created_at;

    let updated = Snippet::replaced(Some(original), "x1", "b".to_string());
    assert_eq!(updated.id, "x1");
    assert_eq!(updated.content, "b");
    assert_eq!(updated.created_at, created_at);
}

#[test]
fn replacing_nothing_creates() {
    let created = Snippet::replaced(None, "x1", "a".to_string());
    assert_eq!(created.id, "x1");
    assert_eq!(created.content, "a");
}

#[test]
fn snippet_document_shape() {
    let snippet = Snippet::new("x1", "print(1)");
    let value = serde_json::to_value(&snippet).unwrap();
    assert_eq!(value["id"], "x1");
    assert_eq!(value["content"], "print(1)");
    assert!(value["created_at"].is_string());

    let back: Snippet = serde_json::from_value(value).unwrap();
    assert_eq!(back, snippet);
}
