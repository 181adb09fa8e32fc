use chrono::TimeZone;
use chrono::Utc;
use docstore::document::{Author, Document};
use docstore::types::{DocumentId, SearchRequest};
use serde_json::Value;

#[test]
fn golden_document_serialization() {
    let doc = Document::new("Deployment", "# Deployment\n\nThis guide...", Author::new("a1", "Ada"))
        .with_id(DocumentId::new("doc-1").unwrap())
        .with_created(Utc.timestamp_opt(1_700_000_000, 0).unwrap());

    let json_str = serde_json::to_string(&doc).unwrap();

    // Check key order by looking at the string (brittle but strict for "golden" checks)
    // "id" -> "title" -> "content" -> "author" -> "created"
    let id_pos = json_str.find("\"id\":").unwrap();
    let title_pos = json_str.find("\"title\":").unwrap();
    let content_pos = json_str.find("\"content\":").unwrap();
    let author_pos = json_str.find("\"author\":").unwrap();
    let created_pos = json_str.find("\"created\":").unwrap();

    assert!(id_pos < title_pos);
    assert!(title_pos < content_pos);
    assert!(content_pos < author_pos);
    assert!(author_pos < created_pos);

    // Ids serialize transparently, as bare strings.
    assert!(json_str.contains("\"id\":\"doc-1\""));

    // Valid JSON check
    let _parsed: Value = serde_json::from_str(&json_str).unwrap();
}

#[test]
fn document_roundtrips_through_json() {
    let doc = Document::new("Title", "Content", Author::new("a1", "Ada"))
        .with_id(DocumentId::new("doc-1").unwrap())
        .with_created(Utc.timestamp_opt(42, 0).unwrap());

    let json = serde_json::to_string(&doc).unwrap();
    let loaded: Document = serde_json::from_str(&json).unwrap();

    assert_eq!(loaded, doc);
}

#[test]
fn unsaved_document_serializes_null_id_and_created() {
    let doc = Document::new("Draft", "body", Author::new("a1", "Ada"));

    let json = serde_json::to_string(&doc).unwrap();
    assert!(json.contains("\"id\":null"));
    assert!(json.contains("\"created\":null"));

    let loaded: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, doc);
}

#[test]
fn search_request_fields_all_default() {
    // Every field is optional on the wire; a partial request deserializes
    // with the missing dimensions unconstrained.
    let request: SearchRequest = serde_json::from_str(r#"{"title_prefixes":["rep"]}"#).unwrap();

    assert_eq!(request.title_prefixes, vec!["rep"]);
    assert!(request.contains_contents.is_empty());
    assert!(request.author_ids.is_empty());
    assert!(request.created_from.is_none());
    assert!(request.created_to.is_none());

    let empty: SearchRequest = serde_json::from_str("{}").unwrap();
    assert!(empty.is_unconstrained());
}
