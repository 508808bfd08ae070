use mockito::Matcher;
use serde_json::json;
use tempfile::TempDir;

use docrag_core::config::{IndexSettings, ServiceCredentials};
use docrag_core::traits::SearchIndex;
use docrag_core::types::{HybridQuery, IndexedDocument};
use docrag_core::Error;
use docrag_search::{AzureSearchIndex, LocalIndex};

fn index_for(server: &mockito::Server) -> AzureSearchIndex {
    let credentials = ServiceCredentials {
        endpoint: server.url(),
        api_key: "admin-key".to_string(),
        api_version: "2024-07-01".to_string(),
    };
    AzureSearchIndex::new(credentials, "poa-documents", IndexSettings::default())
}

fn doc(id: &str, source: &str, index: usize, content: &str, vector: Vec<f32>) -> IndexedDocument {
    IndexedDocument {
        id: id.to_string(),
        content: content.to_string(),
        source_file: source.to_string(),
        chunk_index: index,
        content_vector: vector,
    }
}

#[test]
fn ensure_index_puts_the_definition() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("PUT", "/indexes/poa-documents")
        .match_query(Matcher::UrlEncoded("api-version".into(), "2024-07-01".into()))
        .match_header("api-key", "admin-key")
        .match_body(Matcher::PartialJson(json!({
            "name": "poa-documents",
            "semantic": { "configurations": [{ "name": "my-semantic-config" }] }
        })))
        .with_status(201)
        .with_body("{}")
        .create();

    index_for(&server).ensure_index().expect("index created");
    mock.assert();
}

#[test]
fn upload_reports_each_item_on_partial_success() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/indexes/poa-documents/docs/index")
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJson(json!({
            "value": [
                { "@search.action": "upload", "id": "a-md-chunk-0", "source_file": "a.md", "chunk_index": 0 },
                { "@search.action": "upload", "id": "a-md-chunk-1" }
            ]
        })))
        .with_status(207)
        .with_header("content-type", "application/json")
        .with_body(
            json!({ "value": [
                { "key": "a-md-chunk-0", "status": true, "errorMessage": null, "statusCode": 201 },
                { "key": "a-md-chunk-1", "status": false, "errorMessage": "bad vector", "statusCode": 400 }
            ]})
            .to_string(),
        )
        .create();

    let docs = vec![
        doc("a-md-chunk-0", "a.md", 0, "alpha", vec![0.1, 0.2]),
        doc("a-md-chunk-1", "a.md", 1, "bravo", vec![0.3]),
    ];
    let statuses = index_for(&server).upload(&docs).expect("batch accepted");

    assert_eq!(statuses.len(), 2);
    assert!(statuses[0].succeeded);
    assert_eq!(statuses[0].status_code, 201);
    assert!(!statuses[1].succeeded);
    assert_eq!(statuses[1].error_message.as_deref(), Some("bad vector"));
    mock.assert();
}

#[test]
fn upload_of_nothing_sends_nothing() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", Matcher::Any).expect(0).create();
    assert!(index_for(&server).upload(&[]).unwrap().is_empty());
    mock.assert();
}

#[test]
fn hybrid_search_sends_semantic_query_and_keeps_service_order() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/indexes/poa-documents/docs/search")
        .match_query(Matcher::UrlEncoded("api-version".into(), "2024-07-01".into()))
        .match_body(Matcher::Json(json!({
            "search": "Who is the agent?",
            "vectorQueries": [{ "kind": "vector", "vector": [0.5, 0.25], "k": 2, "fields": "content_vector" }],
            "top": 2,
            "queryType": "semantic",
            "semanticConfiguration": "my-semantic-config",
            "select": "content,source_file,chunk_index"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({ "value": [
                { "@search.score": 0.4, "@search.rerankerScore": 2.9, "content": "Agent: Thomas", "source_file": "PA.md", "chunk_index": 3 },
                { "content": "Agent: Margaret", "source_file": "IL.md", "chunk_index": 0 }
            ]})
            .to_string(),
        )
        .create();

    let query = HybridQuery { text: "Who is the agent?".to_string(), vector: vec![0.5, 0.25], top_k: 2 };
    let results = index_for(&server).hybrid_search(&query).expect("results");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].source, "PA.md");
    assert_eq!(results[0].chunk_index, Some(3));
    assert!((results[0].score - 0.4).abs() < 1e-9);
    assert_eq!(results[1].score, 0.0, "missing score reads as zero");
    mock.assert();
}

#[test]
fn hybrid_search_surfaces_service_errors() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/indexes/poa-documents/docs/search")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body("index not found")
        .create();

    let query = HybridQuery { text: "q".to_string(), vector: vec![0.0], top_k: 5 };
    let err = index_for(&server).hybrid_search(&query).unwrap_err();
    match err.downcast_ref::<Error>() {
        Some(Error::Service { status, .. }) => assert_eq!(*status, Some(404)),
        other => panic!("expected service error, got {other:?}"),
    }
}

#[test]
fn local_index_upserts_by_id_and_ranks() {
    let index = LocalIndex::new();
    let first = index
        .upload(&[
            doc("pa-0", "PA.md", 0, "The agent may sell real estate", vec![1.0, 0.0]),
            doc("il-0", "IL.md", 0, "Health care decisions", vec![0.0, 1.0]),
        ])
        .unwrap();
    assert!(first.iter().all(|s| s.succeeded && s.status_code == 201));

    let again = index.upload(&[doc("pa-0", "PA.md", 0, "The agent may sell real estate and stocks", vec![1.0, 0.0])]).unwrap();
    assert_eq!(again[0].status_code, 200, "same id replaces");
    assert_eq!(index.len(), 2);
    assert!(index.get("pa-0").unwrap().content.ends_with("stocks"));

    let query = HybridQuery { text: "agent real estate".to_string(), vector: vec![0.9, 0.1], top_k: 1 };
    let results = index.hybrid_search(&query).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].source, "PA.md");

    let all = index.hybrid_search(&HybridQuery { top_k: 10, ..query }).unwrap();
    assert_eq!(all.len(), 2);
    assert!(all[0].score >= all[1].score);
}

#[test]
fn local_index_rejects_mismatched_vectors_per_item() {
    let index = LocalIndex::new();
    let statuses = index
        .upload(&[
            doc("a", "a.md", 0, "alpha", vec![1.0, 0.0, 0.0]),
            doc("b", "a.md", 1, "bravo", vec![1.0]),
            doc("c", "a.md", 2, "charlie", vec![0.0, 0.0, 1.0]),
        ])
        .unwrap();

    assert_eq!(statuses.iter().map(|s| s.succeeded).collect::<Vec<_>>(), vec![true, false, true]);
    assert_eq!(statuses[1].status_code, 400);
    assert_eq!(index.len(), 2);
}

#[test]
fn local_index_empty_vector_does_not_fix_the_width() {
    let index = LocalIndex::new();
    let statuses = index
        .upload(&[doc("bad", "a.md", 0, "alpha", vec![]), doc("good", "a.md", 1, "bravo", vec![1.0, 0.0])])
        .unwrap();

    assert!(!statuses[0].succeeded);
    assert_eq!(statuses[0].status_code, 400);
    assert!(statuses[1].succeeded);
    assert_eq!(statuses[1].status_code, 201);
    assert_eq!(index.len(), 1);
}

#[test]
fn local_index_round_trips_through_a_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested/index.json");

    assert!(LocalIndex::open(&path).unwrap().is_empty());
    assert!(LocalIndex::load(&path).is_err());

    let index = LocalIndex::new();
    index.upload(&[doc("a", "a.md", 0, "alpha", vec![0.5, 0.5])]).unwrap();
    index.save(&path).unwrap();

    let reopened = LocalIndex::open(&path).unwrap();
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.get("a").unwrap().content_vector, vec![0.5, 0.5]);
}
