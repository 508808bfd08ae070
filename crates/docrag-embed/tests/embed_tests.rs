use mockito::Matcher;

use docrag_core::config::{ServiceCredentials, Settings};
use docrag_core::traits::Embedder;
use docrag_core::Error;
use docrag_embed::{get_default_embedder, AzureOpenAiEmbedder, FakeEmbedder};

fn credentials(endpoint: String) -> ServiceCredentials {
    ServiceCredentials { endpoint, api_key: "secret".to_string(), api_version: "2024-06-01".to_string() }
}

fn embedding_body(values: &[f32]) -> String {
    serde_json::json!({ "data": [{ "index": 0, "embedding": values }] }).to_string()
}

#[test]
fn fake_embedder_shapes_and_determinism() {
    // Force fake embedder to avoid touching the network
    std::env::set_var("APP_USE_FAKE_EMBEDDINGS", "1");

    let mut settings = Settings::default();
    settings.index.dimensions = 64;
    let embedder = get_default_embedder(&settings).expect("embedder");
    let v1 = embedder.embed_text("hello world").expect("embed");
    let v2 = embedder.embed_text("hello world").expect("embed");

    assert_eq!(embedder.dim(), 64);
    assert_eq!(v1.len(), 64, "embedding dim follows index.dimensions");

    // Norm approximately 1.0
    let norm: f32 = v1.iter().map(|x| x * x).sum::<f32>().sqrt();
    assert!((norm - 1.0).abs() <= 1e-3, "vector is L2-normalized (norm={norm})");

    // Deterministic for same input
    for (a, b) in v1.iter().zip(v2.iter()) { assert!((a - b).abs() <= 1e-6); }
}

#[test]
fn fake_embedder_puts_shared_tokens_closer() {
    let embedder = FakeEmbedder::new(256);
    let q = embedder.embed_text("agent powers").unwrap();
    let near = embedder.embed_text("the agent has broad powers").unwrap();
    let far = embedder.embed_text("unrelated grocery list").unwrap();
    let dot = |a: &[f32], b: &[f32]| a.iter().zip(b).map(|(x, y)| x * y).sum::<f32>();
    assert!(dot(&q, &near) > dot(&q, &far));
}

#[test]
fn azure_embedder_posts_input_and_reads_first_vector() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/openai/deployments/text-embedding/embeddings")
        .match_query(Matcher::UrlEncoded("api-version".into(), "2024-06-01".into()))
        .match_header("api-key", "secret")
        .match_body(Matcher::Json(serde_json::json!({ "input": "Who is the agent?" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(embedding_body(&[0.1, 0.2, 0.3]))
        .create();

    let embedder = AzureOpenAiEmbedder::new(credentials(server.url()), "text-embedding", 3);
    let v = embedder.embed_text("Who is the agent?").expect("embedding");

    assert_eq!(v, vec![0.1, 0.2, 0.3]);
    mock.assert();
}

#[test]
fn azure_embedder_surfaces_error_status() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/openai/deployments/text-embedding/embeddings")
        .match_query(Matcher::Any)
        .with_status(429)
        .with_body("rate limited")
        .create();

    let embedder = AzureOpenAiEmbedder::new(credentials(format!("{}/", server.url())), "text-embedding", 3);
    let err = embedder.embed_text("hello").unwrap_err();

    match err.downcast_ref::<Error>() {
        Some(Error::Service { status, message, .. }) => {
            assert_eq!(*status, Some(429));
            assert!(message.contains("rate limited"));
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[test]
fn azure_embedder_rejects_wrong_width() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/openai/deployments/text-embedding/embeddings")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(embedding_body(&[0.5, 0.5]))
        .create();

    let embedder = AzureOpenAiEmbedder::new(credentials(server.url()), "text-embedding", 1536);
    let err = embedder.embed_text("hello").unwrap_err();

    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::DimensionMismatch { expected: 1536, actual: 2 })
    ));
}
