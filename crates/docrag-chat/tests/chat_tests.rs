use mockito::Matcher;
use serde_json::json;

use docrag_chat::AzureChatModel;
use docrag_core::config::ServiceCredentials;
use docrag_core::traits::ChatModel;
use docrag_core::types::ChatRequest;
use docrag_core::Error;

fn model_for(server: &mockito::Server) -> AzureChatModel {
    let credentials = ServiceCredentials {
        endpoint: server.url(),
        api_key: "secret".to_string(),
        api_version: "2024-06-01".to_string(),
    };
    AzureChatModel::new(credentials, "gpt-4o")
}

fn request() -> ChatRequest {
    ChatRequest {
        system: "Answer from context.".to_string(),
        user: "Who is the agent?".to_string(),
        temperature: 0.5,
        max_tokens: 1000,
    }
}

#[test]
fn complete_sends_both_messages_and_returns_content() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/openai/deployments/gpt-4o/chat/completions")
        .match_query(Matcher::UrlEncoded("api-version".into(), "2024-06-01".into()))
        .match_header("api-key", "secret")
        .match_body(Matcher::Json(json!({
            "messages": [
                { "role": "system", "content": "Answer from context." },
                { "role": "user", "content": "Who is the agent?" }
            ],
            "temperature": 0.5,
            "max_tokens": 1000
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "choices": [{ "index": 0, "message": { "role": "assistant", "content": "Thomas R. Castellano." } }] }).to_string())
        .create();

    let answer = model_for(&server).complete(&request()).expect("answer");
    assert_eq!(answer, "Thomas R. Castellano.");
    mock.assert();
}

#[test]
fn null_content_is_a_service_error() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/openai/deployments/gpt-4o/chat/completions")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "choices": [{ "message": { "role": "assistant", "content": null } }] }).to_string())
        .create();

    let err = model_for(&server).complete(&request()).unwrap_err();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Service { service: "chat", .. })));
}

#[test]
fn error_status_is_a_service_error() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/openai/deployments/gpt-4o/chat/completions")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body("unauthorized")
        .create();

    let err = model_for(&server).complete(&request()).unwrap_err();
    match err.downcast_ref::<Error>() {
        Some(Error::Service { status, message, .. }) => {
            assert_eq!(*status, Some(401));
            assert_eq!(message, "unauthorized");
        }
        other => panic!("expected service error, got {other:?}"),
    }
}
