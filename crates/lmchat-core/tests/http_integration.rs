//! End-to-end tests against a mock HTTP server

use lmchat_core::llm::client::classifier::classify_transport_error;
use lmchat_core::llm::client::TransportError;
use lmchat_core::{
    ChatConfig, ChatRequest, ClientOptions, FailureCode, LlmClient, ProviderKind, ask,
};
use reqwest::Client;
use serde_json::{Value, json};
use std::net::TcpListener;
use std::time::{Duration, Instant};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client() -> LlmClient {
    let http_client = Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to create HTTP client");
    LlmClient::with_http_client(http_client)
}

fn completion(content: Value) -> Value {
    json!({
        "id": "chatcmpl-test123",
        "object": "chat.completion",
        "created": 1704067200,
        "model": "llama-3.1-8b-instruct",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30}
    })
}

fn config_for(server: &MockServer) -> ChatConfig {
    ChatConfig {
        base_url: Some(format!("{}/v1/", server.uri())),
        timeout_secs: 5,
        max_retries: 0,
        ..Default::default()
    }
}

/// A local port with nothing listening on it
fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    port
}

#[tokio::test]
async fn test_openai_compatible_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("accept", "application/json"))
        .and(body_partial_json(json!({
            "model": "llama-3.1-8b-instruct",
            "temperature": 0.2,
            "max_tokens": 1024,
            "stream": false,
            "messages": [
                {"role": "system", "content": "You are a helpful assistant."},
                {"role": "user", "content": "What is Rust?"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!(
            "\n  A systems programming language.  \n"
        ))))
        .expect(1)
        .mount(&server)
        .await;

    let reply = ask(&test_client(), &config_for(&server), "What is Rust?").await;
    assert_eq!(reply.status, 200);
    assert_eq!(reply.message, "A systems programming language.");

    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_bearer_token_sent_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-local"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!("ok"))))
        .expect(1)
        .mount(&server)
        .await;

    let config = ChatConfig {
        api_key: Some("sk-local".to_string()),
        ..config_for(&server)
    };
    let reply = ask(&test_client(), &config, "ping").await;
    assert_eq!(reply.message, "ok");
}

#[tokio::test]
async fn test_azure_route_and_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/deployments/gpt-4o-mini/chat/completions"))
        .and(query_param("api-version", "2024-02-01"))
        .and(header("api-key", "azure-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!("from azure"))))
        .expect(1)
        .mount(&server)
        .await;

    let config = ChatConfig {
        provider: ProviderKind::Azure,
        api_key: Some("azure-secret".to_string()),
        model: "gpt-4o-mini".to_string(),
        base_url: Some(server.uri()),
        ..config_for(&server)
    };
    let reply = ask(&test_client(), &config, "Hi").await;
    assert_eq!(reply.status, 200);
    assert_eq!(reply.message, "from azure");

    let requests = server.received_requests().await.expect("recording enabled");
    let body: Value = requests[0].body_json().expect("json body");
    assert!(body.get("model").is_none());
    assert_eq!(body["messages"][1]["content"], "Hi");
}

#[tokio::test]
async fn test_provider_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"message": "boom", "type": "server_error"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = ChatConfig {
        max_retries: 2,
        ..config_for(&server)
    };
    let reply = ask(&test_client(), &config, "Hi").await;
    assert_eq!(reply.status, 502);
    assert_eq!(reply.code, Some(FailureCode::HttpError));
    assert!(reply.message.contains("boom"));
    assert!(reply.message.contains("server_error"));
    assert!(reply.message.contains("500"));
}

#[tokio::test]
async fn test_non_json_error_body_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let result = test_client()
        .generate_chat(
            &ChatRequest::from_prompt("", "Hi"),
            &ClientOptions::new(ProviderKind::OpenAiCompatible, server.uri()),
        )
        .await;
    let failure = result.failure().expect("failure");
    assert_eq!(failure.code, FailureCode::HttpError);
    assert!(failure.message.contains("Not Found"));
    assert_eq!(failure.raw_body.as_deref(), Some("Not Found"));
}

#[tokio::test]
async fn test_empty_content_fails_by_default() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(Value::Null)))
        .mount(&server)
        .await;

    let reply = ask(&test_client(), &config_for(&server), "Hi").await;
    assert_eq!(reply.status, 502);
    assert_eq!(reply.code, Some(FailureCode::EmptyResponse));
    assert!(reply.message.contains("finish_reason: stop"));
}

#[tokio::test]
async fn test_empty_content_tolerated_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!("   "))))
        .mount(&server)
        .await;

    let config = ChatConfig {
        fail_on_empty_content: false,
        ..config_for(&server)
    };
    let reply = ask(&test_client(), &config, "Hi").await;
    assert_eq!(reply.status, 200);
    assert!(reply.message.contains("no content"));
    assert!(reply.message.contains("stop"));
}

#[tokio::test]
async fn test_alternate_content_paths() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": [{"text": " legacy "}]})))
        .mount(&server)
        .await;

    let reply = ask(&test_client(), &config_for(&server), "Hi").await;
    assert_eq!(reply.message, "legacy");
}

#[tokio::test]
async fn test_slow_server_times_out_within_bound() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion(json!("too late")))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = ChatConfig {
        timeout_secs: 1,
        max_retries: 1,
        ..config_for(&server)
    };
    let bound = config.client_options().worst_case_latency() + Duration::from_secs(1);

    let started = Instant::now();
    let reply = ask(&test_client(), &config, "Hi").await;
    assert_eq!(reply.status, 504);
    assert_eq!(reply.code, Some(FailureCode::Timeout));
    assert!(started.elapsed() < bound, "took {:?}", started.elapsed());

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn test_unreachable_server_is_connection_error() {
    let config = ChatConfig {
        base_url: Some(format!("http://127.0.0.1:{}/v1", closed_port())),
        timeout_secs: 5,
        max_retries: 1,
        ..Default::default()
    };

    let reply = ask(&test_client(), &config, "Hi").await;
    assert_eq!(reply.status, 503);
    assert_eq!(reply.code, Some(FailureCode::ConnectionError));
}

#[tokio::test]
async fn test_classification_is_deterministic() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let client = test_client();
    let config = config_for(&server);
    let first = ask(&client, &config, "Hi").await;
    let second = ask(&client, &config, "Hi").await;
    assert_eq!(first, second);
    assert_eq!(first.status, 502);
}

#[test]
fn test_connection_refused_description() {
    let failure = classify_transport_error(
        "OpenAI-compatible",
        &TransportError::Other("tcp connect error: Connection refused (os error 111)".to_string()),
    );
    assert_eq!(failure.code, FailureCode::ConnectionError);
    assert_eq!(failure.http_status, 503);
}
