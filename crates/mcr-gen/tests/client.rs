//! Integration tests for `HttpGenerator` using wiremock HTTP mocks.

use mcr_core::GenSettings;
use mcr_gen::{GenError, Generator, HttpGenerator};
use wiremock::matchers::{bearer_token, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings() -> GenSettings {
    GenSettings {
        base_url: "http://unused.invalid".to_owned(),
        api_key: "test-key".to_owned(),
        model: "test-model".to_owned(),
        request_timeout_secs: 5,
        max_retries: 0,
        backoff_base_ms: 100,
    }
}

fn test_generator(base_url: &str) -> HttpGenerator {
    HttpGenerator::with_base_url(&settings(), base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn generate_returns_first_choice_content() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "id": "chatcmpl-1",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": "{\"ok\": true}" } }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(bearer_token("test-key"))
        .and(body_partial_json(serde_json::json!({ "model": "test-model" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let generator = test_generator(&server.uri());
    let text = generator
        .generate("merge these records")
        .await
        .expect("should return completion text");

    assert_eq!(text, "{\"ok\": true}");
}

#[tokio::test]
async fn api_error_body_is_surfaced() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "error": { "message": "Invalid API key", "type": "invalid_request_error" }
    });

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(&body))
        .mount(&server)
        .await;

    let generator = test_generator(&server.uri());
    let result = generator.generate("prompt").await;

    let err = result.expect_err("401 should be an error");
    let msg = err.to_string();
    assert!(
        msg.contains("Invalid API key"),
        "expected error message to contain 'Invalid API key', got: {msg}"
    );
}

#[tokio::test]
async fn empty_choices_is_empty_completion() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "id": "chatcmpl-2", "choices": [] });

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let generator = test_generator(&server.uri());
    let result = generator.generate("prompt").await;

    assert!(matches!(result, Err(GenError::EmptyCompletion)));
}

#[tokio::test]
async fn whitespace_only_content_is_empty_completion() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": "   \n" } }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let generator = test_generator(&server.uri());
    let result = generator.generate("prompt").await;

    assert!(matches!(result, Err(GenError::EmptyCompletion)));
}

#[tokio::test]
async fn non_json_success_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let generator = test_generator(&server.uri());
    let result = generator.generate("prompt").await;

    assert!(matches!(result, Err(GenError::Deserialize { .. })));
}
