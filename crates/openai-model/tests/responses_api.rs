use comedian_model::{
    CompletionProvider, CompletionRequest, ErrorKind, Message, ProviderError,
    RequestOptions,
};
use comedian_openai_model::{OpenAIConfigBuilder, OpenAIProvider};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> OpenAIProvider {
    let config = OpenAIConfigBuilder::with_api_key("sk-test")
        .with_base_url(format!("{}/v1", server.uri()))
        .build();
    OpenAIProvider::new(config)
}

#[tokio::test]
async fn test_model_completion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "input": [{
                "role": "user",
                "content": [{ "type": "input_text", "text": "Cats" }],
            }],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "resp_1",
            "output": [{
                "type": "message",
                "content": [{ "type": "output_text", "text": "Purr-fect." }],
            }],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    assert!(provider.has_credential());

    let req =
        CompletionRequest::for_model("gpt-4o-mini", vec![Message::user("Cats")]);
    let resp = provider.create(&req).await.unwrap();
    assert_eq!(resp.text(), "Purr-fect.");
}

#[tokio::test]
async fn test_agent_completion_with_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .and(body_partial_json(json!({
            "agent_id": "agent_abc",
            "session_id": "sess_42",
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "output_text": " Ba-dum tss. " })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let req =
        CompletionRequest::for_agent("agent_abc", vec![Message::user("Drums")])
            .with_options(RequestOptions::default().with_session_id("sess_42"));
    let resp = provider.create(&req).await.unwrap();
    assert_eq!(resp.text(), "Ba-dum tss.");
}

#[tokio::test]
async fn test_status_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .and(body_partial_json(json!({ "model": "busy" })))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .and(body_partial_json(json!({ "model": "locked" })))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .and(body_partial_json(json!({ "model": "broken" })))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    for (model, kind) in [
        ("busy", ErrorKind::RateLimitExceeded),
        ("locked", ErrorKind::Unauthorized),
        ("broken", ErrorKind::Other),
    ] {
        let req = CompletionRequest::for_model(model, vec![Message::user("Hi")]);
        let err = provider.create(&req).await.unwrap_err();
        assert_eq!(err.kind(), kind, "model {model}");
    }
}

#[tokio::test]
async fn test_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html>oops</html>"),
        )
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let req = CompletionRequest::for_model("gpt-4o-mini", vec![Message::user("Hi")]);
    let err = provider.create(&req).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Other);
    assert!(err.message().contains("content type"));
}
