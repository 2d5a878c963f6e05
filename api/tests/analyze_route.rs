use std::sync::{Arc, Mutex};

use ai_llm_service::{
    AiLlmError, LlmModelConfig, LlmProvider, OracleFuture, OracleReply, TextOracle,
    error_handler::{Provider, ProviderError, ProviderErrorKind},
    health_service::HealthService,
};
use api::core::app_state::AppState;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use complexity_analyzer::ComplexityAnalyzer;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Oracle stub: canned reply (or a provider failure) plus a call log.
struct StubOracle {
    reply: Result<OracleReply, ()>,
    prompts: Mutex<Vec<String>>,
}

impl StubOracle {
    fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl TextOracle for StubOracle {
    fn complete<'a>(&'a self, prompt: &'a str) -> OracleFuture<'a> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let out = self.reply.clone().map_err(|_| {
            AiLlmError::from(ProviderError::new(
                Provider::Gemini,
                ProviderErrorKind::Decode("connection reset".into()),
            ))
        });
        Box::pin(async move { out })
    }
}

fn llm_config(endpoint: &str) -> LlmModelConfig {
    LlmModelConfig {
        provider: LlmProvider::Gemini,
        model: "gemini-1.5-flash".into(),
        endpoint: endpoint.into(),
        api_key: Some("test-key".into()),
        max_tokens: None,
        temperature: None,
        top_p: None,
        timeout_secs: None,
    }
}

fn app(reply: Result<OracleReply, ()>) -> (Router, Arc<StubOracle>) {
    let oracle = Arc::new(StubOracle {
        reply,
        prompts: Mutex::new(Vec::new()),
    });
    let state = AppState::new(
        ComplexityAnalyzer::new(oracle.clone()),
        llm_config("not-a-url"),
        HealthService::new(Some(1)).unwrap(),
    );
    (api::router(Arc::new(state)), oracle)
}

fn replying(text: &str) -> Result<OracleReply, ()> {
    Ok(OracleReply::single(text))
}

async fn post_analyze(app: Router, body: &str) -> (StatusCode, Vec<u8>) {
    let req = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

fn as_json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

const LOOP_REPLY: &str = "```json\n{\"timeComplexity\":{\"bestCase\":\"O(n)\",\"averageCase\":\"O(n)\",\"worstCase\":\"O(n)\"},\"spaceComplexity\":\"O(1)\",\"summary\":\"Single loop over n.\"}\n```";

#[tokio::test]
async fn fenced_reply_is_unwrapped_and_relayed() {
    let (app, oracle) = app(replying(LOOP_REPLY));
    let (status, body) = post_analyze(app, r#"{"code":"for i in range(n): print(i)"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        as_json(&body),
        json!({
            "timeComplexity": {"bestCase": "O(n)", "averageCase": "O(n)", "worstCase": "O(n)"},
            "spaceComplexity": "O(1)",
            "summary": "Single loop over n."
        })
    );
    assert_eq!(oracle.calls(), 1);
    assert!(oracle.prompts.lock().unwrap()[0].contains("for i in range(n): print(i)"));
}

#[tokio::test]
async fn extra_fields_and_key_order_survive() {
    let raw = r#"{"summary":"s","spaceComplexity":"O(1)","timeComplexity":"O(1)","notes":["a"]}"#;
    let (app, _) = app(replying(raw));
    let (status, body) = post_analyze(app, r#"{"code":"x = 1"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), raw);
}

#[tokio::test]
async fn same_reply_gives_identical_responses() {
    let (app, _) = app(replying(LOOP_REPLY));
    let (_, first) = post_analyze(app.clone(), r#"{"code":"x = 1"}"#).await;
    let (_, second) = post_analyze(app, r#"{"code":"x = 1"}"#).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn missing_or_blank_code_is_rejected_without_oracle_call() {
    for body in [
        r#"{}"#,
        r#"{"code":null}"#,
        r#"{"code":""}"#,
        r#"{"code":"   \n"}"#,
        r#"{"code":17}"#,
        "not json",
    ] {
        let (app, oracle) = app(replying(LOOP_REPLY));
        let (status, bytes) = post_analyze(app, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(as_json(&bytes), json!({"error": "No code provided."}));
        assert_eq!(oracle.calls(), 0, "body: {body}");
    }
}

#[tokio::test]
async fn missing_content_type_is_rejected() {
    let (app, oracle) = app(replying(LOOP_REPLY));
    let req = Request::builder()
        .method("POST")
        .uri("/analyze")
        .body(Body::from(r#"{"code":"x = 1"}"#))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(oracle.calls(), 0);
}

#[tokio::test]
async fn oracle_failures_map_to_server_errors() {
    let cases = [
        (Ok(OracleReply::empty()), "Could not analyze the code."),
        (Err(()), "Could not analyze the code."),
        (replying("I think it's O(n)."), "Invalid JSON response from the model."),
        (replying("[1, 2, 3]"), "Missing expected fields in the response."),
        (
            replying(r#"{"timeComplexity":"O(n)","summary":"no space"}"#),
            "Missing expected fields in the response.",
        ),
    ];

    for (reply, message) in cases {
        let (app, _) = app(reply);
        let (status, bytes) = post_analyze(app, r#"{"code":"x = 1"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{message}");
        assert_eq!(as_json(&bytes), json!({"error": message}));
    }
}

#[tokio::test]
async fn health_reports_misconfigured_endpoint() {
    let (app, _) = app(replying(LOOP_REPLY));
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = as_json(&to_bytes(resp.into_body(), usize::MAX).await.unwrap());
    assert_eq!(body["ok"], false);
    assert_eq!(body["provider"], "gemini");
    assert_eq!(body["endpoint"], "not-a-url");
}

#[tokio::test]
async fn index_serves_the_form() {
    let (app, _) = app(replying(LOOP_REPLY));
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        resp.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
    let html = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&html).contains("/analyze"));
}
