//! Integration test — run the mediation processor against an in-process
//! mock of the Cerebras chat completions endpoint.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use mediator_core::completion::CompletionClient;
use mediator_core::completion::cerebras::CerebrasClient;
use mediator_core::completion::config::CompletionConfig;
use mediator_core::mediation::MediationProcessor;
use mediator_core::models::chat::{ChatMessage, MediationOutcome};

/// What the mock upstream saw and how it should answer.
#[derive(Clone)]
struct Upstream {
    status: StatusCode,
    body: serde_json::Value,
    seen: Arc<Mutex<Vec<(HeaderMap, serde_json::Value)>>>,
}

async fn completions(
    State(upstream): State<Upstream>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, Json<serde_json::Value>) {
    upstream.seen.lock().unwrap().push((headers, body));
    (upstream.status, Json(upstream.body.clone()))
}

/// Starts the mock on an ephemeral port and returns its base URL.
async fn spawn_upstream(upstream: Upstream) -> String {
    let app = Router::new()
        .route("/v1/chat/completions", post(completions))
        .with_state(upstream);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock upstream");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock upstream");
    });
    format!("http://{addr}/v1")
}

fn processor(base_url: String) -> MediationProcessor {
    let config = CompletionConfig {
        api_key: Some("csk-test".into()),
        base_url,
        model: "llama3.1-8b".into(),
        timeout: Some(Duration::from_secs(5)),
    };
    let client = CerebrasClient::from_config(&config)
        .expect("build client")
        .expect("client enabled");
    MediationProcessor::new(Some(Arc::new(client) as Arc<dyn CompletionClient>))
}

fn reply(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-1",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
    })
}

#[tokio::test]
async fn sends_expected_request_and_parses_reply() {
    let upstream = Upstream {
        status: StatusCode::OK,
        body: reply(r#"  {"response": "Let's slow down.", "feelings": "Hurt"}  "#),
        seen: Arc::new(Mutex::new(Vec::new())),
    };
    let seen = upstream.seen.clone();
    let processor = processor(spawn_upstream(upstream).await);

    let messages = vec![
        ChatMessage::new("alice", "You're so selfish."),
        ChatMessage::new("bob", "Whatever."),
    ];
    let outcome = processor.evaluate(&messages).await;

    assert!(outcome.mediation_triggered);
    assert_eq!(outcome.response, "Let's slow down.");
    assert_eq!(outcome.feelings.as_deref(), Some("Hurt"));
    assert!(outcome.observations.is_none());

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (headers, body) = &seen[0];
    assert_eq!(headers["authorization"], "Bearer csk-test");
    assert_eq!(body["model"], "llama3.1-8b");
    assert_eq!(body["max_tokens"], 300);
    assert_eq!(body["stream"], false);
    assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);

    let sent = body["messages"].as_array().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["role"], "user");
    let prompt = sent[0]["content"].as_str().unwrap();
    assert!(prompt.contains("alice: You're so selfish.\nbob: Whatever."));
}

#[tokio::test]
async fn provider_error_steps_back() {
    let upstream = Upstream {
        status: StatusCode::UNAUTHORIZED,
        body: serde_json::json!({"message": "Wrong API Key"}),
        seen: Arc::new(Mutex::new(Vec::new())),
    };
    let processor = processor(spawn_upstream(upstream).await);

    let outcome = processor.evaluate(&[ChatMessage::new("alice", "hi")]).await;
    assert_eq!(outcome, MediationOutcome::step_back());
}

#[tokio::test]
async fn missing_content_steps_back() {
    let upstream = Upstream {
        status: StatusCode::OK,
        body: serde_json::json!({"choices": []}),
        seen: Arc::new(Mutex::new(Vec::new())),
    };
    let processor = processor(spawn_upstream(upstream).await);

    let outcome = processor.evaluate(&[ChatMessage::new("alice", "hi")]).await;
    assert_eq!(outcome, MediationOutcome::step_back());
}

#[tokio::test]
async fn unreachable_upstream_steps_back() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let processor = processor(format!("http://{addr}/v1"));
    let outcome = processor.evaluate(&[ChatMessage::new("alice", "hi")]).await;
    assert_eq!(outcome, MediationOutcome::step_back());
}
