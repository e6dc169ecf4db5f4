use pawsbot_relay::error::RELAY_FALLBACK;
use pawsbot_relay::routes::create_router;
use pawsbot_relay::services::completion::{
    CompletionClient, CompletionError, ConversationMessage, GatewayClient,
};
use pawsbot_relay::state::AppState;
use pawsbot_relay::widget::client::{HttpRelayClient, RelayCallError, RelayClient};
use pawsbot_relay::widget::{ChatWidget, TurnOutcome, WIDGET_FALLBACK};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Default)]
struct Captured {
    inner: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}")
}

/// Upstream stand-in answering every call with `status` and `body`.
async fn mock_upstream(status: StatusCode, body: Value) -> (String, Captured) {
    let captured = Captured::default();
    let app = Router::new()
        .route(
            "/v1/chat/completions",
            post(
                move |State(captured): State<Captured>, headers: HeaderMap, Json(req): Json<Value>| {
                    let body = body.clone();
                    async move {
                        let auth = headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        captured.inner.lock().unwrap().push((auth, req));
                        (status, Json(body))
                    }
                },
            ),
        )
        .with_state(captured.clone());
    let base = serve(app).await;
    (format!("{base}/v1/chat/completions"), captured)
}

fn gateway(url: &str) -> GatewayClient {
    GatewayClient::new(url, Some("sk-test".into()), "test-model", Duration::from_secs(5)).unwrap()
}

fn conversation() -> Vec<ConversationMessage> {
    vec![ConversationMessage::system("be nice")]
}

#[tokio::test]
async fn sends_bearer_model_and_limits() {
    let (url, captured) = mock_upstream(
        StatusCode::OK,
        json!({ "choices": [{ "message": { "role": "assistant", "content": "Woof!" } }] }),
    )
    .await;

    let reply = gateway(&url).complete(&conversation()).await.unwrap();
    assert_eq!(reply.as_deref(), Some("Woof!"));

    let calls = captured.inner.lock().unwrap();
    let (auth, body) = &calls[0];
    assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
    assert_eq!(body["model"], "test-model");
    assert_eq!(body["max_completion_tokens"], 500);
    assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][0]["content"], "be nice");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let (url, _) = mock_upstream(StatusCode::TOO_MANY_REQUESTS, json!({ "error": "slow down" })).await;

    let err = gateway(&url).complete(&conversation()).await.unwrap_err();
    match err {
        CompletionError::Status { status, body } => {
            assert_eq!(status.as_u16(), 429);
            assert!(body.contains("slow down"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn absent_or_empty_content_is_none() {
    for body in [
        json!({ "choices": [] }),
        json!({}),
        json!({ "choices": [{ "message": { "content": null } }] }),
        json!({ "choices": [{ "message": { "content": "" } }] }),
    ] {
        let (url, _) = mock_upstream(StatusCode::OK, body).await;
        assert_eq!(gateway(&url).complete(&conversation()).await.unwrap(), None);
    }
}

#[tokio::test]
async fn missing_api_key_fails_without_calling_upstream() {
    let (url, captured) = mock_upstream(StatusCode::OK, json!({})).await;
    let client = GatewayClient::new(url, None, "test-model", Duration::from_secs(5)).unwrap();

    let err = client.complete(&conversation()).await.unwrap_err();
    assert!(matches!(err, CompletionError::MissingApiKey));
    assert!(captured.inner.lock().unwrap().is_empty());
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "choices": [] }))
        }),
    );
    let url = format!("{}/v1/chat/completions", serve(app).await);
    let client =
        GatewayClient::new(url, Some("sk-test".into()), "m", Duration::from_millis(100)).unwrap();

    let err = client.complete(&conversation()).await.unwrap_err();
    assert!(matches!(err, CompletionError::Timeout(_)));
    assert_eq!(err.kind(), "timeout");
    assert!(err.to_string().contains("timed out"));
}

async fn relay_in_front_of(upstream_url: &str) -> String {
    let state = Arc::new(AppState::new(Arc::new(gateway(upstream_url)), None));
    format!("{}/pawsbot-chat", serve(create_router(state)).await)
}

#[tokio::test]
async fn widget_to_relay_to_upstream() {
    let (upstream_url, captured) = mock_upstream(
        StatusCode::OK,
        json!({ "choices": [{ "message": { "content": "Hamsters love wheels! 🐹" } }] }),
    )
    .await;
    let relay_url = relay_in_front_of(&upstream_url).await;
    let client = HttpRelayClient::new(relay_url, Some("anon-key".into()), Duration::from_secs(5)).unwrap();

    let mut widget = ChatWidget::new();
    let outcome = widget.submit(&client, "", Some(pawsbot_relay::topics::QuickTopic::HamsterCare)).await;

    assert_eq!(outcome, Some(TurnOutcome::Replied));
    assert_eq!(widget.messages().last().unwrap().content, "Hamsters love wheels! 🐹");

    let calls = captured.inner.lock().unwrap();
    let messages = calls[0].1["messages"].as_array().unwrap().clone();
    // persona, user label, topic context
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1]["content"], "🐹⚙️ Hamster Care");
    assert!(messages[2]["content"].as_str().unwrap().starts_with("Context: "));
}

#[tokio::test]
async fn relay_failure_reaches_widget_as_fallback() {
    let (upstream_url, _) = mock_upstream(StatusCode::BAD_GATEWAY, json!({ "error": "down" })).await;
    let relay_url = relay_in_front_of(&upstream_url).await;

    let raw = reqwest::Client::new()
        .post(&relay_url)
        .json(&json!({ "messages": [{ "role": "user", "content": "hi" }] }))
        .send()
        .await
        .unwrap();
    assert_eq!(raw.status().as_u16(), 500);
    let body: Value = raw.json().await.unwrap();
    assert_eq!(body["reply"], RELAY_FALLBACK);
    assert!(body["error"].as_str().unwrap().contains("502"));

    let client = HttpRelayClient::new(relay_url, None, Duration::from_secs(5)).unwrap();
    let err = client
        .send(&pawsbot_relay::message::RelayRequest { messages: vec![], quick_reply: None })
        .await
        .unwrap_err();
    assert!(matches!(err, RelayCallError::Status { status } if status.as_u16() == 500));

    let mut widget = ChatWidget::new();
    assert_eq!(widget.submit(&client, "hi", None).await, Some(TurnOutcome::FellBack));
    assert_eq!(widget.messages().last().unwrap().content, WIDGET_FALLBACK);
    assert!(!widget.is_loading());
}

#[tokio::test]
async fn malformed_relay_body_is_reported() {
    let app = Router::new().route("/pawsbot-chat", post(|| async { "not json" }));
    let url = format!("{}/pawsbot-chat", serve(app).await);
    let client = HttpRelayClient::new(url, None, Duration::from_secs(5)).unwrap();

    let err = client
        .send(&pawsbot_relay::message::RelayRequest { messages: vec![], quick_reply: None })
        .await
        .unwrap_err();
    assert!(matches!(err, RelayCallError::Malformed(_)));
}
