use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use koegaki::application::ports::{LlmClient, LlmClientError};
use koegaki::infrastructure::llm::OpenAiClient;

#[derive(Clone)]
struct MockChat {
    status: u16,
    body: &'static str,
    requests: Arc<Mutex<Vec<Value>>>,
}

async fn chat_completions(
    State(mock): State<MockChat>,
    Json(request): Json<Value>,
) -> impl IntoResponse {
    mock.requests.lock().unwrap().push(request);
    (
        StatusCode::from_u16(mock.status).unwrap(),
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        mock.body,
    )
}

async fn start_mock_chat(
    status: u16,
    body: &'static str,
) -> (String, Arc<Mutex<Vec<Value>>>, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let requests = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route("/v1/chat/completions", post(chat_completions))
        .with_state(MockChat {
            status,
            body,
            requests: Arc::clone(&requests),
        });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/v1", listener.local_addr().unwrap());

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, requests, shutdown_tx)
}

fn client(base_url: String) -> OpenAiClient {
    OpenAiClient::new(
        "sk-test".to_string(),
        Some(base_url),
        "gpt-4o-mini".to_string(),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn given_completion_when_calling_chat_api_then_returns_first_choice() {
    let body = r#"{"choices": [{"index": 0, "message": {"role": "assistant", "content": "整えた文章"}}]}"#;
    let (base_url, requests, shutdown_tx) = start_mock_chat(200, body).await;

    let answer = client(base_url)
        .complete("system text", "user text")
        .await
        .unwrap();

    assert_eq!(answer, "整えた文章");

    let request = requests.lock().unwrap()[0].clone();
    assert_eq!(request["model"], "gpt-4o-mini");
    assert_eq!(request["messages"][0]["role"], "system");
    assert_eq!(request["messages"][0]["content"], "system text");
    assert_eq!(request["messages"][1]["role"], "user");
    assert_eq!(request["messages"][1]["content"], "user text");
    assert!(request.get("temperature").is_none());
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_temperature_when_calling_chat_api_then_sends_it() {
    let body = r#"{"choices": [{"message": {"role": "assistant", "content": "ok"}}]}"#;
    let (base_url, requests, shutdown_tx) = start_mock_chat(200, body).await;

    client(base_url)
        .with_temperature(Some(0.5))
        .complete("s", "u")
        .await
        .unwrap();

    let request = requests.lock().unwrap()[0].clone();
    assert_eq!(request["temperature"], 0.5);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_choices_when_calling_chat_api_then_returns_invalid_response() {
    let (base_url, _, shutdown_tx) = start_mock_chat(200, r#"{"choices": []}"#).await;

    let result = client(base_url).complete("s", "u").await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_calling_chat_api_then_returns_api_error() {
    let (base_url, _, shutdown_tx) = start_mock_chat(500, r#"{"error": "boom"}"#).await;

    let result = client(base_url).complete("s", "u").await;

    assert!(matches!(result, Err(LlmClientError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limit_when_calling_chat_api_then_returns_rate_limited() {
    let (base_url, _, shutdown_tx) = start_mock_chat(429, r#"{}"#).await;

    let result = client(base_url).complete("s", "u").await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
    shutdown_tx.send(()).ok();
}
