//! Agent client: the only place the console talks to the agent backend.
//!
//! The backend exposes three endpoints: `GET /health`, `GET /agents` and
//! `POST /run`. Every call is a single attempt: no retries, no backoff and no
//! client-side timeout.
//!
//! `AppState` holds an `Arc<dyn AgentBackend>`; boot swaps the HTTP client for
//! [`offline::OfflineDemo`] when the health probe fails and offline fallback is
//! enabled.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{Category, RunResult};

pub mod offline;
#[cfg(test)]
pub mod testing;

pub use offline::OfflineDemo;

const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx on a GET. `body` is the raw response text.
    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Non-2xx on `POST /run`. `body` is the JSON error body, or
    /// `{"error":"Request failed"}` when the body was not JSON.
    #[error("Run rejected (status {status}): {body}")]
    Rejected { status: u16, body: Value },
}

impl ClientError {
    /// Text shown to the user in place of the run summary data.
    pub fn message(&self) -> String {
        match self {
            ClientError::Rejected { body, .. } => match body.get("error") {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Object(o)) => o
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or(UNKNOWN_ERROR)
                    .to_string(),
                _ => UNKNOWN_ERROR.to_string(),
            },
            ClientError::Status { status, body } if body.trim().is_empty() => {
                format!("Backend returned {status}")
            }
            ClientError::Status { body, .. } => body.clone(),
            ClientError::Http(e) => e.to_string(),
        }
    }
}

/// Which backend is serving requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendMode {
    Remote,
    Offline,
}

/// The agent backend trait. Implement this to swap backends without touching
/// routes or rendering.
#[async_trait]
pub trait AgentBackend: Send + Sync {
    /// Reachability probe; the body is not interpreted.
    async fn health(&self) -> Result<Value, ClientError>;

    /// Category list used to override the built-in labels.
    async fn agents(&self) -> Result<Vec<Category>, ClientError>;

    /// Runs `goal` against the agent identified by `code`.
    async fn run(&self, code: &str, goal: &str) -> Result<RunResult, ClientError>;

    fn mode(&self) -> BackendMode;
}

#[derive(Debug, Serialize)]
struct RunRequest<'a> {
    intent: &'a str,
    goal: &'a str,
}

/// reqwest-backed client for a remote agent backend.
#[derive(Clone)]
pub struct HttpAgentClient {
    client: Client,
    base: String,
}

impl HttpAgentClient {
    pub fn new(base: &str) -> Self {
        Self {
            client: Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.client.get(self.url(path)).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl AgentBackend for HttpAgentClient {
    async fn health(&self) -> Result<Value, ClientError> {
        self.get_json("/health").await
    }

    async fn agents(&self) -> Result<Vec<Category>, ClientError> {
        self.get_json("/agents").await
    }

    async fn run(&self, code: &str, goal: &str) -> Result<RunResult, ClientError> {
        let response = self
            .client
            .post(self.url("/run"))
            .json(&RunRequest { intent: code, goal })
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = serde_json::from_str::<Value>(&text)
                .unwrap_or_else(|_| json!({ "error": "Request failed" }));
            warn!("Agent run for {code} returned {status}: {body}");
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let result: RunResult = response.json().await?;
        debug!("Agent run for {code} succeeded: success={}", result.success);
        Ok(result)
    }

    fn mode(&self) -> BackendMode {
        BackendMode::Remote
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::StatusCode,
        response::IntoResponse,
        routing::{get, post},
        Json, Router,
    };

    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn echo_run(Json(body): Json<Value>) -> Json<Value> {
        Json(json!({
            "success": true,
            "summary": "ok",
            "data": { "steps": ["one", "two"] },
            "receipt": {
                "agent_label": "Echo",
                "agent_code": body["intent"],
                "user_goal": body["goal"]
            }
        }))
    }

    fn healthy_backend() -> Router {
        Router::new()
            .route("/health", get(|| async { Json(json!({ "status": "ok" })) }))
            .route(
                "/agents",
                get(|| async { Json(json!([{ "code": "SA", "label": "Sales Desk" }])) }),
            )
            .route("/run", post(echo_run))
    }

    #[tokio::test]
    async fn test_health_ok_returns_body() {
        let base = spawn_backend(healthy_backend()).await;
        let client = HttpAgentClient::new(&base);
        let body = client.health().await.unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_get_failure_carries_raw_text() {
        let router = Router::new().route(
            "/health",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "warming up").into_response() }),
        );
        let base = spawn_backend(router).await;
        let err = HttpAgentClient::new(&base).health().await.unwrap_err();
        match &err {
            ClientError::Status { status, body } => {
                assert_eq!(*status, 503);
                assert_eq!(body, "warming up");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.message(), "warming up");
    }

    #[tokio::test]
    async fn test_missing_agents_endpoint_is_status_error() {
        let router = Router::new().route("/health", get(|| async { "ok" }));
        let base = spawn_backend(router).await;
        let err = HttpAgentClient::new(&base).agents().await.unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_agents_decodes_categories() {
        let base = spawn_backend(healthy_backend()).await;
        let agents = HttpAgentClient::new(&base).agents().await.unwrap();
        assert_eq!(agents, vec![Category::new("SA", "Sales Desk")]);
    }

    #[tokio::test]
    async fn test_run_posts_intent_and_goal() {
        let base = spawn_backend(healthy_backend()).await;
        let client = HttpAgentClient::new(&format!("{base}/"));
        let result = client.run("FA", "rotate my beds").await.unwrap();
        let receipt = result.receipt.unwrap();
        assert_eq!(receipt.agent_code.as_deref(), Some("FA"));
        assert_eq!(receipt.user_goal.as_deref(), Some("rotate my beds"));
        assert_eq!(result.data.unwrap().steps.unwrap(), vec!["one", "two"]);
    }

    #[tokio::test]
    async fn test_run_rejection_keeps_json_error_body() {
        let router = Router::new().route(
            "/run",
            post(|| async {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": "bad request" })))
            }),
        );
        let base = spawn_backend(router).await;
        let err = HttpAgentClient::new(&base).run("TA", "x").await.unwrap_err();
        assert!(matches!(err, ClientError::Rejected { status: 400, .. }));
        assert_eq!(err.message(), "bad request");
    }

    #[tokio::test]
    async fn test_run_rejection_with_non_json_body_uses_generic_error() {
        let router = Router::new().route(
            "/run",
            post(|| async { (StatusCode::BAD_GATEWAY, "<html>upstream</html>").into_response() }),
        );
        let base = spawn_backend(router).await;
        let err = HttpAgentClient::new(&base).run("TA", "x").await.unwrap_err();
        match &err {
            ClientError::Rejected { body, .. } => {
                assert_eq!(body, &json!({ "error": "Request failed" }))
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.message(), "Request failed");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = HttpAgentClient::new(&format!("http://{addr}"))
            .health()
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
    }

    #[test]
    fn test_message_reads_nested_error_object() {
        let err = ClientError::Rejected {
            status: 422,
            body: json!({ "error": { "code": "VALIDATION_ERROR", "message": "goal too long" } }),
        };
        assert_eq!(err.message(), "goal too long");
    }

    #[test]
    fn test_message_without_error_field_is_unknown() {
        let err = ClientError::Rejected {
            status: 500,
            body: json!("boom"),
        };
        assert_eq!(err.message(), "Unknown error");
    }

    #[test]
    fn test_base_trailing_slash_trimmed() {
        let client = HttpAgentClient::new("http://localhost:8000///");
        assert_eq!(client.base(), "http://localhost:8000");
        assert_eq!(client.url("/run"), "http://localhost:8000/run");
    }
}
