//! In-memory backend for state and route tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::agent_client::{AgentBackend, BackendMode, ClientError};
use crate::models::{Category, RunResult};

pub struct StubBackend {
    pub healthy: bool,
    pub agents: Option<Vec<Category>>,
    /// `Err((status, body))` makes `run` reject like a non-2xx backend.
    pub run_result: Result<RunResult, (u16, Value)>,
    pub run_calls: AtomicUsize,
    pub last_run: Mutex<Option<(String, String)>>,
}

impl StubBackend {
    pub fn healthy() -> Self {
        Self {
            healthy: true,
            agents: None,
            run_result: Ok(RunResult {
                success: true,
                summary: Some("stubbed".to_string()),
                ..RunResult::default()
            }),
            run_calls: AtomicUsize::new(0),
            last_run: Mutex::new(None),
        }
    }

    pub fn down() -> Self {
        Self {
            healthy: false,
            ..Self::healthy()
        }
    }

    pub fn calls(&self) -> usize {
        self.run_calls.load(Ordering::SeqCst)
    }

    pub fn last_run(&self) -> Option<(String, String)> {
        self.last_run.lock().unwrap().clone()
    }
}

#[async_trait]
impl AgentBackend for StubBackend {
    async fn health(&self) -> Result<Value, ClientError> {
        if self.healthy {
            Ok(json!({ "status": "ok" }))
        } else {
            Err(ClientError::Status {
                status: 503,
                body: "down".to_string(),
            })
        }
    }

    async fn agents(&self) -> Result<Vec<Category>, ClientError> {
        self.agents.clone().ok_or(ClientError::Status {
            status: 404,
            body: "Not Found".to_string(),
        })
    }

    async fn run(&self, code: &str, goal: &str) -> Result<RunResult, ClientError> {
        self.run_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_run.lock().unwrap() = Some((code.to_string(), goal.to_string()));
        match &self.run_result {
            Ok(result) => Ok(result.clone()),
            Err((status, body)) => Err(ClientError::Rejected {
                status: *status,
                body: body.clone(),
            }),
        }
    }

    fn mode(&self) -> BackendMode {
        BackendMode::Remote
    }
}
