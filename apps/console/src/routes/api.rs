//! JSON counterpart of the console form, for scripts and smoke tests.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::intent::Detection;
use crate::models::RunResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ApiRunRequest {
    pub goal: String,
    #[serde(default)]
    pub intent: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApiRunResponse {
    pub detection: Detection,
    pub result: RunResult,
}

/// POST /api/run
///
/// Same flow as the form, but backend failures surface as a 502 instead of a
/// rendered failure.
pub async fn handle_api_run(
    State(state): State<AppState>,
    payload: Result<Json<ApiRunRequest>, JsonRejection>,
) -> Result<Json<ApiRunResponse>, AppError> {
    let Json(request) = payload?;
    let goal = request.goal.trim();
    if goal.is_empty() {
        return Err(AppError::Validation("goal cannot be empty".to_string()));
    }

    let detection = state.classifier.resolve(goal, request.intent.as_deref());
    let result = state.backend.run(&detection.code, goal).await?;

    Ok(Json(ApiRunResponse { detection, result }))
}
