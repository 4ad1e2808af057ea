//! Axum route handlers for the HTML console.

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    response::Html,
    Form, Json,
};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::intent::{Catalog, Detection};
use crate::models::RunResult;
use crate::render::{render_page, render_result, PageView, ResultContext};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct IntentQuery {
    pub intent: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RunForm {
    #[serde(default)]
    pub goal: String,
    pub intent: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    #[serde(default)]
    pub goal: String,
    pub intent: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
///
/// Empty console. A known `intent` query value is carried into the form.
pub async fn handle_index(
    State(state): State<AppState>,
    query: Result<Query<IntentQuery>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let Query(query) = query?;
    let intent = known_override(state.catalog(), query.intent.as_deref());
    let detection = state.classifier.resolve("", intent);
    page(&state, "", false, &detection, intent, None)
}

/// POST /run
///
/// Classifies the submitted goal, runs it against the backend and renders the
/// result. An empty goal re-renders the form marked invalid without calling
/// the backend. Backend failures render as a failed result.
pub async fn handle_run(
    State(state): State<AppState>,
    query: Result<Query<IntentQuery>, QueryRejection>,
    form: Result<Form<RunForm>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Query(query) = query?;
    let Form(form) = form?;
    let requested = form.intent.as_deref().or(query.intent.as_deref());
    let intent = known_override(state.catalog(), requested);
    let goal = form.goal.trim();

    if goal.is_empty() {
        debug!("Rejected empty goal");
        let detection = state.classifier.resolve(&form.goal, intent);
        return page(&state, &form.goal, true, &detection, intent, None);
    }

    let detection = state.classifier.resolve(goal, intent);
    info!(
        "Running goal with {} ({:?})",
        detection.code, detection.source
    );

    let result = match state.backend.run(&detection.code, goal).await {
        Ok(result) => result,
        Err(e) => {
            warn!("Run failed for {}: {e}", detection.code);
            RunResult::failed(goal, e.message())
        }
    };

    let fragment = render_result(
        &result,
        ResultContext {
            detected_label: &detection.label,
            goal,
        },
    )?;
    page(&state, goal, false, &detection, intent, Some(fragment))
}

/// GET /classify?goal=&intent=
///
/// Live preview used by the page on every keystroke.
pub async fn handle_classify(
    State(state): State<AppState>,
    query: Result<Query<ClassifyQuery>, QueryRejection>,
) -> Result<Json<Detection>, AppError> {
    let Query(query) = query?;
    Ok(Json(
        state.classifier.resolve(&query.goal, query.intent.as_deref()),
    ))
}

/// GET /agents
///
/// The catalog the console resolved at boot.
pub async fn handle_agents(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.catalog().clone())
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Keeps an `intent` override only when it names a catalog code.
fn known_override<'a>(catalog: &Catalog, intent: Option<&'a str>) -> Option<&'a str> {
    intent.filter(|code| catalog.contains(code))
}

fn page(
    state: &AppState,
    goal: &str,
    invalid: bool,
    detection: &Detection,
    intent_override: Option<&str>,
    result_html: Option<String>,
) -> Result<Html<String>, AppError> {
    let html = render_page(&PageView {
        status: state.status,
        api_origin: state.api_origin(),
        goal,
        invalid,
        detection,
        intent_override,
        result_html,
    })?;
    Ok(Html(html))
}
