pub mod api;
pub mod console;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML console
        .route("/", get(console::handle_index))
        .route("/run", post(console::handle_run))
        .route("/classify", get(console::handle_classify))
        .route("/agents", get(console::handle_agents))
        // JSON
        .route("/api/run", post(api::handle_api_run))
        .with_state(state)
}
