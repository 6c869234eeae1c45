pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analysis/extract", post(handlers::handle_extract))
        .route(
            "/api/v1/analysis/reconcile",
            post(handlers::handle_reconcile),
        )
        .route("/api/v1/analysis/metrics", post(handlers::handle_metrics))
        .route("/api/v1/analysis/analyze", post(handlers::handle_analyze))
        // Role presets and learning resources
        .route("/api/v1/job-roles", get(handlers::handle_job_roles))
        .route("/api/v1/resources/:skill", get(handlers::handle_resources))
        .with_state(state)
}
