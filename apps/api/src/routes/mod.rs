pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Browser form
        .route("/", get(handlers::handle_form_page))
        .route("/analyze", post(handlers::handle_analyze_form))
        .route("/report", post(handlers::handle_report_form))
        // JSON API
        .route("/api/v1/analyze", post(handlers::handle_analyze_json))
        .route("/api/v1/report", post(handlers::handle_report_json))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
