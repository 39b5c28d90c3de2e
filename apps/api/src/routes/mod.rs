pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;
use crate::ui;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/actions", get(handlers::handle_list_actions))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/analyze/download", post(handlers::handle_download))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
