//! HTTP server for problem-tracker.

#![allow(clippy::missing_errors_doc, reason = "Handlers map errors to responses")]

pub mod api_error;
mod blocking;
mod forms;
mod handlers;
mod response_types;
mod views;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use problem_tracker_service::ProblemService;

pub use response_types::ProgressUpdateResponse;

/// Largest accepted request body; photos from phones easily exceed axum's 2 MB default.
pub const MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for thread-safe sharing across handlers.
#[derive(Debug)]
pub struct AppState {
    /// Application context shared with the export scheduler
    pub service: Arc<ProblemService>,
}

impl AppState {
    #[must_use]
    pub fn new(service: Arc<ProblemService>) -> Self {
        Self { service }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let uploads = ServeDir::new(state.service.media().root());
    Router::new()
        .route("/", get(handlers::problems::index).post(handlers::problems::create))
        .route("/edit/{id}", get(handlers::problems::edit))
        .route("/update/{id}", post(handlers::problems::update))
        .route("/delete/{id}", get(handlers::problems::delete))
        .route("/update_progress/{id}", post(handlers::problems::update_progress))
        .route("/export", get(handlers::export::export))
        .route("/health", get(health))
        .route("/api/problems", get(handlers::problems::list_json))
        .route("/api/problems/{id}", get(handlers::problems::get_json))
        .nest_service("/uploads", uploads)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
