// Presentation layer - HTTP routing
pub mod app_state;
pub mod handlers;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_dashboard, health_check};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard/:id", get(get_dashboard))
        .route("/f1/dashboard/:id", get(get_dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
