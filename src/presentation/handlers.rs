// HTTP request handlers
use crate::domain::dashboard::DashboardPayload;
use crate::infrastructure::http_response::json_response;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current display state for one entity
pub async fn get_dashboard(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let (status, payload) = match state.dashboard_service.get_dashboard(&id, Utc::now()).await {
        Ok(payload) => (StatusCode::OK, payload),
        Err(e) => {
            tracing::error!("Dashboard for {} failed: {}", id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, DashboardPayload::error())
        }
    };

    match json_response(status, &payload) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}
