use crate::models::HealthResponse;
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET /health handler - Health check endpoint
///
/// The route table is validated before the server starts, so a running
/// service is always healthy; the route count is reported for deploy checks.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    tracing::debug!("Health check passed");
    Json(HealthResponse {
        status: "healthy".to_string(),
        routes: state.routes.len(),
    })
}
