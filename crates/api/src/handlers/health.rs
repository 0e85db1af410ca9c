use axum::{extract::State, response::Json};

use crate::state::AppState;
use cloudai_types::models::HealthStatus;

/// GET /health - probe the inference service and report
///
/// Always answers 200; a broken dependency is reported as degraded.
#[cfg_attr(feature = "openapi", utoipa::path(
	get,
	path = "/health",
	responses(
		(status = 200, description = "Gateway health report", body = HealthStatus)
	),
	tag = "health"
))]
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
	Json(state.health_service.check().await)
}
