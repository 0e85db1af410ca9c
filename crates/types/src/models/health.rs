//! Gateway health reporting models

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Overall gateway state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
	Healthy,
	/// The inference service is unreachable or unhealthy
	Degraded,
}

/// GET /health response body
///
/// The endpoint itself always answers 200; a broken dependency shows up
/// as `degraded`, never as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct HealthStatus {
	pub status: HealthState,
	pub service: String,
	pub version: String,
	pub dependency_healthy: bool,
	/// Free-text diagnostic from the dependency probe
	pub dependency_detail: String,
}
