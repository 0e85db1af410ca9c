//! Gateway health probing

use std::sync::Arc;

use tracing::warn;

use cloudai_types::backend::InferenceBackend;
use cloudai_types::models::{HealthState, HealthStatus};

/// Service name reported by GET /health
pub const SERVICE_NAME: &str = "Cloud AI API Gateway";

/// Translates the inference service probe into the gateway health report
pub struct HealthService {
	backend: Arc<dyn InferenceBackend>,
}

impl HealthService {
	pub fn new(backend: Arc<dyn InferenceBackend>) -> Self {
		Self { backend }
	}

	/// Probe the dependency and report; this never fails itself
	pub async fn check(&self) -> HealthStatus {
		let (dependency_healthy, dependency_detail) = match self.backend.health_check().await {
			Ok(health) if health.healthy => (true, health.detail),
			Ok(health) => (false, health.detail),
			Err(err) => {
				warn!(backend = self.backend.name(), error = %err, "health probe failed");
				(false, err.to_string())
			}
		};

		let status = if dependency_healthy {
			HealthState::Healthy
		} else {
			HealthState::Degraded
		};

		HealthStatus {
			status,
			service: SERVICE_NAME.to_string(),
			version: env!("CARGO_PKG_VERSION").to_string(),
			dependency_healthy,
			dependency_detail,
		}
	}
}
