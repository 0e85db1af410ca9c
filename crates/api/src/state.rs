use std::sync::Arc;

use cloudai_service::{HealthService, PredictionService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub prediction_service: Arc<PredictionService>,
	pub health_service: Arc<HealthService>,
}
