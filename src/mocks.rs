//! Mock backends for examples and testing
//!
//! Simple, working inference backends usable in tests without a live ML
//! service.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use cloudai_types::backend::{
	BackendError, BackendHealth, BackendResult, HousingScore, InferenceBackend,
};
use cloudai_types::HousingPredictionRequest;

/// Failure modes the mock can simulate
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockFailure {
	/// Backend answers normally
	None,
	/// Connection refused before any answer
	Unreachable,
	/// Call exceeds its timeout bound
	Timeout,
	/// Backend answers with this HTTP status and a JSON error body
	HttpStatus(u16),
}

/// Scripted inference backend with call tracking
#[derive(Debug, Clone)]
pub struct MockBackend {
	name: String,
	score: HousingScore,
	failure: MockFailure,
	response_delay: Duration,
	healthy: bool,
	calls: Arc<AtomicUsize>,
}

impl MockBackend {
	pub fn new() -> Self {
		Self {
			name: "mock-backend".to_string(),
			score: HousingScore {
				price: 285_000.0,
				price_log: Some(12.56),
				confidence_lower: 160_000.0,
				confidence_upper: 410_000.0,
				model: "MockRegressor".to_string(),
				features_used: 12,
			},
			failure: MockFailure::None,
			response_delay: Duration::ZERO,
			healthy: true,
			calls: Arc::new(AtomicUsize::new(0)),
		}
	}

	/// Mock that answers with the given score
	pub fn with_score(mut self, score: HousingScore) -> Self {
		self.score = score;
		self
	}

	/// Mock whose scoring calls fail in the given mode
	pub fn failing(mut self, failure: MockFailure) -> Self {
		self.failure = failure;
		self
	}

	/// Mock that sleeps before answering
	pub fn with_delay(mut self, delay: Duration) -> Self {
		self.response_delay = delay;
		self
	}

	/// Mock whose health probe reports the service down
	pub fn unhealthy(mut self) -> Self {
		self.healthy = false;
		self
	}

	/// Number of scoring calls the mock has served; clones share the
	/// counter, so keep one handy before handing the mock to a server
	pub fn prediction_calls(&self) -> usize {
		self.calls.load(Ordering::Relaxed)
	}
}

impl Default for MockBackend {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl InferenceBackend for MockBackend {
	async fn predict_housing(
		&self,
		_request: &HousingPredictionRequest,
	) -> BackendResult<HousingScore> {
		self.calls.fetch_add(1, Ordering::Relaxed);

		if !self.response_delay.is_zero() {
			tokio::time::sleep(self.response_delay).await;
		}

		match self.failure {
			MockFailure::None => Ok(self.score.clone()),
			MockFailure::Unreachable => {
				Err(BackendError::Connection("connection refused".to_string()))
			}
			MockFailure::Timeout => Err(BackendError::Timeout { timeout_ms: 5_000 }),
			MockFailure::HttpStatus(status_code) => Err(BackendError::HttpStatus {
				status_code,
				body: r#"{"error":"Internal server error","details":"scoring failed"}"#
					.to_string(),
			}),
		}
	}

	async fn health_check(&self) -> BackendResult<BackendHealth> {
		if self.healthy {
			Ok(BackendHealth {
				healthy: true,
				detail: "OK".to_string(),
			})
		} else {
			Err(BackendError::Connection("connection refused".to_string()))
		}
	}

	fn name(&self) -> &str {
		&self.name
	}
}
