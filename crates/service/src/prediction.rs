//! Prediction forwarding and response shaping

use std::sync::Arc;
use std::time::Instant;

use chrono::{SecondsFormat, Utc};
use thiserror::Error;
use tracing::info;

use cloudai_types::backend::{BackendError, InferenceBackend};
use cloudai_types::{HousingPredictionRequest, HousingPredictionResponse};

/// Errors surfaced while forwarding a prediction
#[derive(Error, Debug)]
pub enum PredictionServiceError {
	#[error("inference service call failed: {0}")]
	Backend(#[from] BackendError),
}

impl PredictionServiceError {
	/// The underlying backend failure
	pub fn backend_error(&self) -> &BackendError {
		match self {
			Self::Backend(err) => err,
		}
	}
}

/// Forwards validated requests to the inference service and shapes the
/// response with gateway-side timing metadata
pub struct PredictionService {
	backend: Arc<dyn InferenceBackend>,
}

impl PredictionService {
	pub fn new(backend: Arc<dyn InferenceBackend>) -> Self {
		Self { backend }
	}

	/// Forward a validated housing request: one call, no retry
	///
	/// `processing_time_ms` covers serialization, the inference call and
	/// response shaping; `prediction_time` is stamped from the gateway's
	/// clock, not the backend's.
	pub async fn predict_housing(
		&self,
		request: &HousingPredictionRequest,
	) -> Result<HousingPredictionResponse, PredictionServiceError> {
		let started = Instant::now();

		let score = self.backend.predict_housing(request).await?;

		let processing_time_ms = started.elapsed().as_secs_f64() * 1_000.0;
		let prediction_time = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

		info!(
			price = score.price,
			model = %score.model,
			elapsed_ms = processing_time_ms,
			"housing prediction served"
		);

		Ok(HousingPredictionResponse::from_score(
			score,
			prediction_time,
			processing_time_ms,
		))
	}
}
