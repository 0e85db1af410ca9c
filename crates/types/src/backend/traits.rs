//! Trait boundary between the gateway and the inference service

use async_trait::async_trait;

use super::{BackendHealth, BackendResult, HousingScore};
use crate::housing::HousingPredictionRequest;

/// Narrow interface to the inference service
///
/// One scoring call per gateway request, one probe per health check.
/// Implementations must not retry; failures surface to the caller within
/// the same request cycle.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
	/// Score a validated housing request
	async fn predict_housing(
		&self,
		request: &HousingPredictionRequest,
	) -> BackendResult<HousingScore>;

	/// Probe the inference service's own health endpoint
	async fn health_check(&self) -> BackendResult<BackendHealth>;

	/// Identifier used in logs and diagnostics
	fn name(&self) -> &str;
}
