//! HTTP implementation of the inference service interface

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use cloudai_config::BackendSettings;
use cloudai_types::backend::{
	BackendError, BackendHealth, BackendResult, HousingScore, InferenceBackend,
};
use cloudai_types::HousingPredictionRequest;

/// Reqwest-based inference service client
///
/// One shared client, one outbound call per gateway request, no retries.
/// Each call site carries its own timeout so a stalled backend cannot pin
/// the handler pool.
#[derive(Debug, Clone)]
pub struct HttpInferenceBackend {
	/// Validated base URL, kept without a trailing slash
	base_url: String,
	client: Client,
	health_timeout: Duration,
	predict_timeout: Duration,
}

impl HttpInferenceBackend {
	/// Build a client from settings, validating the endpoint URL up front
	///
	/// A malformed endpoint is a fatal configuration error; the builder
	/// refuses to construct a gateway around it.
	pub fn new(settings: &BackendSettings) -> BackendResult<Self> {
		let parsed =
			Url::parse(&settings.endpoint).map_err(|e| BackendError::InvalidEndpoint {
				endpoint: settings.endpoint.clone(),
				reason: e.to_string(),
			})?;
		if !matches!(parsed.scheme(), "http" | "https") {
			return Err(BackendError::InvalidEndpoint {
				endpoint: settings.endpoint.clone(),
				reason: format!("unsupported scheme '{}'", parsed.scheme()),
			});
		}

		let client = Client::builder()
			.build()
			.map_err(|e| BackendError::Connection(e.to_string()))?;

		Ok(Self {
			base_url: settings.endpoint.trim_end_matches('/').to_string(),
			client,
			health_timeout: Duration::from_millis(settings.health_timeout_ms),
			predict_timeout: Duration::from_millis(settings.predict_timeout_ms),
		})
	}

	fn request_error(&self, err: reqwest::Error, timeout: Duration) -> BackendError {
		if err.is_timeout() {
			BackendError::Timeout {
				timeout_ms: timeout.as_millis() as u64,
			}
		} else {
			BackendError::Connection(err.to_string())
		}
	}
}

#[async_trait]
impl InferenceBackend for HttpInferenceBackend {
	async fn predict_housing(
		&self,
		request: &HousingPredictionRequest,
	) -> BackendResult<HousingScore> {
		// Same field names on the wire, county in canonical form
		let mut wire = request.clone();
		wire.county = request.canonical_county();

		let url = format!("{}/predict-housing", self.base_url);
		debug!(%url, "forwarding housing prediction");

		let response = self
			.client
			.post(&url)
			.timeout(self.predict_timeout)
			.json(&wire)
			.send()
			.await
			.map_err(|e| self.request_error(e, self.predict_timeout))?;

		let status = response.status();
		let body = response
			.text()
			.await
			.map_err(|e| self.request_error(e, self.predict_timeout))?;

		if !status.is_success() {
			warn!(
				status = status.as_u16(),
				"inference service rejected housing request"
			);
			return Err(BackendError::HttpStatus {
				status_code: status.as_u16(),
				body,
			});
		}

		serde_json::from_str(&body).map_err(|e| BackendError::InvalidResponse {
			reason: format!("undecodable housing score: {e}"),
		})
	}

	async fn health_check(&self) -> BackendResult<BackendHealth> {
		let url = format!("{}/health", self.base_url);

		let response = self
			.client
			.get(&url)
			.timeout(self.health_timeout)
			.send()
			.await
			.map_err(|e| self.request_error(e, self.health_timeout))?;

		let status = response.status();
		let body = response
			.text()
			.await
			.map_err(|e| self.request_error(e, self.health_timeout))?;

		if !status.is_success() {
			return Err(BackendError::HttpStatus {
				status_code: status.as_u16(),
				body,
			});
		}

		if serde_json::from_str::<serde_json::Value>(&body).is_err() {
			return Err(BackendError::InvalidResponse {
				reason: "undecodable health body".to_string(),
			});
		}

		Ok(BackendHealth {
			healthy: true,
			detail: "OK".to_string(),
		})
	}

	fn name(&self) -> &str {
		&self.base_url
	}
}
