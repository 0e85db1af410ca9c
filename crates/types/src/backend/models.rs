//! Wire models exchanged with the inference service
//!
//! Field names here are a stable, versioned contract with the scoring
//! side; renaming one is a breaking change.

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Wire response from POST {backend}/predict-housing
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct HousingScore {
	/// Point estimate in GBP
	pub price: f64,
	/// Natural log of the estimate, when the model exposes it
	#[serde(skip_serializing_if = "Option::is_none")]
	pub price_log: Option<f64>,
	pub confidence_lower: f64,
	pub confidence_upper: f64,
	/// Scoring model label
	pub model: String,
	/// Feature count the model consumed
	pub features_used: u32,
}

/// Health summary derived from the inference service's own probe
#[derive(Debug, Clone, PartialEq)]
pub struct BackendHealth {
	pub healthy: bool,
	/// Diagnostic text, passed through to the gateway health report
	pub detail: String,
}

/// Error body shape the inference service uses for non-2xx answers
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendErrorBody {
	pub error: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub details: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_housing_score_wire_names() {
		let body = r#"{
			"price": 285000.0,
			"price_log": 12.56,
			"confidence_lower": 160000.0,
			"confidence_upper": 410000.0,
			"model": "XGBoost",
			"features_used": 12
		}"#;

		let score: HousingScore = serde_json::from_str(body).unwrap();
		assert_eq!(score.price, 285_000.0);
		assert_eq!(score.features_used, 12);
	}

	#[test]
	fn test_housing_score_tolerates_missing_price_log() {
		let body = r#"{
			"price": 285000.0,
			"confidence_lower": 160000.0,
			"confidence_upper": 410000.0,
			"model": "XGBoost",
			"features_used": 12
		}"#;

		let score: HousingScore = serde_json::from_str(body).unwrap();
		assert!(score.price_log.is_none());
	}

	#[test]
	fn test_backend_error_body_parses_flask_shape() {
		let body = r#"{"error": "Internal server error", "details": "scoring failed"}"#;
		let parsed: BackendErrorBody = serde_json::from_str(body).unwrap();

		assert_eq!(parsed.error, "Internal server error");
		assert_eq!(parsed.details.as_deref(), Some("scoring failed"));
	}
}
