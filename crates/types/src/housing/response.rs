//! Housing prediction response model

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::backend::HousingScore;

/// API response body for POST /predict/housing
///
/// The scoring fields arrive from the inference service untouched; the
/// gateway adds `prediction_time` and `processing_time_ms`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct HousingPredictionResponse {
	/// Predicted sale price in GBP
	pub price: f64,
	/// Natural log of the predicted price, when the backend reports it
	#[serde(skip_serializing_if = "Option::is_none")]
	pub price_log: Option<f64>,
	/// Lower bound of the confidence interval around `price`
	pub confidence_lower: f64,
	/// Upper bound of the confidence interval around `price`
	pub confidence_upper: f64,
	/// Label of the scoring model that produced the estimate
	pub model: String,
	/// Number of features the model consumed
	pub features_used: u32,
	/// Request-completion instant stamped from the gateway's clock (RFC3339)
	pub prediction_time: String,
	/// Gateway-side wall-clock latency including the inference call
	pub processing_time_ms: f64,
}

impl HousingPredictionResponse {
	/// Shape a backend score into the public response
	pub fn from_score(
		score: HousingScore,
		prediction_time: String,
		processing_time_ms: f64,
	) -> Self {
		Self {
			price: score.price,
			price_log: score.price_log,
			confidence_lower: score.confidence_lower,
			confidence_upper: score.confidence_upper,
			model: score.model,
			features_used: score.features_used,
			prediction_time,
			processing_time_ms,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_score_preserves_interval() {
		let score = HousingScore {
			price: 285_000.0,
			price_log: Some(12.56),
			confidence_lower: 160_000.0,
			confidence_upper: 410_000.0,
			model: "XGBoost".to_string(),
			features_used: 12,
		};

		let response = HousingPredictionResponse::from_score(
			score,
			"2025-06-01T12:00:00Z".to_string(),
			42.5,
		);

		assert!(response.confidence_lower <= response.price);
		assert!(response.price <= response.confidence_upper);
		assert_eq!(response.processing_time_ms, 42.5);
	}

	#[test]
	fn test_price_log_omitted_when_absent() {
		let score = HousingScore {
			price: 100_000.0,
			price_log: None,
			confidence_lower: 90_000.0,
			confidence_upper: 110_000.0,
			model: "XGBoost".to_string(),
			features_used: 12,
		};

		let response = HousingPredictionResponse::from_score(
			score,
			"2025-06-01T12:00:00Z".to_string(),
			1.0,
		);
		let json = serde_json::to_value(&response).unwrap();

		assert!(json.get("price_log").is_none());
	}
}
