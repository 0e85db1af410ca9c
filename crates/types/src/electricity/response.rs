//! Electricity prediction response model

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// API response body for POST /predict/electricity
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ElectricityPredictionResponse {
	/// Forecast national demand in megawatts
	pub demand_mw: f64,
	/// ISO-8601 instant the forecast refers to, built from the request fields
	pub datetime: String,
	/// Label of the scoring model that produced the forecast
	pub model: String,
}
