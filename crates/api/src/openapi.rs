//! OpenAPI documentation (enabled with the `openapi` feature)

use utoipa::OpenApi;

use crate::handlers;
use crate::handlers::common::ErrorResponse;
use cloudai_types::{
	ElectricityPredictionRequest, ElectricityPredictionResponse, HealthState, HealthStatus,
	HousingPredictionRequest, HousingPredictionResponse,
};

#[derive(OpenApi)]
#[openapi(
	info(
		title = "Cloud AI API Gateway",
		description = "Validating, forwarding entry point for the Cloud AI prediction services"
	),
	paths(
		handlers::health::health,
		handlers::housing::post_housing,
		handlers::electricity::post_electricity,
	),
	components(schemas(
		HousingPredictionRequest,
		HousingPredictionResponse,
		ElectricityPredictionRequest,
		ElectricityPredictionResponse,
		HealthStatus,
		HealthState,
		ErrorResponse,
	)),
	tags(
		(name = "health", description = "Gateway and dependency health"),
		(name = "predictions", description = "Prediction forwarding endpoints")
	)
)]
pub struct ApiDoc;
