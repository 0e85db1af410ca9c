use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;

use crate::handlers::common::{self, ErrorResponse};
use crate::state::AppState;
use cloudai_types::housing::{HousingPredictionRequest, HousingPredictionResponse};

/// POST /predict/housing - validate, forward once, shape the response
///
/// Validation runs entirely before the inference call; an invalid request
/// never reaches the backend.
#[cfg_attr(feature = "openapi", utoipa::path(
	post,
	path = "/predict/housing",
	request_body = HousingPredictionRequest,
	responses(
		(status = 200, description = "Prediction served", body = HousingPredictionResponse),
		(status = 400, description = "Invalid request", body = ErrorResponse),
		(status = 500, description = "Backend failure", body = ErrorResponse),
		(status = 502, description = "Backend unreachable", body = ErrorResponse)
	),
	tag = "predictions"
))]
pub async fn post_housing(
	State(state): State<AppState>,
	body: Result<Json<HousingPredictionRequest>, JsonRejection>,
) -> Result<Json<HousingPredictionResponse>, (StatusCode, Json<ErrorResponse>)> {
	// Wrong-typed or malformed JSON is a client error, not a coercion
	let Json(request) = body.map_err(|rejection| {
		(
			StatusCode::BAD_REQUEST,
			Json(ErrorResponse::new(
				common::INVALID_REQUEST_BODY,
				rejection.body_text(),
			)),
		)
	})?;

	if let Err(e) = request.validate() {
		info!(field = e.field(), "rejected housing request");
		return Err((
			StatusCode::BAD_REQUEST,
			Json(ErrorResponse::new(common::VALIDATION_ERROR, e.to_string())),
		));
	}

	match state.prediction_service.predict_housing(&request).await {
		Ok(response) => Ok(Json(response)),
		Err(e) => Err(common::backend_error_response(&e)),
	}
}
