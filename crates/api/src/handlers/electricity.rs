use axum::{http::StatusCode, response::Json};

use crate::handlers::common::{self, ErrorResponse};

/// POST /predict/electricity - deliberately gated
///
/// Answers 501 with the stable NOT_IMPLEMENTED code for any payload so
/// clients can feature-detect instead of mistaking the gap for a server
/// fault. The body is not inspected until the scoring path exists.
#[cfg_attr(feature = "openapi", utoipa::path(
	post,
	path = "/predict/electricity",
	responses(
		(status = 501, description = "Not implemented yet", body = ErrorResponse)
	),
	tag = "predictions"
))]
pub async fn post_electricity() -> (StatusCode, Json<ErrorResponse>) {
	(
		StatusCode::NOT_IMPLEMENTED,
		Json(ErrorResponse::new(
			common::NOT_IMPLEMENTED,
			"Electricity prediction is not implemented yet",
		)),
	)
}
