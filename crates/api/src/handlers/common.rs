use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use cloudai_service::PredictionServiceError;
use cloudai_types::backend::BackendError;

/// Stable machine-readable error codes
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const INVALID_REQUEST_BODY: &str = "INVALID_REQUEST_BODY";
pub const BACKEND_UNAVAILABLE: &str = "BACKEND_UNAVAILABLE";
pub const BACKEND_ERROR: &str = "BACKEND_ERROR";
pub const BACKEND_CONTRACT_MISMATCH: &str = "BACKEND_CONTRACT_MISMATCH";
pub const NOT_IMPLEMENTED: &str = "NOT_IMPLEMENTED";

/// Error response format shared by handlers
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ErrorResponse {
	/// Machine-readable code clients can branch on
	pub error: String,
	pub message: String,
	/// Backend diagnostic, preserved verbatim when one exists
	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<serde_json::Value>,
	pub timestamp: i64,
}

impl ErrorResponse {
	pub fn new(error: &str, message: impl Into<String>) -> Self {
		Self {
			error: error.to_string(),
			message: message.into(),
			details: None,
			timestamp: chrono::Utc::now().timestamp(),
		}
	}

	pub fn with_details(mut self, details: serde_json::Value) -> Self {
		self.details = Some(details);
		self
	}
}

/// Map a forwarding failure onto the gateway's error surface
///
/// A backend 400 after gateway-side validation means the wire contract
/// drifted, not that the client erred, so it gets its own 500-class code
/// for alerting. Connection failures and timeouts surface as 502.
pub fn backend_error_response(err: &PredictionServiceError) -> (StatusCode, Json<ErrorResponse>) {
	let backend_err = err.backend_error();

	let (status, code, message) = match backend_err {
		BackendError::Connection(_) | BackendError::Timeout { .. } => (
			StatusCode::BAD_GATEWAY,
			BACKEND_UNAVAILABLE,
			"Inference service is unreachable".to_string(),
		),
		BackendError::HttpStatus {
			status_code: 400, ..
		} => (
			StatusCode::INTERNAL_SERVER_ERROR,
			BACKEND_CONTRACT_MISMATCH,
			"Inference service rejected a request the gateway validated".to_string(),
		),
		BackendError::HttpStatus { status_code, .. } => (
			StatusCode::INTERNAL_SERVER_ERROR,
			BACKEND_ERROR,
			format!("Inference service returned status {status_code}"),
		),
		BackendError::InvalidResponse { .. } | BackendError::InvalidEndpoint { .. } => (
			StatusCode::INTERNAL_SERVER_ERROR,
			BACKEND_ERROR,
			"Inference service returned an unusable response".to_string(),
		),
	};

	let details = backend_error_details(backend_err);
	(
		status,
		Json(ErrorResponse::new(code, message).with_details(details)),
	)
}

/// Preserve the backend's own diagnostic as nested details, parsing its
/// JSON error body when it has one; never a stack trace
fn backend_error_details(err: &BackendError) -> serde_json::Value {
	match err {
		BackendError::HttpStatus { body, .. } => serde_json::from_str(body)
			.unwrap_or_else(|_| serde_json::Value::String(body.clone())),
		other => serde_json::Value::String(other.to_string()),
	}
}
