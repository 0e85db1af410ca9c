//! Error types for inference service operations

use thiserror::Error;

/// Failures while talking to the inference service
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackendError {
	#[error("Invalid inference service endpoint '{endpoint}': {reason}")]
	InvalidEndpoint { endpoint: String, reason: String },

	#[error("Connection to inference service failed: {0}")]
	Connection(String),

	#[error("Inference service timed out after {timeout_ms}ms")]
	Timeout { timeout_ms: u64 },

	#[error("Inference service returned HTTP {status_code}: {body}")]
	HttpStatus { status_code: u16, body: String },

	#[error("Invalid inference service response: {reason}")]
	InvalidResponse { reason: String },
}

impl BackendError {
	/// HTTP status the inference service answered with, when it answered
	pub fn status_code(&self) -> Option<u16> {
		match self {
			BackendError::HttpStatus { status_code, .. } => Some(*status_code),
			_ => None,
		}
	}

	/// True for failures where the service never produced an answer
	pub fn is_unavailable(&self) -> bool {
		matches!(
			self,
			BackendError::Connection(_) | BackendError::Timeout { .. }
		)
	}
}
