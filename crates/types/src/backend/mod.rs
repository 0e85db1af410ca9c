//! Consumed interface of the inference service
//!
//! The gateway treats the inference service as an opaque scoring
//! collaborator: a narrow trait, the wire models it answers with, and an
//! error taxonomy that keeps infrastructure failures distinguishable from
//! backend rejections.

pub mod errors;
pub mod models;
pub mod traits;

pub use errors::BackendError;
pub use models::{BackendErrorBody, BackendHealth, HousingScore};
pub use traits::InferenceBackend;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;
