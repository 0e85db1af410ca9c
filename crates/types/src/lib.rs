//! Cloud AI Gateway Types
//!
//! Shared models and traits for the prediction gateway. This crate
//! contains all domain models organized by prediction domain, plus the
//! consumed interface of the inference service.

pub mod backend;
pub mod electricity;
pub mod housing;
pub mod models;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use housing::{
	HousingPredictionRequest, HousingPredictionResponse, HousingValidationError,
	HousingValidationResult,
};

pub use electricity::{
	ElectricityPredictionRequest, ElectricityPredictionResponse, ElectricityValidationError,
	ElectricityValidationResult,
};

pub use backend::{
	BackendError, BackendErrorBody, BackendHealth, BackendResult, HousingScore, InferenceBackend,
};

pub use models::{HealthState, HealthStatus};
