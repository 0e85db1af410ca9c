//! Cloud AI Gateway Services
//!
//! The layer between the API handlers and the inference service:
//! forwarding with timing metadata, and dependency health translation.

pub mod health;
pub mod prediction;

pub use health::{HealthService, SERVICE_NAME};
pub use prediction::{PredictionService, PredictionServiceError};
