//! Electricity demand prediction domain models
//!
//! The gateway route for this domain is deliberately gated behind a 501
//! until the scoring path exists; the models and their validation are
//! complete and ready for when it opens.

pub mod errors;
pub mod request;
pub mod response;

pub use errors::ElectricityValidationError;
pub use request::ElectricityPredictionRequest;
pub use response::ElectricityPredictionResponse;

/// Result type for electricity request validation
pub type ElectricityValidationResult<T> = Result<T, ElectricityValidationError>;
