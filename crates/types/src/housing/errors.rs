//! Error types for housing prediction requests

use thiserror::Error;

/// Validation errors for housing prediction requests
///
/// Every variant names the offending field and its expected domain so
/// callers never see a bare "bad request".
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HousingValidationError {
	#[error("Invalid property_type '{value}': must be one of D, S, T, F, O")]
	InvalidPropertyType { value: String },

	#[error("Invalid is_new '{value}': must be 'Y' or 'N'")]
	InvalidIsNew { value: String },

	#[error("Invalid duration '{value}': must be one of F, L, U")]
	InvalidDuration { value: String },

	#[error("Invalid county: must be a non-empty string")]
	EmptyCounty,

	#[error("Invalid year {year}: must be between 1995 and 2025")]
	YearOutOfRange { year: i32 },

	#[error("Invalid month {month}: must be between 1 and 12")]
	MonthOutOfRange { month: u32 },
}

impl HousingValidationError {
	/// Name of the request field that failed validation
	pub fn field(&self) -> &'static str {
		match self {
			Self::InvalidPropertyType { .. } => "property_type",
			Self::InvalidIsNew { .. } => "is_new",
			Self::InvalidDuration { .. } => "duration",
			Self::EmptyCounty => "county",
			Self::YearOutOfRange { .. } => "year",
			Self::MonthOutOfRange { .. } => "month",
		}
	}
}
