//! Housing prediction request model and validation

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::{HousingValidationError, HousingValidationResult};

/// Valid property type codes (Land Registry price-paid convention):
/// Detached, Semi-detached, Terraced, Flat, Other
pub const PROPERTY_TYPES: [&str; 5] = ["D", "S", "T", "F", "O"];

/// Valid tenure codes: Freehold, Leasehold, Unknown
pub const DURATIONS: [&str; 3] = ["F", "L", "U"];

/// Earliest transfer year present in the training data
pub const MIN_YEAR: i32 = 1995;

/// Latest transfer year the model was trained on
pub const MAX_YEAR: i32 = 2025;

/// API request body for POST /predict/housing
///
/// Absent fields deserialize to defaults that can never pass `validate`,
/// so a missing field surfaces as a 400 naming that field instead of a
/// parse error, and is never silently accepted.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(default)]
pub struct HousingPredictionRequest {
	/// Property type code: D, S, T, F or O
	pub property_type: String,
	/// New-build flag: Y or N
	pub is_new: String,
	/// Tenure code: F, L or U
	pub duration: String,
	/// UK county name, matched case-insensitively
	pub county: String,
	/// Year of transfer
	pub year: i32,
	/// Month of transfer
	pub month: u32,
}

impl HousingPredictionRequest {
	/// Validate the request against the scoring model's input domain
	///
	/// Checks run in a fixed order and stop at the first failure, so a
	/// single-field mistake always maps to the same error:
	/// property_type, is_new, duration, county, year, month.
	pub fn validate(&self) -> HousingValidationResult<()> {
		if !PROPERTY_TYPES.contains(&self.property_type.as_str()) {
			return Err(HousingValidationError::InvalidPropertyType {
				value: self.property_type.clone(),
			});
		}

		if self.is_new != "Y" && self.is_new != "N" {
			return Err(HousingValidationError::InvalidIsNew {
				value: self.is_new.clone(),
			});
		}

		if !DURATIONS.contains(&self.duration.as_str()) {
			return Err(HousingValidationError::InvalidDuration {
				value: self.duration.clone(),
			});
		}

		if self.county.trim().is_empty() {
			return Err(HousingValidationError::EmptyCounty);
		}

		if self.year < MIN_YEAR || self.year > MAX_YEAR {
			return Err(HousingValidationError::YearOutOfRange { year: self.year });
		}

		if self.month < 1 || self.month > 12 {
			return Err(HousingValidationError::MonthOutOfRange { month: self.month });
		}

		Ok(())
	}

	/// County in its canonical upper-cased form, as the scoring model expects
	pub fn canonical_county(&self) -> String {
		self.county.trim().to_uppercase()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn valid_request() -> HousingPredictionRequest {
		HousingPredictionRequest {
			property_type: "T".to_string(),
			is_new: "N".to_string(),
			duration: "F".to_string(),
			county: "GREATER LONDON".to_string(),
			year: 2016,
			month: 6,
		}
	}

	#[test]
	fn test_valid_request_passes() {
		assert!(valid_request().validate().is_ok());
	}

	#[test]
	fn test_all_property_types_accepted() {
		for code in PROPERTY_TYPES {
			let mut request = valid_request();
			request.property_type = code.to_string();
			assert!(request.validate().is_ok(), "property_type {code} rejected");
		}
	}

	#[test]
	fn test_invalid_property_type() {
		let mut request = valid_request();
		request.property_type = "INVALID".to_string();

		let err = request.validate().unwrap_err();
		assert_eq!(err.field(), "property_type");
		assert!(err.to_string().contains("property_type"));
	}

	#[test]
	fn test_lowercase_codes_rejected() {
		// Codes are case-sensitive single letters; 't' is not a valid type
		let mut request = valid_request();
		request.property_type = "t".to_string();
		assert!(request.validate().is_err());
	}

	#[test]
	fn test_invalid_is_new() {
		let mut request = valid_request();
		request.is_new = "yes".to_string();

		let err = request.validate().unwrap_err();
		assert_eq!(err.field(), "is_new");
	}

	#[test]
	fn test_invalid_duration() {
		let mut request = valid_request();
		request.duration = "X".to_string();

		let err = request.validate().unwrap_err();
		assert_eq!(err.field(), "duration");
	}

	#[test]
	fn test_empty_county() {
		let mut request = valid_request();
		request.county = "   ".to_string();

		let err = request.validate().unwrap_err();
		assert_eq!(err, HousingValidationError::EmptyCounty);
		assert_eq!(err.field(), "county");
	}

	#[test]
	fn test_year_boundaries() {
		for year in [1995, 2025] {
			let mut request = valid_request();
			request.year = year;
			assert!(request.validate().is_ok(), "year {year} rejected");
		}

		for year in [1994, 2026] {
			let mut request = valid_request();
			request.year = year;
			let err = request.validate().unwrap_err();
			assert_eq!(err.field(), "year", "year {year} accepted");
		}
	}

	#[test]
	fn test_month_boundaries() {
		for month in [1, 12] {
			let mut request = valid_request();
			request.month = month;
			assert!(request.validate().is_ok(), "month {month} rejected");
		}

		for month in [0, 13] {
			let mut request = valid_request();
			request.month = month;
			let err = request.validate().unwrap_err();
			assert_eq!(err.field(), "month", "month {month} accepted");
		}
	}

	#[test]
	fn test_first_failure_is_deterministic() {
		// With several invalid fields the earliest check in the fixed
		// order wins every time
		let request = HousingPredictionRequest {
			property_type: "INVALID".to_string(),
			is_new: "N".to_string(),
			duration: "F".to_string(),
			county: "KENT".to_string(),
			year: 1800,
			month: 6,
		};

		for _ in 0..3 {
			let err = request.validate().unwrap_err();
			assert_eq!(err.field(), "property_type");
		}
	}

	#[test]
	fn test_missing_field_fails_validation_by_name() {
		let request: HousingPredictionRequest = serde_json::from_str(
			r#"{"property_type": "T", "duration": "F", "county": "KENT", "year": 2016, "month": 6}"#,
		)
		.unwrap();

		let err = request.validate().unwrap_err();
		assert_eq!(err.field(), "is_new");
	}

	#[test]
	fn test_sparse_payload_names_invalid_value_field() {
		// {"property_type":"INVALID","year":1800} with everything else
		// absent still names an invalid-value field, not a parse error
		let request: HousingPredictionRequest =
			serde_json::from_str(r#"{"property_type": "INVALID", "year": 1800}"#).unwrap();

		let err = request.validate().unwrap_err();
		assert_eq!(err.field(), "property_type");
	}

	#[test]
	fn test_canonical_county() {
		let mut request = valid_request();
		request.county = "  greater london ".to_string();
		assert_eq!(request.canonical_county(), "GREATER LONDON");
	}
}
