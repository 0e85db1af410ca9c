//! Electricity prediction request model and validation

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::{ElectricityValidationError, ElectricityValidationResult};

/// Earliest year the demand model covers
pub const MIN_YEAR: i32 = 2020;

/// Latest year the demand model covers
pub const MAX_YEAR: i32 = 2030;

fn default_hour() -> u32 {
	12
}

/// API request body for POST /predict/electricity
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ElectricityPredictionRequest {
	/// Year of the forecast instant
	pub year: i32,
	/// Month of the forecast instant
	pub month: u32,
	/// Day of month; accepted as 1-31 without month-specific day counts
	pub day: u32,
	/// Hour of day, defaults to noon when omitted
	#[serde(default = "default_hour")]
	pub hour: u32,
}

impl ElectricityPredictionRequest {
	/// Validate the request against the demand model's input domain
	///
	/// Fixed check order, first failure wins: year, month, day, hour.
	pub fn validate(&self) -> ElectricityValidationResult<()> {
		if self.year < MIN_YEAR || self.year > MAX_YEAR {
			return Err(ElectricityValidationError::YearOutOfRange { year: self.year });
		}

		if self.month < 1 || self.month > 12 {
			return Err(ElectricityValidationError::MonthOutOfRange { month: self.month });
		}

		if self.day < 1 || self.day > 31 {
			return Err(ElectricityValidationError::DayOutOfRange { day: self.day });
		}

		if self.hour > 23 {
			return Err(ElectricityValidationError::HourOutOfRange { hour: self.hour });
		}

		Ok(())
	}

	/// The instant this request describes, when the calendar date exists
	///
	/// Day validation accepts 1-31 for any month, so Feb 30 passes
	/// `validate` but has no timestamp.
	pub fn timestamp(&self) -> Option<NaiveDateTime> {
		NaiveDate::from_ymd_opt(self.year, self.month, self.day)
			.and_then(|date| date.and_hms_opt(self.hour, 0, 0))
	}
}
