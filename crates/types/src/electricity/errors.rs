//! Error types for electricity prediction requests

use thiserror::Error;

/// Validation errors for electricity demand requests
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ElectricityValidationError {
	#[error("Invalid year {year}: must be between 2020 and 2030")]
	YearOutOfRange { year: i32 },

	#[error("Invalid month {month}: must be between 1 and 12")]
	MonthOutOfRange { month: u32 },

	#[error("Invalid day {day}: must be between 1 and 31")]
	DayOutOfRange { day: u32 },

	#[error("Invalid hour {hour}: must be between 0 and 23")]
	HourOutOfRange { hour: u32 },
}

impl ElectricityValidationError {
	/// Name of the request field that failed validation
	pub fn field(&self) -> &'static str {
		match self {
			Self::YearOutOfRange { .. } => "year",
			Self::MonthOutOfRange { .. } => "month",
			Self::DayOutOfRange { .. } => "day",
			Self::HourOutOfRange { .. } => "hour",
		}
	}
}
