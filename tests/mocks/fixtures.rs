//! Shared request fixtures

#![allow(dead_code)]

use serde_json::{json, Value};

/// The canonical valid housing request from the API docs
pub fn valid_housing_request() -> Value {
	json!({
		"property_type": "T",
		"is_new": "N",
		"duration": "F",
		"county": "GREATER LONDON",
		"year": 2016,
		"month": 6
	})
}

/// Valid electricity request for the gated endpoint
pub fn valid_electricity_request() -> Value {
	json!({
		"year": 2025,
		"month": 1,
		"day": 15,
		"hour": 12
	})
}
