//! Configuration settings structures

use serde::{Deserialize, Serialize};

/// Main application settings
///
/// Constructed once at process start and handed to the builder by value;
/// nothing here is mutated afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub backend: BackendSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 8080,
		}
	}
}

/// Inference service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct BackendSettings {
	/// Base URL of the inference service
	pub endpoint: String,
	/// Liveness probe timeout in milliseconds; keep this short, the
	/// health endpoint blocks on it
	pub health_timeout_ms: u64,
	/// Prediction forwarding timeout in milliseconds; an unbounded call
	/// would pin a handler for as long as the backend stalls
	pub predict_timeout_ms: u64,
}

impl Default for BackendSettings {
	fn default() -> Self {
		Self {
			endpoint: "http://ml-service:5000".to_string(),
			health_timeout_ms: 3_000,
			predict_timeout_ms: 5_000,
		}
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Compact,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let settings = Settings::default();

		assert_eq!(settings.server.port, 8080);
		assert_eq!(settings.backend.endpoint, "http://ml-service:5000");
		assert_eq!(settings.backend.health_timeout_ms, 3_000);
		assert_eq!(settings.backend.predict_timeout_ms, 5_000);
		assert_eq!(settings.logging.level, "info");
	}

	#[test]
	fn test_partial_deserialization_fills_defaults() {
		let settings: Settings =
			serde_json::from_str(r#"{"server": {"port": 9000}}"#).unwrap();

		assert_eq!(settings.server.port, 9000);
		assert_eq!(settings.server.host, "0.0.0.0");
		assert_eq!(settings.backend.predict_timeout_ms, 5_000);
	}
}
