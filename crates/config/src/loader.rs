//! Configuration loading utilities

use config::{Config, ConfigError, Environment, File};

use crate::Settings;

/// Load configuration from the optional config file and the environment
///
/// Precedence, lowest to highest: built-in defaults, `config/config.*`,
/// `GATEWAY__`-prefixed variables (e.g. `GATEWAY__SERVER__PORT`), then
/// the `PORT` and `ML_SERVICE_URL` variables the deployment scripts set.
pub fn load_config() -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.add_source(
			Environment::with_prefix("GATEWAY")
				.prefix_separator("__")
				.separator("__")
				.try_parsing(true),
		)
		.build()?;

	let mut settings: Settings = s.try_deserialize()?;

	if let Ok(port) = std::env::var("PORT") {
		settings.server.port = port
			.parse()
			.map_err(|_| ConfigError::Message(format!("invalid PORT value: {port}")))?;
	}

	if let Ok(endpoint) = std::env::var("ML_SERVICE_URL") {
		settings.backend.endpoint = endpoint;
	}

	Ok(settings)
}
