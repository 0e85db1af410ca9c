//! Cloud AI Gateway Library
//!
//! A validating, forwarding HTTP entry point for the Cloud AI prediction
//! services: range and enum checks at the edge, a single bounded call to
//! the inference service, timing-enriched responses.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

// Core domain types - the most commonly used types
pub use cloudai_types::{
	// External dependencies for convenience
	chrono,
	serde_json,
	// Consumed inference service interface
	BackendError,
	BackendHealth,
	BackendResult,
	// Primary domain entities
	ElectricityPredictionRequest,
	ElectricityPredictionResponse,
	ElectricityValidationError,
	HealthState,
	HealthStatus,
	HousingPredictionRequest,
	HousingPredictionResponse,
	HousingScore,
	HousingValidationError,
	InferenceBackend,
};

// Service layer
pub use cloudai_service::{HealthService, PredictionService, PredictionServiceError};

// Backend client
pub use cloudai_backend::HttpInferenceBackend;

// API layer
pub use cloudai_api::{create_router, AppState};

// Config
pub use cloudai_config::{load_config, Settings};

// Module aliases mirroring the crate layout
pub mod types {
	pub use cloudai_types::*;
}

pub mod config {
	pub use cloudai_config::*;
}

pub mod backend {
	pub use cloudai_backend::*;
}

pub mod service {
	pub use cloudai_service::*;
}

pub mod api {
	pub use cloudai_api::*;
}

pub mod mocks;

// Re-export external dependencies for examples and tests
pub use async_trait;

/// Builder pattern for wiring the gateway
///
/// Settings come from `load_config` unless provided; the backend defaults
/// to an `HttpInferenceBackend` built from those settings, and tests swap
/// in a double through `with_backend`.
pub struct GatewayBuilder {
	settings: Option<Settings>,
	backend: Option<Arc<dyn InferenceBackend>>,
}

impl Default for GatewayBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl GatewayBuilder {
	pub fn new() -> Self {
		Self {
			settings: None,
			backend: None,
		}
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Swap the inference backend; test doubles plug in here
	pub fn with_backend(mut self, backend: Arc<dyn InferenceBackend>) -> Self {
		self.backend = Some(backend);
		self
	}

	/// Wire services and return the router with its state
	///
	/// Fails fast on a malformed backend endpoint; the gateway refuses to
	/// start around configuration it cannot honor.
	pub fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.unwrap_or_default();

		let backend: Arc<dyn InferenceBackend> = match self.backend {
			Some(backend) => backend,
			None => Arc::new(HttpInferenceBackend::new(&settings.backend)?),
		};

		info!(backend = backend.name(), "gateway configured");

		let app_state = AppState {
			prediction_service: Arc::new(PredictionService::new(Arc::clone(&backend))),
			health_service: Arc::new(HealthService::new(backend)),
		};

		let router = create_router().with_state(app_state.clone());
		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	///
	/// Loads .env and configuration, initializes tracing, then binds and
	/// serves until the process exits.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		dotenvy::dotenv().ok();

		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config().unwrap_or_default(),
		};

		init_tracing_from_settings(&settings);
		cloudai_config::log_service_info(&settings);

		let bind_address = format!("{}:{}", settings.server.host, settings.server.port);
		let addr: SocketAddr = bind_address.parse()?;

		let (router, _state) = self.with_settings(settings).start()?;

		let listener = tokio::net::TcpListener::bind(addr).await?;
		cloudai_config::log_startup_complete(&bind_address);

		axum::serve(listener, router).await?;
		Ok(())
	}
}

/// Initialize tracing with configuration-based settings
fn init_tracing_from_settings(settings: &Settings) {
	use cloudai_config::LogFormat;

	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.logging.level));

	match settings.logging.format {
		LogFormat::Json => {
			let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);
			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		}
		LogFormat::Pretty => {
			let subscriber = tracing_subscriber::fmt()
				.pretty()
				.with_env_filter(env_filter);
			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		}
		LogFormat::Compact => {
			let subscriber = tracing_subscriber::fmt()
				.compact()
				.with_env_filter(env_filter);
			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		}
	}

	info!(
		"Logging configuration applied: level={}, structured={}",
		settings.logging.level, settings.logging.structured
	);
}
