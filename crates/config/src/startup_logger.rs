//! Service startup logging for the Cloud AI gateway
//!
//! Logs service information, environment details and the configured
//! endpoints at startup.

use std::env;

use tracing::info;

use crate::Settings;

/// Logs service information at startup
pub fn log_service_info(settings: &Settings) {
	let service_name = "cloudai-gateway";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== Cloud AI API Gateway Starting ===");
	info!("Service: {} v{}", service_name, service_version);
	info!("Platform: {} ({})", env::consts::OS, env::consts::ARCH);

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("Log Level (env): {}", rust_log);
	}

	info!(
		"Inference service: {} (health timeout {}ms, predict timeout {}ms)",
		settings.backend.endpoint,
		settings.backend.health_timeout_ms,
		settings.backend.predict_timeout_ms
	);
	info!("Endpoints:");
	info!("  GET  /                     - Service info");
	info!("  GET  /health               - Health check");
	info!("  POST /predict/housing      - Predict UK housing price");
	info!("  POST /predict/electricity  - Predict UK electricity demand (gated)");

	info!(
		"Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs service shutdown information
pub fn log_service_shutdown() {
	info!("Cloud AI API Gateway shutting down");
	info!(
		"Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs startup completion once the listener is bound
pub fn log_startup_complete(bind_address: &str) {
	info!("Cloud AI API Gateway started successfully");
	info!("Server listening on: {}", bind_address);
	info!("Ready to accept requests");
}
