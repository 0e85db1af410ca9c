use axum::response::Json;
use serde_json::{json, Value};

use cloudai_service::SERVICE_NAME;

/// GET / - service banner for humans poking the API
pub async fn service_info() -> Json<Value> {
	Json(json!({
		"service": SERVICE_NAME,
		"version": env!("CARGO_PKG_VERSION"),
		"endpoints": [
			"GET  /health",
			"POST /predict/housing",
			"POST /predict/electricity",
		],
	}))
}
