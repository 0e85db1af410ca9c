//! E2E tests for the health and info endpoints

mod mocks;

use reqwest::Client;
use serde_json::Value;

use cloudai_gateway::mocks::MockBackend;
use mocks::TestServer;

#[tokio::test]
async fn test_health_reports_healthy_backend() {
	let (server, _backend) = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/health", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::OK);

	let body: Value = resp.json().await.unwrap();
	assert_eq!(body["status"], "healthy");
	assert_eq!(body["dependency_healthy"], true);
	assert_eq!(body["dependency_detail"], "OK");
	assert_eq!(body["service"], "Cloud AI API Gateway");
	assert!(body["version"].as_str().is_some());

	server.abort();
}

#[tokio::test]
async fn test_health_reports_degraded_when_backend_unreachable() {
	let backend = MockBackend::new().unhealthy();
	let server = TestServer::spawn_with_backend(backend)
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/health", server.base_url))
		.send()
		.await
		.unwrap();

	// Degraded is still a 200; the endpoint itself never fails
	assert_eq!(resp.status(), reqwest::StatusCode::OK);

	let body: Value = resp.json().await.unwrap();
	assert_eq!(body["status"], "degraded");
	assert_eq!(body["dependency_healthy"], false);
	assert!(body["dependency_detail"]
		.as_str()
		.unwrap()
		.contains("connection refused"));

	server.abort();
}

#[tokio::test]
async fn test_service_info_lists_endpoints() {
	let (server, _backend) = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::OK);

	let body: Value = resp.json().await.unwrap();
	assert_eq!(body["service"], "Cloud AI API Gateway");
	let endpoints = body["endpoints"].as_array().unwrap();
	assert!(endpoints.iter().any(|e| e.as_str().unwrap().contains("/predict/housing")));

	server.abort();
}

#[tokio::test]
async fn test_unknown_endpoint_404() {
	let (server, _backend) = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/unknown-endpoint", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

	server.abort();
}
