//! Test server for integration tests

use std::sync::Arc;

use axum::Router;
use tokio::task::JoinHandle;

use cloudai_gateway::mocks::MockBackend;
use cloudai_gateway::{GatewayBuilder, InferenceBackend};

/// Spawned gateway instance bound to an ephemeral port
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

impl TestServer {
	/// Spawn a gateway backed by a healthy scripted backend
	///
	/// Returns the backend handle too; its call counter is shared with
	/// the clone inside the server.
	#[allow(dead_code)]
	pub async fn spawn() -> Result<(Self, MockBackend), Box<dyn std::error::Error>> {
		let backend = MockBackend::new();
		let server = Self::spawn_with_backend(backend.clone()).await?;
		Ok((server, backend))
	}

	/// Spawn a gateway wired to the given backend
	#[allow(dead_code)]
	pub async fn spawn_with_backend(
		backend: MockBackend,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let (router, _state) = GatewayBuilder::new()
			.with_backend(Arc::new(backend) as Arc<dyn InferenceBackend>)
			.start()?;

		Self::spawn_server_with_app(router).await
	}

	/// Common server spawning logic
	pub async fn spawn_server_with_app(app: Router) -> Result<Self, Box<dyn std::error::Error>> {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
			.await
			.expect("bind test port");
		let addr = listener.local_addr().unwrap();
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		// Give server time to start
		tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

		Ok(Self { base_url, handle })
	}

	#[allow(dead_code)]
	pub fn abort(self) {
		self.handle.abort();
	}
}
