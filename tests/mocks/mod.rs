//! Shared test infrastructure
//!
//! Backends come from `cloudai_gateway::mocks`; this module adds the
//! spawned test server and request fixtures.

pub mod fixtures;
pub mod test_server;

pub use test_server::TestServer;
