//! Cloud AI Gateway API
//!
//! Axum-based routes and handlers for the prediction gateway.

pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;

#[cfg(feature = "openapi")]
pub mod openapi;
