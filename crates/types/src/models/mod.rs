//! Shared gateway models

pub mod health;

pub use health::{HealthState, HealthStatus};
