//! Cloud AI Backend Client
//!
//! Reqwest implementation of the inference service interface the gateway
//! consumes.

pub mod http_backend;

pub use http_backend::HttpInferenceBackend;
