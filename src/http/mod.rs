//! HTTP client layer: `InfrastructureHttp` and the response envelope.

pub mod client;
pub mod envelope;

pub use client::{Credentials, HttpConfig, InfrastructureHttp};
