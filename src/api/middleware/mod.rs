//! HTTP middleware for request processing and protection.
//!
//! Provides bearer-token authentication and observability middleware.

pub mod auth;
pub mod tracing;
