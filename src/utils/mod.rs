//! Utility modules for common functionality.
//!
//! - http: retryable HTTP client construction
//! - logging: logging setup for applications using the client

pub mod http;
pub mod logging;
