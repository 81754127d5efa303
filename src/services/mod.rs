//! Services for talking to Koios.
//!
//! - `client`: endpoint adapters
//! - `pagination`: offset based page walking
//! - `transport`: request execution and retries

pub mod client;
pub mod pagination;
pub mod transport;
