//! HTTP transport layer: `FundingHttp` with permission-based retry policies.

pub mod client;
pub mod retry;

pub use client::FundingHttp;
pub use retry::{RetryConfig, RetryPolicy};
