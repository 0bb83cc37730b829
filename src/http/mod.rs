//! HTTP client module
//!
//! Thin client over `reqwest` for the breeds API.
//!
//! # Features
//!
//! - **Query parameters**: Per-request configuration
//! - **Status classification**: Non-2xx responses become `Error::HttpStatus`
//! - **JSON decoding**: Typed response bodies via serde
//!
//! Requests are sent once. There is no retry, backoff or rate limiting, and
//! no timeout unless one is configured.

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};

#[cfg(test)]
mod tests;
