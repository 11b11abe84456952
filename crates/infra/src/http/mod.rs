//! HTTP client used for upstream calls.

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
