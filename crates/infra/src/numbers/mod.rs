//! Upstream number sources
//!
//! HTTP implementation of the core [`NumberSource`](numwin_core::NumberSource)
//! port. Credentials are turned into a single `Authorization` header when the
//! source is built and attached to every request as a default header.

pub mod source;

pub use source::{authorization_header, HttpNumberSource};
