//! Fetch-and-merge use case.
//!
//! A request selector is resolved against the category table, the mapped
//! upstream source is queried once through [`ports::NumberSource`], and the
//! batch is merged into the shared [`WindowStore`](crate::WindowStore).

pub mod ports;
pub mod service;

pub use service::NumbersService;
