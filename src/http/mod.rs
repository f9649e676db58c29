//! # HTTP Dispatch
//!
//! Outbound request execution and asynchronous outcome delivery.

pub mod service;

pub use service::{HttpService, OutcomeMessage};
