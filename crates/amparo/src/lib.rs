//! The shared library for Amparo, a management console for a social-services network.
//!
//! This library provides the core functionality for the console front-end:
//! the authenticated API client and its interceptors, session and identity
//! handling, data transfer types, error handling, logging, and macros.

pub mod api;
pub mod claims;
pub mod data;
pub mod errors;
pub mod log;
pub mod macros;
pub mod session;

pub use serde;
pub use serde_json;
pub use tracing;
