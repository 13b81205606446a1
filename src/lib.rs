//! `pulse_server`: a small JSON status service.
//!
//! Serves `/` (greeting, timestamp, version) and `/health` (readiness and
//! uptime) over HTTP/1.1; every other path is a plain-text 404.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

pub use error::ServerError;
