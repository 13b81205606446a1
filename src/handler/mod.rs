//! Request handler module
//!
//! Maps request paths to the service's fixed responses.

pub mod health;
pub mod home;
pub mod router;

// Re-export main entry point
pub use router::{handle_request, route};
