//! HTTP protocol layer module
//!
//! Response construction, decoupled from the routes that use it.

pub mod response;

// Re-export commonly used builders
pub use response::{build_404_response, build_json_response};
