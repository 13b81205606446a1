//! Server error types
//!
//! Every variant here is fatal: it is only produced while starting up or
//! while the accept loop is being torn down.

use std::net::SocketAddr;

/// Fatal server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open log file: {0}")]
    Logger(#[source] std::io::Error),

    #[error("Failed to build async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_names_address() {
        let addr: SocketAddr = "0.0.0.0:8000".parse().unwrap();
        let err = ServerError::Bind {
            addr,
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        };
        let msg = err.to_string();
        assert!(msg.contains("0.0.0.0:8000"), "got: {msg}");
        assert!(msg.contains("address in use"), "got: {msg}");
    }

    #[test]
    fn test_invalid_address_message() {
        let err = ServerError::InvalidAddress("not-a-host:8000".to_string());
        assert_eq!(err.to_string(), "Invalid listen address: not-a-host:8000");
    }
}
