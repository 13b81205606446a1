// Configuration module entry point
// Loads layered configuration and holds runtime state

mod state;
mod types;

use std::net::SocketAddr;

use crate::error::ServerError;
use crate::logger;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, LoggingConfig, PerformanceConfig, ServerConfig, DEFAULT_HOST, DEFAULT_PORT,
};

/// Config file looked up in the working directory (extension optional)
pub const DEFAULT_CONFIG_PATH: &str = "config";

/// Environment variable carrying the listen port
pub const PORT_ENV_VAR: &str = "PORT";

impl Config {
    /// Load configuration from `config.*` in the working directory, the
    /// `PULSE__*` environment and the `PORT` variable
    pub fn load() -> Result<Self, ServerError> {
        let port_var = std::env::var(PORT_ENV_VAR).ok();
        Self::load_from(DEFAULT_CONFIG_PATH, port_var.as_deref())
    }

    /// Load configuration from specified file path (extension optional).
    ///
    /// Layers, lowest priority first: built-in defaults, the config file
    /// (skipped when missing), `PULSE__SECTION__KEY` variables, then
    /// `port_var` when it parses as a port number.
    pub fn load_from(config_path: &str, port_var: Option<&str>) -> Result<Self, ServerError> {
        let mut builder = config::Config::builder()
            .set_default("server.host", types::DEFAULT_HOST)?
            .set_default("server.port", i64::from(types::DEFAULT_PORT))?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", types::DEFAULT_ACCESS_LOG_FORMAT)?
            .set_default("performance.keep_alive_timeout", types::DEFAULT_KEEP_ALIVE_TIMEOUT)?
            .set_default("performance.read_timeout", types::DEFAULT_READ_TIMEOUT)?
            .set_default("performance.write_timeout", types::DEFAULT_WRITE_TIMEOUT)?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("PULSE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Some(raw) = port_var {
            match parse_port(raw) {
                Some(port) => {
                    builder = builder.set_override("server.port", i64::from(port))?;
                }
                None => logger::log_warning(&format!(
                    "Ignoring {PORT_ENV_VAR}={raw:?}: not a valid port number"
                )),
            }
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| {
                ServerError::InvalidAddress(format!(
                    "{}:{} ({e})",
                    self.server.host, self.server.port
                ))
            })
    }
}

/// Parse a `PORT` value; `None` when empty, non-numeric or out of range
pub fn parse_port(raw: &str) -> Option<u16> {
    raw.trim().parse::<u16>().ok()
}
