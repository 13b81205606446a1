// Application state module
// Holds the loaded configuration plus the process-wide clocks and counters

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Instant;

use super::types::Config;

/// Application state, shared read-only by every connection task
pub struct AppState {
    pub config: Config,

    /// Captured once at startup; `/health` reports time elapsed since this
    pub started_at: Instant,

    // Cached config values for fast access without locks
    pub cached_access_log: AtomicBool,

    /// Connections currently being served
    pub active_connections: AtomicUsize,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            started_at: Instant::now(),
            cached_access_log: AtomicBool::new(config.logging.access_log),
            active_connections: AtomicUsize::new(0),
        }
    }

    /// Milliseconds since startup, fractional, from the monotonic clock
    pub fn uptime_ms(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64() * 1000.0
    }

    pub fn access_log_enabled(&self) -> bool {
        self.cached_access_log.load(Ordering::Relaxed)
    }
}
