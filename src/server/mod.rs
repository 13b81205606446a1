// Server module entry
// Listener creation, connection serving and shutdown handling

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module gets a different name
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used items
pub use listener::create_listener;
pub use server_loop::start_server_loop;
pub use signal::shutdown_signal;
