// Signal handling module
//
// Supported signals:
// - SIGTERM: Graceful shutdown (pm2 stop, systemctl stop)
// - SIGINT:  Graceful shutdown (Ctrl+C, pm2 reload)

/// Resolve once SIGINT or SIGTERM arrives (Ctrl+C only on non-Unix).
///
/// If a handler cannot be registered the error is logged and that signal is
/// simply never observed.
#[cfg(unix)]
pub async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                crate::logger::log_error(&format!("Failed to register SIGTERM handler: {e}"));
                std::future::pending::<()>().await;
            }
        }
    };

    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            crate::logger::log_error(&format!("Failed to register SIGINT handler: {e}"));
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        () = terminate => crate::logger::log_shutdown("SIGTERM received"),
        () = interrupt => crate::logger::log_shutdown("SIGINT received"),
    }
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => crate::logger::log_shutdown("Ctrl+C received"),
        Err(e) => {
            crate::logger::log_error(&format!("Failed to register Ctrl+C handler: {e}"));
            std::future::pending::<()>().await;
        }
    }
}
