// Server loop module
// Accepts connections until the shutdown future resolves

use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Run the accept loop on `listener`.
///
/// Accept errors are logged and the loop keeps going. When `shutdown`
/// resolves the listener is dropped; connections already being served
/// finish on their own tasks.
#[allow(clippy::ignored_unit_patterns)]
pub async fn start_server_loop<S>(listener: TcpListener, state: Arc<AppState>, shutdown: S)
where
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = &mut shutdown => {
                logger::log_shutdown("No longer accepting connections");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::server::create_listener;

    #[tokio::test]
    async fn test_loop_returns_on_shutdown() {
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let state = Arc::new(AppState::new(&Config::default()));

        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let server = tokio::spawn(start_server_loop(listener, state, async {
            let _ = rx.await;
        }));

        tx.send(()).unwrap();
        tokio::time::timeout(std::time::Duration::from_secs(5), server)
            .await
            .expect("server loop did not stop")
            .unwrap();

        // listener is gone once the loop returns
        assert!(tokio::net::TcpStream::connect(addr).await.is_err());
    }
}
