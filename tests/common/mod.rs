#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use pulse_server::config::{AppState, Config};
use pulse_server::server;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A server running on a background task until `stop` is called
pub struct TestApp {
    pub addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn stop(self) {
        let _ = self.shutdown.send(());
        self.handle.await.expect("server task panicked");
    }
}

/// Start the server for `cfg`, binding exactly the configured address
pub fn spawn_app_with(mut cfg: Config) -> TestApp {
    cfg.logging.access_log = false;
    let listener = server::create_listener(cfg.socket_addr().unwrap()).unwrap();
    let addr = listener.local_addr().unwrap();
    let state = Arc::new(AppState::new(&cfg));

    let (tx, rx) = oneshot::channel();
    let handle = tokio::spawn(server::start_server_loop(listener, state, async {
        let _ = rx.await;
    }));

    TestApp {
        addr,
        shutdown: tx,
        handle,
    }
}

/// Start the server on an ephemeral loopback port
pub fn spawn_app() -> TestApp {
    let mut cfg = Config::default();
    cfg.server.host = "127.0.0.1".to_string();
    cfg.server.port = 0;
    spawn_app_with(cfg)
}

/// A loopback port that was free a moment ago
pub fn free_port() -> u16 {
    let probe = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    probe.local_addr().unwrap().port()
}

/// HTTP client that never routes loopback traffic through a proxy
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build HTTP client")
}
