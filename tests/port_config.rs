mod common;

use pulse_server::config::Config;
use reqwest::StatusCode;

use common::{client, free_port, spawn_app_with};

const MISSING_CONFIG: &str = "no-such-config-for-port-tests";

#[tokio::test]
async fn port_variable_selects_listen_port() {
    let port = free_port();
    let mut cfg = Config::load_from(MISSING_CONFIG, Some(port.to_string().as_str())).unwrap();
    cfg.server.host = "127.0.0.1".to_string();

    let app = spawn_app_with(cfg);
    assert_eq!(app.addr.port(), port);

    let response = client()
        .get(format!("http://127.0.0.1:{port}/health"))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status(), StatusCode::OK);

    app.stop().await;
}

#[test]
fn port_9000_overrides_default() {
    let cfg = Config::load_from(MISSING_CONFIG, Some("9000")).unwrap();
    let addr = cfg.socket_addr().unwrap();
    assert_eq!(addr.port(), 9000);
    assert!(addr.ip().is_unspecified(), "expected all interfaces, got {addr}");
}

#[test]
fn missing_or_bad_port_uses_8000() {
    for port_var in [None, Some(""), Some("not-a-port"), Some("65536")] {
        let cfg = Config::load_from(MISSING_CONFIG, port_var).unwrap();
        assert_eq!(cfg.socket_addr().unwrap().port(), 8000, "PORT={port_var:?}");
    }
}

#[tokio::test]
async fn port_in_use_fails_to_bind() {
    let app = common::spawn_app();

    let result = pulse_server::server::create_listener(app.addr);
    assert!(result.is_err(), "second bind on {} should fail", app.addr);

    app.stop().await;
}
