//! HTTP response building module
//!
//! Builders for the handful of responses the service produces.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain";

const INTERNAL_ERROR_JSON: &str = r#"{"error":"Internal Server Error"}"#;

/// Build a JSON response from any serializable body
pub fn build_json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_vec(body) {
        Ok(j) => j,
        Err(e) => {
            crate::logger::log_error(&format!("Failed to serialize response: {e}"));
            return build_500_response();
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", CONTENT_TYPE_JSON)
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            build_500_response()
        })
}

/// Build 404 Not Found response (plain text, never JSON)
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", CONTENT_TYPE_TEXT)
        .body(Full::new(Bytes::from_static(b"Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            let mut resp = Response::new(Full::new(Bytes::from_static(b"Not Found")));
            *resp.status_mut() = StatusCode::NOT_FOUND;
            resp
        })
}

/// Build 500 Internal Server Error response
fn build_500_response() -> Response<Full<Bytes>> {
    let mut resp = Response::new(Full::new(Bytes::from_static(INTERNAL_ERROR_JSON.as_bytes())));
    *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    resp.headers_mut().insert(
        hyper::header::CONTENT_TYPE,
        hyper::header::HeaderValue::from_static(CONTENT_TYPE_JSON),
    );
    resp
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_json_response_headers_and_body() {
        let resp = build_json_response(StatusCode::OK, &serde_json::json!({ "ok": true }));
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-type"], "application/json");
        assert_eq!(body_string(resp).await, r#"{"ok":true}"#);
    }

    #[tokio::test]
    async fn test_404_is_plain_text() {
        let resp = build_404_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(resp.headers()["content-type"], "text/plain");
        assert_eq!(body_string(resp).await, "Not Found");
    }

    #[tokio::test]
    async fn test_500_fallback() {
        let resp = build_500_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(resp).await, INTERNAL_ERROR_JSON);
    }
}
