//! `/` endpoint

use chrono::{SecondsFormat, Utc};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::{Deserialize, Serialize};

use crate::http;

pub const GREETING: &str = "Hello World! Server is up and running.";
pub const API_VERSION: &str = "1.0.0";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HomeBody {
    pub message: String,
    /// UTC, millisecond precision, `Z` suffix
    pub timestamp: String,
    pub version: String,
}

impl HomeBody {
    pub fn now() -> Self {
        Self {
            message: GREETING.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            version: API_VERSION.to_string(),
        }
    }
}

pub fn serve_home() -> Response<Full<Bytes>> {
    http::build_json_response(StatusCode::OK, &HomeBody::now())
}
