//! `/health` endpoint
//!
//! Readiness signal for the process manager and load balancer. Deployment
//! tooling only looks at the 200 status and `status == "healthy"`, so those
//! two must stay stable whatever else is added to the body.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::AppState;
use crate::http;

pub const HEALTHY: &str = "healthy";

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthBody {
    pub status: String,
    /// Milliseconds since process start
    pub uptime: f64,
}

impl HealthBody {
    pub fn healthy(state: &AppState) -> Self {
        Self {
            status: HEALTHY.to_string(),
            uptime: state.uptime_ms(),
        }
    }
}

pub fn serve_health(state: &AppState) -> Response<Full<Bytes>> {
    http::build_json_response(StatusCode::OK, &HealthBody::healthy(state))
}
