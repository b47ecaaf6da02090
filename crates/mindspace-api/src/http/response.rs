//! Envelope format for the `/api/v1` routes.
//!
//! ```json
//! {
//!   "data": { "label": 1, "similarity": 0.83, "model": "..." },
//!   "meta": { "request_id": "...", "timestamp": "...", "response_time_ms": 5 },
//!   "_links": { "centroids": "/api/v1/centroids", "self": "/api/v1/classify" }
//! }
//! ```
//!
//! Failures carry `errors` instead of `data`. `POST /predict` does not use the
//! envelope.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub meta: ApiMeta,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiErrorDetail>,
    /// Related routes, serialized in key order.
    #[serde(rename = "_links", skip_serializing_if = "BTreeMap::is_empty")]
    pub links: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Serialize)]
pub struct ApiMeta {
    pub request_id: String,
    /// RFC 3339.
    pub timestamp: String,
    pub response_time_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable code, e.g. `NO_MATCH`.
    pub code: &'static str,
    pub message: String,
}

impl ApiMeta {
    fn now(request_id: String, response_time_ms: u64) -> Self {
        Self {
            request_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
            response_time_ms,
        }
    }
}

/// Request id plus start time, taken when a handler begins.
#[derive(Debug)]
pub struct RequestClock {
    request_id: String,
    started: Instant,
}

impl RequestClock {
    pub fn start() -> Self {
        Self {
            request_id: new_request_id(),
            started: Instant::now(),
        }
    }

    /// Wrap `data` in a success envelope timed from [`RequestClock::start`].
    pub fn success<T: Serialize>(self, data: T) -> ApiResponse<T> {
        let elapsed = self.started.elapsed().as_millis() as u64;
        ApiResponse {
            data: Some(data),
            meta: ApiMeta::now(self.request_id, elapsed),
            errors: Vec::new(),
            links: BTreeMap::new(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn with_link(mut self, rel: &'static str, href: &'static str) -> Self {
        self.links.insert(rel, href);
        self
    }
}

impl ApiResponse<()> {
    /// Envelope with a single error and no data.
    pub fn error(code: &'static str, message: String) -> Self {
        Self {
            data: None,
            meta: ApiMeta::now(new_request_id(), 0),
            errors: vec![ApiErrorDetail { code, message }],
            links: BTreeMap::new(),
        }
    }
}

/// UUID v7, so ids sort by creation time.
pub fn new_request_id() -> String {
    uuid::Uuid::now_v7().to_string()
}
