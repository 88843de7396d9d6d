//! Metrics registry for the sample app.
//!
//! One instance is created at startup and shared through `AppState`; tests
//! build their own. Custom series are rendered first, then process metrics.

use std::time::Duration;

use axum::http::{Method, StatusCode};
use sample_app_core::error::Result;
use sample_app_core::metrics::{CounterVec, Histogram};

use super::process::ProcessCollector;

pub const REQUEST_TOTAL: &str = "sample_app_request_total";
pub const REQUEST_LATENCY: &str = "sample_app_request_latency_seconds";

/// Latency bucket upper bounds in seconds (5 ms .. 5 s).
pub const LATENCY_BUCKETS: [f64; 10] = [0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.0, 5.0];

pub struct AppMetrics {
    /// Labels: `endpoint`, `method`, `http_status`.
    pub request_total: CounterVec<3>,
    pub request_latency: Histogram,
    process: ProcessCollector,
}

impl AppMetrics {
    pub fn new() -> Result<Self> {
        Ok(Self {
            request_total: CounterVec::new(
                REQUEST_TOTAL,
                "Total number of HTTP requests handled",
                ["endpoint", "method", "http_status"],
            ),
            request_latency: Histogram::new(REQUEST_LATENCY, "Request latency", &LATENCY_BUCKETS)?,
            process: ProcessCollector::default(),
        })
    }

    /// Record one served request: a latency sample and a counter increment.
    pub fn observe_request(&self, endpoint: &str, method: &Method, status: StatusCode, latency: Duration) {
        self.request_latency.observe(latency);
        self.request_total.inc([endpoint, method.as_str(), status.as_str()]);
    }

    /// Render every metric family in text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.request_total.render(&mut out);
        self.request_latency.render(&mut out);
        self.process.render(&mut out);
        out
    }
}
