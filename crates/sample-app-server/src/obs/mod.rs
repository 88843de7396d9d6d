//! In-process metrics: the request counter/latency registry and process
//! metrics, rendered by the `/metrics` handler.

pub mod metrics;
pub mod process;

pub use metrics::AppMetrics;
