//! Simulated-work endpoint (`GET /`).
//!
//! Sleeps for a uniformly drawn delay, then records the measured latency and
//! a request count. Never fails.

use std::time::{Duration, Instant};

use axum::{
    extract::State,
    http::{Method, StatusCode},
    Json,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::app_state::AppState;

pub const ENDPOINT: &str = "/";
/// Label recorded for every call; axum also routes `HEAD` here.
pub const METHOD: Method = Method::GET;

#[derive(Debug, Serialize, Deserialize)]
pub struct WorkResponse {
    pub ok: bool,
    pub latency_seconds: f64,
}

pub async fn index(State(state): State<AppState>) -> Json<WorkResponse> {
    let start = Instant::now();

    let work = &state.cfg().work;
    let delay = {
        let mut rng = rand::thread_rng();
        let secs = rng.gen_range(work.min_delay_ms as f64 / 1000.0..=work.max_delay_ms as f64 / 1000.0);
        Duration::from_secs_f64(secs)
    };
    tokio::time::sleep(delay).await;

    let latency = start.elapsed();
    state
        .metrics()
        .observe_request(ENDPOINT, &METHOD, StatusCode::OK, latency);

    tracing::debug!(
        delay_ms = delay.as_millis() as u64,
        latency_s = latency.as_secs_f64(),
        "simulated work done"
    );

    Json(WorkResponse {
        ok: true,
        latency_seconds: latency.as_secs_f64(),
    })
}
