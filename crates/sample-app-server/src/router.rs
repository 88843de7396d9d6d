//! Axum route table. Unknown paths fall through to axum's default 404.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, work};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(work::ENDPOINT, get(work::index))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
