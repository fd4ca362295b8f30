//! Axum router wiring.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, handlers, obs, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/stats", get(handlers::stats))
        .route("/env", get(handlers::env))
        .route("/health", get(ops::health))
        .route("/metrics", get(ops::metrics))
        .route_layer(middleware::from_fn_with_state(state.clone(), obs::track))
        .with_state(state)
}
