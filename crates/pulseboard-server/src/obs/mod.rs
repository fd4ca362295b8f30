//! Request observability: per-route counters and latency histograms, exposed
//! on `/metrics`.

pub mod metrics;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use tokio::time::Instant;

use crate::app_state::AppState;

pub use metrics::DashboardMetrics;

/// Route-layer middleware recording one sample per handled request.
pub async fn track(State(app): State<AppState>, req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".into());
    let started = Instant::now();

    let res = next.run(req).await;

    let elapsed = started.elapsed();
    let status = res.status().as_u16().to_string();
    let metrics = app.metrics();
    metrics.http_requests.inc(&[("route", &route), ("status", &status)]);
    metrics.http_duration.observe(&[("route", &route)], elapsed);
    tracing::debug!(%route, %status, micros = elapsed.as_micros() as u64, "request served");

    res
}
