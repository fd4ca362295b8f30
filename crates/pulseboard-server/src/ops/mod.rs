//! Operational HTTP endpoints. Neither counts toward `requests`.
//!
//! - `/health`  : liveness
//! - `/metrics` : Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use serde::Serialize;

use pulseboard_core::clock;

use crate::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub time: String,
    pub uptime_seconds: f64,
}

pub async fn health(State(app): State<AppState>) -> Json<HealthBody> {
    Json(HealthBody {
        status: "healthy",
        time: clock::iso8601(&Local::now()),
        uptime_seconds: app.runtime().uptime().as_secs_f64(),
    })
}

pub async fn metrics(State(app): State<AppState>) -> Response {
    let rt = app.runtime();
    let gauges = [
        ("pulseboard_ticker_counter", rt.counter() as f64),
        ("pulseboard_requests", rt.requests() as f64),
        ("pulseboard_uptime_seconds", rt.uptime().as_secs_f64()),
    ];
    let body = app.metrics().render(&gauges);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}
