use axum::{extract::State, Json};
use chrono::Local;
use serde::Serialize;

use pulseboard_core::{clock, env::redacted, EnvMap};

use crate::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct StatsBody {
    pub app_name: String,
    pub counter: u64,
    pub uptime_seconds: f64,
    pub requests: u64,
    pub last_activity: String,
    pub current_time: String,
    pub environment: String,
    pub debug: bool,
}

/// `GET /api/stats`
pub async fn stats(State(app): State<AppState>) -> Json<StatsBody> {
    let rt = app.runtime();
    let requests = rt.record_request();
    let settings = app.settings();

    Json(StatsBody {
        app_name: settings.app_name.clone(),
        counter: rt.counter(),
        uptime_seconds: rt.uptime().as_secs_f64(),
        requests,
        last_activity: clock::iso8601(&rt.last_activity()),
        current_time: clock::iso8601(&Local::now()),
        environment: settings.environment.clone(),
        debug: settings.debug,
    })
}

/// `GET /env`: the startup mapping minus sensitive keys.
pub async fn env(State(app): State<AppState>) -> Json<EnvMap> {
    let rt = app.runtime();
    rt.record_request();
    Json(redacted(rt.environment()))
}
