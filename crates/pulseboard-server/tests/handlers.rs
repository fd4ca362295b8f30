//! Endpoint behavior, calling the handlers directly.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use axum::extract::State;

use pulseboard_core::env::SENSITIVE_MARKERS;
use pulseboard_server::app_state::AppState;
use pulseboard_server::config::Settings;
use pulseboard_server::{handlers, ops};

fn app_with(extra: &[(&str, &str)]) -> AppState {
    let mut settings = Settings::default();
    settings.app_name = "Dash <test>".into();
    settings.vars.insert("APP_NAME".into(), settings.app_name.clone());
    for (k, v) in extra {
        settings.vars.insert(k.to_string(), v.to_string());
    }
    AppState::new(settings)
}

#[tokio::test]
async fn health_is_healthy_immediately() {
    let app = app_with(&[]);
    let body = ops::health(State(app.clone())).await.0;

    assert_eq!(body.status, "healthy");
    assert!(body.uptime_seconds >= 0.0 && body.uptime_seconds < 5.0);
    assert!(body.time.contains('T'));
}

#[tokio::test]
async fn health_does_not_count_requests() {
    let app = app_with(&[]);
    handlers::stats(State(app.clone())).await;
    handlers::env(State(app.clone())).await;
    handlers::index(State(app.clone())).await;
    for _ in 0..5 {
        assert_eq!(ops::health(State(app.clone())).await.0.status, "healthy");
    }
    assert_eq!(app.runtime().requests(), 3);
}

#[tokio::test]
async fn stats_requests_increase_by_two() {
    let app = app_with(&[]);
    let first = handlers::stats(State(app.clone())).await.0;
    let second = handlers::stats(State(app.clone())).await.0;
    let third = handlers::stats(State(app.clone())).await.0;

    assert_eq!(third.requests - first.requests, 2);
    assert_eq!(second.requests, first.requests + 1);
}

#[tokio::test]
async fn stats_fields() {
    let app = app_with(&[]);
    app.runtime().tick();
    let body = handlers::stats(State(app.clone())).await.0;

    assert_eq!(body.app_name, "Dash <test>");
    assert_eq!(body.counter, 1);
    assert_eq!(body.requests, 1);
    assert_eq!(body.environment, "development");
    assert!(!body.debug);
    assert!(body.last_activity.contains('T'));
    assert!(body.current_time >= body.last_activity);

    let json = serde_json::to_value(&body).unwrap();
    let fields = [
        "app_name",
        "counter",
        "uptime_seconds",
        "requests",
        "last_activity",
        "current_time",
        "environment",
        "debug",
    ];
    for field in fields {
        assert!(json.get(field).is_some(), "missing {field}");
    }
    assert!(json["uptime_seconds"].is_f64());
}

#[tokio::test]
async fn uptime_strictly_increases() {
    let app = app_with(&[]);
    let a = ops::health(State(app.clone())).await.0.uptime_seconds;
    tokio::time::sleep(Duration::from_millis(20)).await;
    let b = handlers::stats(State(app.clone())).await.0.uptime_seconds;
    tokio::time::sleep(Duration::from_millis(20)).await;
    let c = ops::health(State(app.clone())).await.0.uptime_seconds;
    assert!(a < b && b < c);
}

#[tokio::test]
async fn env_hides_sensitive_keys() {
    let app = app_with(&[
        ("SECRET_KEY", "abc"),
        ("DB_PASSWORD", "x"),
        ("GH_TOKEN", "y"),
        ("REGION", "eu"),
    ]);
    let body = handlers::env(State(app.clone())).await.0;

    assert!(!body.contains_key("SECRET_KEY"));
    assert!(!body.contains_key("DB_PASSWORD"));
    assert!(!body.contains_key("GH_TOKEN"));
    assert_eq!(body.get("REGION").map(String::as_str), Some("eu"));
    assert_eq!(body.get("APP_NAME").map(String::as_str), Some("Dash <test>"));
    for k in body.keys() {
        let lower = k.to_lowercase();
        assert!(SENSITIVE_MARKERS.iter().all(|m| !lower.contains(m)), "{k} leaked");
    }
    assert_eq!(app.runtime().requests(), 1);
}

#[tokio::test]
async fn index_renders_escaped_page() {
    let app = app_with(&[("SECRET_KEY", "abc")]);
    let page = handlers::index(State(app.clone())).await.0;

    assert!(page.contains("<h1>Dash &lt;test&gt;</h1>"));
    assert!(page.contains("Uptime: <strong>0:00:0"));
    assert!(page.contains("<tr><th>requests</th><td>1</td></tr>"));
    assert!(page.contains("ENVIRONMENT"));
    assert!(!page.contains("SECRET_KEY"));
    assert!(!page.contains("abc"));
    assert_eq!(app.runtime().requests(), 1);
}
