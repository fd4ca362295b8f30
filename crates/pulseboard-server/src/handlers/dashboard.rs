//! `GET /`: the human-readable page.

use std::fmt::Write;

use axum::{extract::State, response::Html};
use chrono::Local;

use pulseboard_core::{clock, env::redacted, StateSnapshot};

use crate::app_state::AppState;

pub async fn index(State(app): State<AppState>) -> Html<String> {
    let rt = app.runtime();
    rt.record_request();
    let snap = rt.snapshot();
    let now = clock::display_time(&Local::now());

    Html(render_page(&app.settings().app_name, &snap, &now))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Renders the state record. The environment section deliberately shows the
/// same filtered map as `/env`, never the raw startup mapping.
pub fn render_page(app_name: &str, snap: &StateSnapshot, current_time: &str) -> String {
    let name = escape_html(app_name);
    let uptime = clock::format_uptime(snap.uptime);

    let mut env_rows = String::new();
    for (k, v) in redacted(&snap.environment) {
        let _ = writeln!(
            env_rows,
            "        <tr><th>{}</th><td>{}</td></tr>",
            escape_html(&k),
            escape_html(&v)
        );
    }

    let mut page = String::new();
    let _ = write!(
        page,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{name}</title>
</head>
<body>
  <h1>{name}</h1>
  <p>Uptime: <strong>{uptime}</strong></p>
  <p>Current time: {current_time}</p>
  <h2>State</h2>
  <table>
    <tr><th>counter</th><td>{counter}</td></tr>
    <tr><th>requests</th><td>{requests}</td></tr>
    <tr><th>start_time</th><td>{start}</td></tr>
    <tr><th>last_activity</th><td>{last}</td></tr>
  </table>
  <h2>Environment</h2>
  <table>
{env_rows}  </table>
</body>
</html>
"#,
        counter = snap.counter,
        requests = snap.requests,
        start = clock::display_time(&snap.started_at),
        last = clock::display_time(&snap.last_activity),
        current_time = escape_html(current_time),
    );
    page
}
