//! RuntimeState contract tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use chrono::{Duration as ChronoDuration, Local};

use pulseboard_core::{EnvMap, RuntimeState};

fn env() -> EnvMap {
    let mut m = EnvMap::new();
    m.insert("APP_NAME".into(), "Dash".into());
    m
}

#[test]
fn starts_at_zero_with_activity_at_start() {
    let state = RuntimeState::new(env());
    assert_eq!(state.counter(), 0);
    assert_eq!(state.requests(), 0);
    assert_eq!(
        state.last_activity().timestamp_micros(),
        state.started_at().timestamp_micros()
    );
    assert_eq!(state.environment().get("APP_NAME").map(String::as_str), Some("Dash"));
}

#[test]
fn tick_advances_counter_and_activity() {
    let state = RuntimeState::new(env());
    let later = state.started_at() + ChronoDuration::seconds(10);

    assert_eq!(state.tick_at(later), 1);
    assert_eq!(state.counter(), 1);
    assert_eq!(state.last_activity().timestamp_micros(), later.timestamp_micros());

    assert_eq!(state.tick(), 2);
}

#[test]
fn last_activity_never_moves_backwards() {
    let state = RuntimeState::new(env());
    let later = state.started_at() + ChronoDuration::seconds(30);
    let earlier = state.started_at() + ChronoDuration::seconds(5);

    state.tick_at(later);
    state.tick_at(earlier);

    assert_eq!(state.counter(), 2);
    assert_eq!(state.last_activity().timestamp_micros(), later.timestamp_micros());
}

#[test]
fn record_request_returns_running_total() {
    let state = RuntimeState::new(env());
    assert_eq!(state.record_request(), 1);
    assert_eq!(state.record_request(), 2);
    assert_eq!(state.requests(), 2);
    assert_eq!(state.counter(), 0, "requests must not touch the ticker counter");
}

#[test]
fn concurrent_increments_are_not_lost() {
    let state = Arc::new(RuntimeState::new(env()));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let state = Arc::clone(&state);
            thread::spawn(move || {
                for _ in 0..1_000 {
                    state.record_request();
                    state.tick();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(state.requests(), 8_000);
    assert_eq!(state.counter(), 8_000);
    assert!(state.last_activity() <= Local::now());
}

#[test]
fn uptime_increases() {
    let state = RuntimeState::new(env());
    let a = state.uptime();
    thread::sleep(std::time::Duration::from_millis(5));
    let b = state.uptime();
    assert!(b > a);
}

#[test]
fn snapshot_reflects_current_values() {
    let state = RuntimeState::new(env());
    state.tick();
    state.record_request();
    state.record_request();

    let snap = state.snapshot();
    assert_eq!(snap.counter, 1);
    assert_eq!(snap.requests, 2);
    assert_eq!(snap.started_at, state.started_at());
    assert_eq!(snap.environment, env());
}
