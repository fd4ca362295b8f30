//! Shared runtime state.
//!
//! One `RuntimeState` is created at process start and shared (behind an
//! `Arc`) between the background ticker and every HTTP handler. All mutation
//! goes through atomics, so concurrent increments are never lost and readers
//! never block the ticker.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::time::{Duration, Instant};

use chrono::{DateTime, Local, Utc};

use crate::env::EnvMap;

pub struct RuntimeState {
    started_at: DateTime<Local>,
    started: Instant,
    counter: AtomicU64,
    /// Unix microseconds; only ever moves forward (`fetch_max`).
    last_activity_us: AtomicI64,
    requests: AtomicU64,
    environment: EnvMap,
}

/// Point-in-time copy of the state, used for rendering.
#[derive(Debug, Clone)]
pub struct StateSnapshot {
    pub started_at: DateTime<Local>,
    pub uptime: Duration,
    pub counter: u64,
    pub last_activity: DateTime<Local>,
    pub requests: u64,
    pub environment: EnvMap,
}

impl RuntimeState {
    pub fn new(environment: EnvMap) -> Self {
        let started_at = Local::now();
        Self {
            started_at,
            started: Instant::now(),
            counter: AtomicU64::new(0),
            last_activity_us: AtomicI64::new(started_at.timestamp_micros()),
            requests: AtomicU64::new(0),
            environment,
        }
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    /// Monotonic time since start.
    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn counter(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }

    /// Advance the counter and stamp `last_activity` with the current time.
    /// Returns the new counter value.
    pub fn tick(&self) -> u64 {
        self.tick_at(Local::now())
    }

    /// Like [`tick`](Self::tick) with an explicit timestamp. A timestamp older
    /// than the stored one leaves `last_activity` unchanged.
    pub fn tick_at(&self, now: DateTime<Local>) -> u64 {
        let next = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        self.last_activity_us
            .fetch_max(now.timestamp_micros(), Ordering::Relaxed);
        next
    }

    pub fn last_activity(&self) -> DateTime<Local> {
        let us = self.last_activity_us.load(Ordering::Relaxed);
        let nanos = (us.rem_euclid(1_000_000) * 1_000) as u32;
        DateTime::<Utc>::from_timestamp(us.div_euclid(1_000_000), nanos)
            .map(|ts| ts.with_timezone(&Local))
            .unwrap_or(self.started_at)
    }

    pub fn requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    /// Count one handled request. Returns the new total.
    pub fn record_request(&self) -> u64 {
        self.requests.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn environment(&self) -> &EnvMap {
        &self.environment
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            started_at: self.started_at,
            uptime: self.uptime(),
            counter: self.counter(),
            last_activity: self.last_activity(),
            requests: self.requests(),
            environment: self.environment.clone(),
        }
    }
}
