//! Time rendering helpers.
//!
//! Timestamps are local naive time, matching what an operator sees on the
//! host. ISO-8601 output drops the fractional part when it is zero.

use std::time::Duration;

use chrono::{DateTime, Local, Timelike};

/// `YYYY-MM-DDTHH:MM:SS[.ffffff]`
pub fn iso8601(ts: &DateTime<Local>) -> String {
    if ts.nanosecond() / 1_000 % 1_000_000 == 0 {
        ts.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        ts.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// `YYYY-MM-DD HH:MM:SS`
pub fn display_time(ts: &DateTime<Local>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Human uptime with sub-second precision truncated: `H:MM:SS`, or
/// `N day(s), H:MM:SS` once it passes 24 hours.
pub fn format_uptime(uptime: Duration) -> String {
    let total = uptime.as_secs();
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    let hms = format!("{hours}:{minutes:02}:{seconds:02}");
    match days {
        0 => hms,
        1 => format!("1 day, {hms}"),
        n => format!("{n} days, {hms}"),
    }
}
