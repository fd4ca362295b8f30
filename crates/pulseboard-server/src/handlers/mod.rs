//! Dashboard endpoints. Each one counts toward `requests`.

pub mod api;
pub mod dashboard;

pub use api::{env, stats, StatsBody};
pub use dashboard::index;
