//! pulseboard server library entry.
//!
//! Wires configuration, the shared runtime state, the background ticker, and
//! the HTTP surface. Consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod obs;
pub mod ops;
pub mod router;
pub mod ticker;
