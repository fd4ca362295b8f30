//! pulseboard core: runtime state, environment redaction, and time formatting.
//!
//! This crate holds the state record shared between the background ticker and
//! the HTTP handlers, plus the pure helpers used to render it. It carries no
//! HTTP or async runtime dependencies so the state contract can be exercised
//! on its own.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod clock;
pub mod env;
pub mod error;
pub mod state;

pub use env::EnvMap;
pub use error::{PulseError, Result};
pub use state::{RuntimeState, StateSnapshot};
