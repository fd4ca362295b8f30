//! Shared error type across pulseboard crates.

use thiserror::Error;

/// Stable error codes (used in logs and tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid configuration value or file.
    Config,
    /// Unsupported config file version.
    UnsupportedVersion,
    /// I/O failure (bind, serve).
    Io,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Io => "IO",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PulseError>;

/// Startup and runtime errors. HTTP handlers never produce these; they only
/// surface while the process is being configured or bound.
#[derive(Debug, Error)]
pub enum PulseError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl PulseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PulseError::Config(_) => ErrorCode::Config,
            PulseError::UnsupportedVersion(_) => ErrorCode::UnsupportedVersion,
            PulseError::Io(_) => ErrorCode::Io,
        }
    }
}
