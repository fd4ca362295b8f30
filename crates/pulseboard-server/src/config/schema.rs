use std::collections::BTreeMap;

use pulseboard_core::error::{PulseError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub version: u32,

    #[serde(default)]
    pub app: AppSection,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub ticker: TickerSection,

    /// Extra entries appended to the environment mapping shown on `/env`.
    #[serde(default)]
    pub extra_env: BTreeMap<String, String>,
}

impl FileConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PulseError::UnsupportedVersion(self.version));
        }
        if self.app.name.trim().is_empty() {
            return Err(PulseError::Config("app.name must not be empty".into()));
        }

        self.ticker.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppSection {
    #[serde(default = "default_app_name")]
    pub name: String,

    #[serde(default = "default_environment")]
    pub environment: String,

    #[serde(default)]
    pub debug: bool,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            environment: default_environment(),
            debug: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TickerSection {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for TickerSection {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl TickerSection {
    pub fn validate(&self) -> Result<()> {
        if !(100..=3_600_000).contains(&self.interval_ms) {
            return Err(PulseError::Config(
                "ticker.interval_ms must be between 100 and 3600000".into(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn default_app_name() -> String {
    "SimplePythonApp".into()
}
pub(crate) fn default_environment() -> String {
    "development".into()
}
pub(crate) fn default_host() -> String {
    "0.0.0.0".into()
}
pub(crate) fn default_port() -> u16 {
    8000
}
pub(crate) fn default_interval_ms() -> u64 {
    10_000
}
